//! Markdown to card page conversion.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use comrak::Arena;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cards::{Report, build_cards};
use crate::markdown::{MarkdownRenderer, split_sections};
use crate::pages::report::{ReportPageData, generate as report_page};
use crate::util::format_report_date;

/// Character budget applied when none is configured.
pub const DEFAULT_CHAR_BUDGET: usize = 500;

/// Title used for documents without a level-1 heading.
pub const DEFAULT_TITLE: &str = "News Analysis";

/// Converts markdown documents into card report pages.
///
/// Every second-level section becomes a card. Sections whose visible text
/// exceeds the character budget show a truncated excerpt and link to a
/// modal holding the full section.
pub struct CardRenderer<'a> {
    markdown: MarkdownRenderer<'a>,
    budget: usize,
}

impl<'a> CardRenderer<'a> {
    /// Creates renderer truncating sections longer than `budget` chars.
    ///
    /// A zero budget is raised to one so every excerpt keeps the marker.
    pub fn new(budget: usize) -> Self {
        Self {
            markdown: MarkdownRenderer::new(),
            budget: budget.max(1),
        }
    }

    /// Returns the configured character budget.
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Builds the title and cards of a markdown document.
    ///
    /// Parsing never fails: comrak accepts any text and renders whatever it
    /// cannot interpret as literal text. Sections that fail to render are
    /// skipped with a warning.
    pub fn build(&self, content: &str) -> Report {
        let arena = Arena::new();
        let root = self.markdown.parse(&arena, content);
        let outline = split_sections(&arena, root);

        let title = outline
            .title
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let cards = build_cards(&self.markdown, &arena, &outline.sections, self.budget);

        Report { title, cards }
    }

    /// Renders a complete report page stamped with `date`.
    ///
    /// Output is byte identical for identical input, budget and date.
    pub fn render_on(&self, content: &str, date: NaiveDate) -> String {
        let report = self.build(content);
        let generated_on = format_report_date(date);

        report_page(ReportPageData {
            title: &report.title,
            cards: &report.cards,
            generated_on: &generated_on,
        })
        .into_string()
    }

    /// Renders a complete report page stamped with today's date.
    pub fn render(&self, content: &str) -> String {
        self.render_on(content, Local::now().date_naive())
    }

    /// Converts a markdown file into `<output_dir>/<file stem>.html`.
    ///
    /// The page is rendered fully in memory before anything is written, so
    /// a failure leaves no partial output behind.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Input file cannot be read or is not UTF8
    /// - Input path has no usable file name
    /// - Output directory cannot be created or written
    pub fn convert_file(&self, input: &Path, output_dir: &Path) -> Result<PathBuf> {
        let content = fs::read_to_string(input)
            .with_context(|| format!("Failed to read markdown file: {}", input.display()))?;

        let name = input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .with_context(|| format!("Cannot derive report name from path: {}", input.display()))?;

        let html = self.render(&content);

        fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory: {}", output_dir.display())
        })?;

        let output = output_dir.join(format!("{}.html", name));
        fs::write(&output, html)
            .with_context(|| format!("Failed to write report to {}", output.display()))?;

        log::info!("Converted {} -> {}", input.display(), output.display());
        Ok(output)
    }
}

impl<'a> Default for CardRenderer<'a> {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_BUDGET)
    }
}

/// Renders markdown into a card report page with the given budget.
pub fn render(markdown: &str, char_budget: usize) -> String {
    CardRenderer::new(char_budget).render(markdown)
}
