//! Card and modal model built from markdown sections.

use anyhow::{Context, Result};
use comrak::nodes::AstNode;
use comrak::Arena;

use crate::markdown::{MarkdownRenderer, Section, plain_text, truncate};

/// Rendered HTML of a node sequence with its visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    pub text: String,
}

impl Fragment {
    fn render<'a>(renderer: &MarkdownRenderer<'_>, node: &'a AstNode<'a>) -> Result<Self> {
        Ok(Self {
            html: renderer.render_node(node)?,
            text: plain_text(node),
        })
    }

    /// Length of the visible text in chars.
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Overlay holding the untruncated section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub id: String,
    pub heading: String,
    pub content: Fragment,
}

/// Summary view of one section.
///
/// `content` is the full section when it fits the budget. Otherwise it is
/// the truncated excerpt and `modal` carries the full section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub heading: String,
    pub content: Fragment,
    pub modal: Option<Modal>,
}

impl Card {
    /// Returns true if the card shows an excerpt.
    pub fn is_truncated(&self) -> bool {
        self.modal.is_some()
    }
}

/// Title and cards of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub cards: Vec<Card>,
}

/// Builds the card for the section at `index`.
///
/// # Errors
///
/// Returns error if either fragment fails to render
pub fn build_card<'a>(
    renderer: &MarkdownRenderer<'_>,
    arena: &'a Arena<AstNode<'a>>,
    index: usize,
    section: &Section<'a>,
    budget: usize,
) -> Result<Card> {
    let full = Fragment::render(renderer, section.body).context("Failed to render section")?;

    let Some(excerpt) = truncate(arena, section.body, budget) else {
        return Ok(Card {
            id: format!("card-{}", index),
            heading: section.heading.clone(),
            content: full,
            modal: None,
        });
    };

    let content = Fragment::render(renderer, excerpt).context("Failed to render excerpt")?;
    log::debug!(
        "Truncated section {:?} from {} to {} chars",
        section.heading,
        full.text_len(),
        content.text_len()
    );

    Ok(Card {
        id: format!("card-{}", index),
        heading: section.heading.clone(),
        content,
        modal: Some(Modal {
            id: format!("modal-{}", index),
            heading: section.heading.clone(),
            content: full,
        }),
    })
}

/// Builds one card per section, skipping sections that fail to render.
///
/// Card and modal ids use the section position, so ids stay stable and
/// unique even when a section is skipped.
pub fn build_cards<'a>(
    renderer: &MarkdownRenderer<'_>,
    arena: &'a Arena<AstNode<'a>>,
    sections: &[Section<'a>],
    budget: usize,
) -> Vec<Card> {
    sections
        .iter()
        .enumerate()
        .filter_map(
            |(index, section)| match build_card(renderer, arena, index, section, budget) {
                Ok(card) => Some(card),
                Err(e) => {
                    log::warn!("Skipping section {:?}: {:#}", section.heading, e);
                    None
                }
            },
        )
        .collect()
}
