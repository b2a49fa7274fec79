//! Markdown parsing and HTML rendering with syntax highlighted code blocks.

use anyhow::{Context, Result};
use comrak::nodes::AstNode;
use comrak::{Arena, Options};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Parses markdown into comrak's arena and renders subtrees to HTML.
///
/// Parsing and rendering are split so callers can restructure the tree
/// (sectioning, truncation) between the two steps. Rendering post-processes
/// fenced code blocks with syntect using `hljs-` prefixed CSS classes.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Enables tables, strikethrough, autolinks, task lists and description
    /// lists, smart punctuation, and raw HTML passthrough. Footnotes stay
    /// disabled: comrak hoists their definitions to the end of the document,
    /// which would attach them to whichever section comes last.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.description_lists = true;

        options.parse.smart = true;

        // Reports are produced locally and trusted
        options.render.unsafe_ = true;

        Self {
            options,
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Parses markdown into a document tree allocated in `arena`.
    pub fn parse<'n>(&self, arena: &'n Arena<AstNode<'n>>, content: &str) -> &'n AstNode<'n> {
        comrak::parse_document(arena, content, &self.options)
    }

    /// Renders a node and its descendants to HTML.
    ///
    /// Document nodes render only their children, so a section container
    /// produces exactly the HTML of the blocks it holds.
    ///
    /// # Errors
    ///
    /// Returns error if comrak output is not UTF8 or highlighting fails
    pub fn render_node<'n>(&self, node: &'n AstNode<'n>) -> Result<String> {
        let mut buffer = Vec::new();
        comrak::format_html(node, &self.options, &mut buffer)
            .context("Failed to format markdown node as HTML")?;
        let html = String::from_utf8(buffer).context("Rendered HTML contains invalid UTF8")?;

        self.highlight_code_blocks(&html)
    }

    /// Renders markdown content to an HTML string in one step.
    ///
    /// # Errors
    ///
    /// Returns error if rendering or highlighting fails
    pub fn render(&self, content: &str) -> Result<String> {
        let arena = Arena::new();
        let root = self.parse(&arena, content);
        self.render_node(root)
    }

    /// Replaces plain code block content with syntect highlighted spans.
    ///
    /// Looks for comrak's `<code class="language-X">` blocks and rewrites
    /// their content, keeping the language class on the opening tag.
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        const OPEN: &str = "<code class=\"language-";
        const CLOSE: &str = "</code>";

        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        let mut search_pos = 0;

        while let Some(found) = html[search_pos..].find(OPEN) {
            let code_start = search_pos + found;
            let lang_start = code_start + OPEN.len();

            let Some(lang_len) = html[lang_start..].find('"') else {
                search_pos = code_start + 1;
                continue;
            };
            let lang_end = lang_start + lang_len;
            let language = &html[lang_start..lang_end];

            let Some(tag_len) = html[lang_end..].find('>') else {
                search_pos = code_start + 1;
                continue;
            };
            let content_start = lang_end + tag_len + 1;

            let Some(content_len) = html[content_start..].find(CLOSE) else {
                search_pos = code_start + 1;
                continue;
            };
            let content_end = content_start + content_len;

            let code = html_decode(&html[content_start..content_end]);
            let highlighted = self
                .highlight_code(&code, language)
                .with_context(|| format!("Failed to highlight {} code block", language))?;

            result.push_str(&html[last_end..code_start]);
            result.push_str(OPEN);
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&highlighted);
            result.push_str(CLOSE);

            last_end = content_end + CLOSE.len();
            search_pos = last_end;
        }

        result.push_str(&html[last_end..]);
        Ok(result)
    }

    /// Highlights code with CSS classes, escaping it when the language is unknown.
    fn highlight_code(&self, code: &str, language: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language));

        let Some(syntax) = syntax else {
            return Ok(html_escape(code));
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reverses the entity escaping comrak applies inside code blocks.
fn html_decode(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
