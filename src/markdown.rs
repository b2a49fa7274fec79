//! Markdown parsing, sectioning and truncation.
//!
//! Markdown is parsed with comrak into an arena tree. The tree is split into
//! second-level sections, and long sections are truncated on a deep copy so
//! both the excerpt and the full content can be rendered to HTML.

mod renderer;
mod sections;
mod text;
mod truncate;

pub use renderer::MarkdownRenderer;
pub use sections::{Section, split_sections};
pub use text::plain_text;
pub use truncate::{ELLIPSIS, cut_text, truncate};
