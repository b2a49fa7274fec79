//! Markdown card report generator.
//!
//! Splits markdown documents into second-level sections, renders each as a
//! card truncated to a character budget, and writes self contained HTML
//! pages with a modal per truncated card.

mod assets;
mod batch;
mod cards;
pub mod components;
mod config;
mod convert;
mod markdown;
pub mod pages;
mod util;

pub use batch::{
    BatchSummary, ReportEntry, clean_dir, convert_path, list_reports, markdown_files,
    write_navigation,
};
pub use cards::{Card, Fragment, Modal, Report};
pub use config::Config;
pub use convert::{CardRenderer, DEFAULT_CHAR_BUDGET, DEFAULT_TITLE, render};
pub use markdown::{ELLIPSIS, MarkdownRenderer, cut_text};
pub use util::{format_file_size, format_report_date, format_timestamp};
