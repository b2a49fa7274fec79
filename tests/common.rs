//! Shared test utilities for integration tests.
//!
//! Provides fixture documents and helpers for inspecting generated pages.

#![allow(dead_code)]

use anyhow::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Fixed stamp so rendered pages compare byte for byte.
pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).expect("Valid date")
}

/// Markdown report with short and long sections of mixed content.
pub fn sample_report() -> String {
    let long_prose = "Markets moved sharply after the announcement. Analysts expect \
        further volatility as traders digest the figures. Bond yields climbed while the \
        currency weakened against major peers. "
        .repeat(4);

    format!(
        "# Daily Brief\n\n\
         Intro paragraph that sits before any section.\n\n\
         ## Markets\n\n{}\n\n\
         ## Weather\n\nMild and dry.\n\n\
         ## Technology\n\n\
         - Chip output rose **sharply** this quarter\n\
         - Cloud spending held steady across regions\n\n\
         | Company | Change |\n|---|---|\n| Acme | +4% |\n\n\
         ```rust\nfn main() {{ println!(\"hi\"); }}\n```\n\n\
         {}\n",
        long_prose, long_prose
    )
}

/// Writes `content` to `dir/name`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, content)?;
    Ok(path)
}

/// Collects every value of `attribute="..."` in document order.
pub fn attribute_values(html: &str, attribute: &str) -> Vec<String> {
    let needle = format!(" {}=\"", attribute);
    let mut values = Vec::new();
    let mut rest = html;

    while let Some(start) = rest.find(&needle) {
        let value_start = start + needle.len();
        let Some(len) = rest[value_start..].find('"') else {
            break;
        };
        values.push(rest[value_start..value_start + len].to_string());
        rest = &rest[value_start + len..];
    }

    values
}
