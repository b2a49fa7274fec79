//! Directory level conversion, cleanup and the navigation index.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::CardRenderer;
use crate::pages::navigation::{self, NavigationPageData};
use crate::util::format_timestamp;

/// Outcome of converting a set of markdown files.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Reports written, in input order
    pub converted: Vec<PathBuf>,
    /// Inputs that failed with their error
    pub failed: Vec<(PathBuf, anyhow::Error)>,
}

/// A generated report as listed on the navigation page.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub name: String,
    pub href: String,
    pub size: u64,
    pub modified: DateTime<Local>,
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

/// Lists files with `extension` directly inside `dir`, sorted by path.
fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?
            .path();
        if path.is_file() && has_extension(&path, extension) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Lists markdown files directly inside `dir`, sorted by name.
///
/// # Errors
///
/// Returns error if the directory cannot be read
pub fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    list_files(dir, "md")
}

/// Converts a markdown file, or every markdown file in a directory.
///
/// A failing file is logged and recorded in the summary; conversion goes on
/// with the next file and earlier reports stay in place.
///
/// # Errors
///
/// Returns error if `input` is a directory that cannot be listed
pub fn convert_path(
    renderer: &CardRenderer<'_>,
    input: &Path,
    output_dir: &Path,
) -> Result<BatchSummary> {
    let files = if input.is_dir() {
        markdown_files(input)?
    } else {
        vec![input.to_path_buf()]
    };

    let mut summary = BatchSummary::default();
    for file in files {
        match renderer.convert_file(&file, output_dir) {
            Ok(output) => summary.converted.push(output),
            Err(e) => {
                log::warn!("Failed to convert {}: {:#}", file.display(), e);
                summary.failed.push((file, e));
            }
        }
    }

    Ok(summary)
}

/// Removes every file, symlink and subdirectory inside `dir`.
///
/// A missing directory is left alone. Entries that cannot be removed are
/// logged and skipped.
///
/// # Returns
///
/// Number of entries removed
///
/// # Errors
///
/// Returns error if the directory exists but cannot be listed
pub fn clean_dir(dir: &Path) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        let is_dir = entry
            .file_type()
            .map(|kind| kind.is_dir())
            .unwrap_or(false);
        let result = if is_dir {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };

        match result {
            Ok(()) => removed += 1,
            Err(e) => log::warn!("Failed to delete {}: {}", path.display(), e),
        }
    }

    Ok(removed)
}

/// Link target for `path` as seen from a page inside `base`.
///
/// Paths outside `base` are linked by their full path.
fn relative_href(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(relative) => relative
            .components()
            .map(|part| part.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

/// Directory holding `path`, or the current directory for a bare file name.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Lists generated reports in `output_dir`, creating it when missing.
///
/// Hrefs are relative to the directory of `index_path`, the navigation
/// page, which is itself left out of the listing.
///
/// # Errors
///
/// Returns error if the directory cannot be created or read, or a report's
/// metadata is unavailable
pub fn list_reports(output_dir: &Path, index_path: &Path) -> Result<Vec<ReportEntry>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let output_dir = output_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", output_dir.display()))?;
    let index_dir = parent_dir(index_path);
    let index_dir = index_dir
        .canonicalize()
        .unwrap_or_else(|_| index_dir.to_path_buf());
    let index_file = index_path.canonicalize().ok();

    list_files(&output_dir, "html")?
        .into_iter()
        .filter(|path| index_file.as_ref() != Some(path))
        .map(|path| -> Result<ReportEntry> {
            let metadata = fs::metadata(&path)
                .with_context(|| format!("Failed to read metadata: {}", path.display()))?;
            let modified = metadata
                .modified()
                .with_context(|| format!("Modification time unavailable: {}", path.display()))?;

            Ok(ReportEntry {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                href: relative_href(&path, &index_dir),
                size: metadata.len(),
                modified: DateTime::<Local>::from(modified),
            })
        })
        .collect()
}

/// Writes the navigation page listing every report in `output_dir`.
///
/// # Returns
///
/// Number of reports listed
///
/// # Errors
///
/// Returns error if reports cannot be listed or the page cannot be written
pub fn write_navigation(output_dir: &Path, index_path: &Path, name: &str) -> Result<usize> {
    let index_dir = parent_dir(index_path);
    fs::create_dir_all(index_dir)
        .with_context(|| format!("Failed to create directory: {}", index_dir.display()))?;

    let entries = list_reports(output_dir, index_path)?;
    let folder = output_dir.display().to_string();
    let generated_at = format_timestamp(&Local::now());

    let html = navigation::generate(NavigationPageData {
        name,
        folder: &folder,
        entries: &entries,
        generated_at: &generated_at,
    });

    fs::write(index_path, html.into_string())
        .with_context(|| format!("Failed to write navigation page to {}", index_path.display()))?;

    Ok(entries.len())
}
