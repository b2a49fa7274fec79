//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::convert::DEFAULT_CHAR_BUDGET;

/// Command line configuration for mdcards.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdcards", version, about, long_about = None)]
pub struct Config {
    /// Markdown file or directory of markdown files
    #[arg(default_value = "data")]
    pub input: PathBuf,

    /// Output directory for report pages
    #[arg(short, long, default_value = "htmls")]
    pub output: PathBuf,

    /// Visible characters shown on a card before it is truncated
    #[arg(short, long, default_value_t = DEFAULT_CHAR_BUDGET)]
    pub budget: usize,

    /// Navigation page path
    #[arg(long, default_value = "main.html")]
    pub index: PathBuf,

    /// Navigation page heading
    #[arg(long)]
    pub name: Option<String>,

    /// Remove existing files from the output directory first
    #[arg(long)]
    pub clean: bool,

    /// Do not open the navigation page when done
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input path does not exist or the budget is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Input path does not exist: {}", self.input.display());
        }
        if self.budget == 0 {
            bail!("Character budget must be greater than zero");
        }

        Ok(())
    }

    /// Returns navigation heading from configuration or input directory name.
    ///
    /// # Errors
    ///
    /// Returns error if the input path has no name component or contains invalid UTF8.
    pub fn project_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }

        let path = self
            .input
            .canonicalize()
            .unwrap_or_else(|_| self.input.clone());
        let dir = if path.is_file() {
            path.parent().map(PathBuf::from).unwrap_or(path)
        } else {
            path
        };

        dir.file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot extract project name from path: {}", dir.display()))
            .map(String::from)
    }
}
