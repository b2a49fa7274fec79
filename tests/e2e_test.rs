//! End-to-end tests for the mdcards binary.

mod common;

use anyhow::Result;
use common::{sample_report, write_file};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn mdcards() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mdcards"))
}

/// Tests full binary execution generates reports and navigation.
#[test]
fn test_full_workflow_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let input = dir.path().join("data");
    write_file(&input, "brief.md", &sample_report())?;
    let output = dir.path().join("htmls");
    let index = dir.path().join("main.html");

    // Act
    let result = mdcards()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-b")
        .arg("100")
        .arg("--index")
        .arg(&index)
        .args(["--name", "E2E Reports", "--no-open"])
        .output()?;

    // Assert
    assert!(
        result.status.success(),
        "Binary failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("brief.html"));

    let report = fs::read_to_string(output.join("brief.html"))?;
    assert!(report.contains("<h1>Daily Brief</h1>"));
    assert!(report.contains("See More"));

    let navigation = fs::read_to_string(&index)?;
    assert!(navigation.contains("E2E Reports"));
    assert!(navigation.contains("brief.html"));
    Ok(())
}

/// Tests the clean flag removes stale output before conversion.
#[test]
fn test_clean_flag_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let input = write_file(dir.path(), "today.md", "## Today\n\nCalm.\n")?;
    let output = dir.path().join("htmls");
    write_file(&output, "yesterday.html", "<p>stale</p>")?;

    // Act
    let status = mdcards()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--index")
        .arg(dir.path().join("main.html"))
        .args(["--clean", "--no-open"])
        .status()?;

    // Assert
    assert!(status.success());
    assert!(!output.join("yesterday.html").exists());
    assert!(output.join("today.html").exists());
    Ok(())
}

/// Tests a missing input path fails before writing anything.
#[test]
fn test_missing_input_fails_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let output = dir.path().join("htmls");

    // Act
    let result = mdcards()
        .arg(dir.path().join("absent"))
        .arg("-o")
        .arg(&output)
        .arg("--no-open")
        .output()?;

    // Assert
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Invalid configuration"));
    assert!(!output.exists());
    Ok(())
}

/// Tests a zero budget is rejected.
#[test]
fn test_zero_budget_rejected_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    let input = write_file(dir.path(), "doc.md", "## A\n\nB.\n")?;

    // Act
    let status = mdcards()
        .arg(&input)
        .args(["-b", "0", "--no-open"])
        .current_dir(dir.path())
        .status()?;

    // Assert
    assert!(!status.success());
    assert!(!dir.path().join("htmls").exists());
    Ok(())
}
