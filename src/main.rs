use anyhow::{Context, Result};
use mdcards::{CardRenderer, Config};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    if config.clean {
        let removed =
            mdcards::clean_dir(&config.output).context("Failed to clean output directory")?;
        log::info!("Removed {} entries from {}", removed, config.output.display());
    }

    let renderer = CardRenderer::new(config.budget);
    let summary = mdcards::convert_path(&renderer, &config.input, &config.output)
        .context("Failed to convert markdown input")?;

    for path in &summary.converted {
        println!("Generated: {}", path.display());
    }
    if !summary.failed.is_empty() {
        eprintln!(
            "Warning: {} of {} files failed to convert",
            summary.failed.len(),
            summary.failed.len() + summary.converted.len()
        );
    }
    if summary.converted.is_empty() && summary.failed.is_empty() {
        log::warn!("No markdown files found in {}", config.input.display());
    }

    let name = config
        .project_name()
        .context("Failed to determine navigation heading")?;
    let listed = mdcards::write_navigation(&config.output, &config.index, &name)
        .context("Failed to write navigation page")?;
    println!(
        "Generated: {} ({} reports listed)",
        config.index.display(),
        listed
    );

    if !config.no_open {
        if let Err(e) = open::that(&config.index) {
            log::warn!("Failed to open {}: {}", config.index.display(), e);
        }
    }

    Ok(())
}
