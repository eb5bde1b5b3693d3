mod bootstrap;

use anyhow::{Context, Result};
use bitext_core::formatting::format_summary;
use bitext_core::settings::Settings;
use bitext_data::corpus;
use clap::Parser;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("bitext-filter v{} starting", env!("CARGO_PKG_VERSION"));

    let stats = corpus::run(&settings)?;

    println!(
        "{}",
        format_summary(
            &stats,
            &settings.source_lang,
            &settings.target_lang,
            settings.max_words,
        )
    );

    if let Some(path) = &settings.summary_json {
        stats
            .write_json(path)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        tracing::info!("Summary written to {}", path.display());
    }

    Ok(())
}
