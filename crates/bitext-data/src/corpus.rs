//! Top-level corpus pipeline.
//!
//! Validates the corpus layout, clears stale aggregate outputs, discovers the
//! document pairs and filters them one at a time, folding every pair's
//! statistics into one corpus-wide [`CorpusStats`].

use std::io::Write;
use std::path::{Path, PathBuf};

use bitext_core::error::{FilterError, Result};
use bitext_core::formatting::format_progress;
use bitext_core::settings::Settings;
use bitext_core::stats::CorpusStats;
use tracing::{debug, info};

use crate::pair::{process_document_pair, PairOptions};
use crate::reader::{discover_pairs, CounterpartLookup};

/// Run the whole corpus, printing one progress line per pair to stdout.
pub fn run(settings: &Settings) -> Result<CorpusStats> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_with_progress(settings, &mut handle)
}

/// Run the whole corpus, writing progress lines to `progress`.
///
/// Fails before touching any file when the settings are invalid or the two
/// language directories are missing. Any later failure aborts the run; output
/// appended by earlier pairs stays on disk.
pub fn run_with_progress(settings: &Settings, progress: &mut dyn Write) -> Result<CorpusStats> {
    settings.validate()?;
    let options = PairOptions {
        bounds: settings.bounds()?,
        strict_alignment: settings.strict_alignment,
    };

    let source_dir = settings.source_dir();
    let target_dir = settings.target_dir();
    if !source_dir.is_dir() || !target_dir.is_dir() {
        return Err(FilterError::InvalidInputDir {
            root: settings.input_dir.clone(),
            source_lang: settings.source_lang.clone(),
            target_lang: settings.target_lang.clone(),
        });
    }

    let out_source = settings.source_output();
    let out_target = settings.target_output();
    remove_stale_output(&out_target)?;
    remove_stale_output(&out_source)?;

    let lookup = CounterpartLookup::from_mirror_flag(settings.mirror_subdirs);
    let pairs = discover_pairs(&source_dir, &target_dir, &settings.suffix, lookup);
    info!(
        "Filtering {} document pairs under {}",
        pairs.len(),
        settings.input_dir.display()
    );

    let mut totals = CorpusStats::default();
    for pair in &pairs {
        let stats = process_document_pair(
            &pair.source,
            &pair.target,
            &out_source,
            &out_target,
            &options,
        )?;
        writeln!(progress, "{}", format_progress(&pair.source, &stats))?;
        totals.merge(&stats);
    }

    debug!(
        "Corpus done: {} documents, {} lines, {} approved",
        totals.documents, totals.total_lines, totals.approved
    );

    Ok(totals)
}

/// Delete a previous run's aggregate output so this run does not append to it.
pub fn remove_stale_output(path: &Path) -> Result<()> {
    if path.exists() {
        info!("Removing previous output {}", path.display());
        std::fs::remove_file(path).map_err(|source| FilterError::RemoveOutput {
            path: PathBuf::from(path),
            source,
        })?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn settings_for(root: &Path, extra: &[&str]) -> Settings {
        let mut args = vec![
            "bitext-filter".to_string(),
            root.to_string_lossy().into_owned(),
            "corpus".to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Settings::parse_from(args)
    }

    #[test]
    fn test_missing_language_dir_touches_nothing() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("en")).unwrap();
        let stale = dir.path().join("corpus_Short.en");
        std::fs::write(&stale, "old\n").unwrap();

        let settings = settings_for(dir.path(), &[]);
        let err = run_with_progress(&settings, &mut Vec::<u8>::new()).unwrap_err();

        assert!(matches!(err, FilterError::InvalidInputDir { .. }));
        assert_eq!(std::fs::read_to_string(&stale).unwrap(), "old\n");
    }

    #[test]
    fn test_invalid_bounds_rejected_before_io() {
        let dir = TempDir::new().unwrap();
        let settings = settings_for(dir.path(), &["--min-words", "9", "--max-words", "3"]);
        let err = run_with_progress(&settings, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, FilterError::InvalidBounds { .. }));
    }

    #[test]
    fn test_remove_stale_output_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x_Short.en");
        remove_stale_output(&path).unwrap();
        std::fs::write(&path, "stale").unwrap();
        remove_stale_output(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_corpus_creates_no_outputs() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("en")).unwrap();
        std::fs::create_dir_all(dir.path().join("fa")).unwrap();

        let settings = settings_for(dir.path(), &[]);
        let mut progress: Vec<u8> = Vec::new();
        let stats = run_with_progress(&settings, &mut progress).unwrap();

        assert_eq!(stats, CorpusStats::default());
        assert!(progress.is_empty());
        assert!(!settings.source_output().exists());
    }
}
