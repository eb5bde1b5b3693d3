use clap::Parser;
use std::path::{Path, PathBuf};

use crate::bounds::{LengthBounds, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS};
use crate::error::{FilterError, Result};

/// Infix between the output base name and the language suffix.
pub const OUTPUT_INFIX: &str = "_Short";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Filter a line-aligned bilingual corpus by per-line word counts
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bitext-filter",
    about = "Filter a line-aligned bilingual corpus by per-line word counts",
    version
)]
pub struct Settings {
    /// Corpus root holding one subdirectory per language
    #[arg(value_name = "InputDir")]
    pub input_dir: PathBuf,

    /// Base name of the two aggregate output files
    #[arg(value_name = "OutputBaseName")]
    pub out_name: String,

    /// Subdirectory (and output suffix) of the source language
    #[arg(long, default_value = "en")]
    pub source_lang: String,

    /// Subdirectory (and output suffix) of the target language
    #[arg(long, default_value = "fa")]
    pub target_lang: String,

    /// Literal, case-sensitive file-name suffix of documents to process
    #[arg(long, default_value = ".ixml")]
    pub suffix: String,

    /// Exclusive lower bound on words per line
    #[arg(long, default_value_t = DEFAULT_MIN_WORDS)]
    pub min_words: usize,

    /// Exclusive upper bound on words per line
    #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
    pub max_words: usize,

    /// Look up target documents at the same relative path as nested source documents
    #[arg(long)]
    pub mirror_subdirs: bool,

    /// Fail when a document pair has different line counts
    #[arg(long)]
    pub strict_alignment: bool,

    /// Also write the final statistics as JSON to this path
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Check the values clap cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        for (flag, lang) in [
            ("--source-lang", &self.source_lang),
            ("--target-lang", &self.target_lang),
        ] {
            if lang.is_empty() || lang == "." || lang == ".." || lang.contains(['/', '\\']) {
                return Err(FilterError::Config(format!(
                    "{flag} must be a plain directory name, got {lang:?}"
                )));
            }
        }
        if self.source_lang == self.target_lang {
            return Err(FilterError::Config(format!(
                "source and target language are both {:?}",
                self.source_lang
            )));
        }
        if self.out_name.is_empty() {
            return Err(FilterError::Config("output base name is empty".to_string()));
        }
        self.bounds()?;
        Ok(())
    }

    /// The acceptance bounds described by `--min-words` / `--max-words`.
    pub fn bounds(&self) -> Result<LengthBounds> {
        LengthBounds::new(self.min_words, self.max_words)
    }

    /// Effective log level, with `--debug` taking precedence.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }

    pub fn source_dir(&self) -> PathBuf {
        self.input_dir.join(&self.source_lang)
    }

    pub fn target_dir(&self) -> PathBuf {
        self.input_dir.join(&self.target_lang)
    }

    /// `<input>/<out_name>_Short.<lang>`
    pub fn output_path(&self, lang: &str) -> PathBuf {
        output_path_in(&self.input_dir, &self.out_name, lang)
    }

    pub fn source_output(&self) -> PathBuf {
        self.output_path(&self.source_lang)
    }

    pub fn target_output(&self) -> PathBuf {
        self.output_path(&self.target_lang)
    }
}

/// Build the aggregate output path for one language under `root`.
pub fn output_path_in(root: &Path, out_name: &str, lang: &str) -> PathBuf {
    root.join(format!("{out_name}{OUTPUT_INFIX}.{lang}"))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
