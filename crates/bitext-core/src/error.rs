use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the corpus filter.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The input root lacks one of the two language subdirectories.
    #[error(
        "Invalid input directory {root}: must have `{source_lang}` and `{target_lang}` folders. \
         Usage: bitext-filter <InputDir> <OutputBaseName>"
    )]
    InvalidInputDir {
        root: PathBuf,
        source_lang: String,
        target_lang: String,
    },

    /// The exclusive word-count bounds leave no accepted length.
    #[error("Invalid word bounds: no word count lies strictly between {min} and {max}")]
    InvalidBounds { min: usize, max: usize },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input file could not be opened for reading.
    #[error("Unable to READ: {path}")]
    OpenRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be opened for appending.
    #[error("Unable to APPEND: {path}")]
    OpenAppend {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stale aggregate output could not be deleted.
    #[error("Unable to remove previous output {path}")]
    RemoveOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a line from an opened input failed.
    #[error("Failed to read line from {path}")]
    ReadLine {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Appending a line to an opened output failed.
    #[error("Failed to write to {path}")]
    WriteLine {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Strict alignment found files with different line counts.
    #[error(
        "Misaligned document pair: {source_path} has {source_lines} lines \
         but {target_path} has {target_lines}"
    )]
    MisalignedPair {
        source_path: PathBuf,
        target_path: PathBuf,
        source_lines: usize,
        target_lines: usize,
    },

    /// The JSON summary could not be serialized.
    #[error("Failed to serialize summary")]
    Summary(#[from] serde_json::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the filter crates.
pub type Result<T> = std::result::Result<T, FilterError>;
