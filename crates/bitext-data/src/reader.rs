//! Document discovery for the bilingual corpus filter.
//!
//! Walks the source-language directory for documents and pairs each one with
//! its target-language counterpart.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

// ── Types ─────────────────────────────────────────────────────────────────────

/// How the target counterpart of a source document is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterpartLookup {
    /// `<target_dir>/<file name>`, whatever the nesting under the source dir.
    #[default]
    Flat,
    /// `<target_dir>/<path relative to the source dir>`.
    Mirrored,
}

impl CounterpartLookup {
    pub fn from_mirror_flag(mirror_subdirs: bool) -> Self {
        if mirror_subdirs {
            Self::Mirrored
        } else {
            Self::Flat
        }
    }
}

/// One source document and the target document it is aligned with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPair {
    pub source: PathBuf,
    pub target: PathBuf,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Whether a file name ends with the literal, case-sensitive `suffix`.
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
        .unwrap_or(false)
}

/// Regular files and symlinks that do not resolve to a directory.
///
/// A dangling symlink is kept so that opening it fails loudly.
fn is_document_entry(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

/// Find every file under `source_dir` (recursively) whose name ends with
/// `suffix`.
///
/// Entries come back in directory traversal order; no sorting is applied.
/// Entries the walk cannot read are logged and skipped.
pub fn find_documents(source_dir: &Path, suffix: &str) -> Vec<PathBuf> {
    let files: Vec<PathBuf> = walkdir::WalkDir::new(source_dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", source_dir.display(), e);
                None
            }
        })
        .filter(|entry| is_document_entry(entry) && has_suffix(entry.path(), suffix))
        .map(|entry| entry.into_path())
        .collect();

    debug!(
        "Found {} documents matching {:?} under {}",
        files.len(),
        suffix,
        source_dir.display()
    );
    files
}

/// Resolve the target-language counterpart of `source`.
///
/// With [`CounterpartLookup::Flat`] a nested source document still maps to
/// `<target_dir>/<file name>`, so its counterpart is usually missing.
pub fn counterpart(
    source: &Path,
    source_dir: &Path,
    target_dir: &Path,
    lookup: CounterpartLookup,
) -> PathBuf {
    match lookup {
        CounterpartLookup::Flat => match source.file_name() {
            Some(name) => target_dir.join(name),
            None => target_dir.to_path_buf(),
        },
        CounterpartLookup::Mirrored => match source.strip_prefix(source_dir) {
            Ok(relative) => target_dir.join(relative),
            Err(_) => counterpart(source, source_dir, target_dir, CounterpartLookup::Flat),
        },
    }
}

/// Discover every document pair under the two language directories.
pub fn discover_pairs(
    source_dir: &Path,
    target_dir: &Path,
    suffix: &str,
    lookup: CounterpartLookup,
) -> Vec<DocumentPair> {
    find_documents(source_dir, suffix)
        .into_iter()
        .map(|source| {
            let target = counterpart(&source, source_dir, target_dir, lookup);
            DocumentPair { source, target }
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
