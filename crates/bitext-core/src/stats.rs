//! Acceptance and word-count statistics, accumulated per document pair and
//! merged across the whole corpus.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Minimum seed used by the legacy report when no nonzero line was seen.
///
/// It is a fixed sentinel, not a computed bound: a corpus whose shortest
/// nonzero line exceeds it would have been misreported. Only the text summary
/// prints it; the accumulator itself tracks an unset minimum as `None`.
pub const LEGACY_MIN_SENTINEL: usize = 1000;

// ── SideStats ─────────────────────────────────────────────────────────────────

/// Word-count figures for one language side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideStats {
    /// Sum of word counts over every line, discarded ones included.
    pub sum_of_word_counts: u64,
    /// Largest count seen; empty lines are candidates.
    pub max_word_count: usize,
    /// Smallest nonzero count seen, `None` until the first nonzero line.
    pub min_word_count: Option<usize>,
}

impl SideStats {
    /// Fold one line's word count into the running figures.
    pub fn observe(&mut self, words: usize) {
        self.sum_of_word_counts += words as u64;
        self.max_word_count = self.max_word_count.max(words);
        if words > 0 {
            self.min_word_count = Some(self.min_word_count.map_or(words, |m| m.min(words)));
        }
    }

    /// Merge another side's figures into this one.
    ///
    /// An unset minimum on either side never lowers the other.
    pub fn merge(&mut self, other: &SideStats) {
        self.sum_of_word_counts += other.sum_of_word_counts;
        self.max_word_count = self.max_word_count.max(other.max_word_count);
        self.min_word_count = match (self.min_word_count, other.min_word_count) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
    }

    /// Mean words per line over `total_lines`, `None` when no line was read.
    pub fn average(&self, total_lines: u64) -> Option<f64> {
        if total_lines == 0 {
            return None;
        }
        Some(self.sum_of_word_counts as f64 / total_lines as f64)
    }

    /// The minimum as the legacy report prints it.
    pub fn legacy_min(&self) -> usize {
        self.min_word_count.unwrap_or(LEGACY_MIN_SENTINEL)
    }
}

// ── CorpusStats ───────────────────────────────────────────────────────────────

/// Acceptance counters plus per-side word-count figures.
///
/// The pair routine returns one of these per document pair; the driver merges
/// them into a corpus-wide total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub approved: u64,
    pub discarded: u64,
    pub total_lines: u64,
    /// Document pairs folded into this value.
    pub documents: u64,
    pub source: SideStats,
    pub target: SideStats,
}

impl CorpusStats {
    /// Record one classified line pair.
    pub fn record(&mut self, source_words: usize, target_words: usize, accepted: bool) {
        self.total_lines += 1;
        if accepted {
            self.approved += 1;
        } else {
            self.discarded += 1;
        }
        self.source.observe(source_words);
        self.target.observe(target_words);
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: &CorpusStats) {
        self.approved += other.approved;
        self.discarded += other.discarded;
        self.total_lines += other.total_lines;
        self.documents += other.documents;
        self.source.merge(&other.source);
        self.target.merge(&other.target);
    }

    /// Line pairs classified either way.
    pub fn classified(&self) -> u64 {
        self.approved + self.discarded
    }

    /// `approved / (approved + discarded) * 100`, `None` for an empty corpus.
    pub fn acceptance_percent(&self) -> Option<f64> {
        let classified = self.classified();
        if classified == 0 {
            return None;
        }
        Some(self.approved as f64 / classified as f64 * 100.0)
    }

    /// Write the statistics as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
