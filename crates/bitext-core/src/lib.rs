//! Shared building blocks for the bilingual corpus filter.
//!
//! Holds the error taxonomy, CLI settings, the word-count acceptance
//! predicate, the statistics accumulator and report formatting.

pub mod bounds;
pub mod error;
pub mod formatting;
pub mod settings;
pub mod stats;
