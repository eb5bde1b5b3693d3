//! Corpus traversal and filtering for the bilingual corpus filter.
//!
//! Responsible for discovering document pairs under the corpus root, running
//! the lockstep line filter over each pair and aggregating the results.

pub mod corpus;
pub mod pair;
pub mod reader;

pub use bitext_core as core;
