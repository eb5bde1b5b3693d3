//! Word counting and the per-line acceptance predicate.

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};

/// Default exclusive lower bound: a line must carry at least one word.
pub const DEFAULT_MIN_WORDS: usize = 0;

/// Default exclusive upper bound: a line may carry at most 94 words.
pub const DEFAULT_MAX_WORDS: usize = 95;

/// Whitespace bytes that separate tokens.
///
/// This is the ASCII set: space, tab, LF, CR, vertical tab and form feed.
/// Multi-byte UTF-8 sequences never contain these bytes, so counting works on
/// raw lines without decoding them.
fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Count whitespace-delimited tokens in a raw line.
///
/// # Examples
///
/// ```
/// use bitext_core::bounds::count_words;
///
/// assert_eq!(count_words(b"hello world\n"), 2);
/// assert_eq!(count_words(b"   \n"), 0);
/// assert_eq!(count_words(b""), 0);
/// assert_eq!(count_words("یک دو سه".as_bytes()), 3);
/// ```
pub fn count_words(line: &[u8]) -> usize {
    line.split(|b| is_separator(*b))
        .filter(|token| !token.is_empty())
        .count()
}

/// Exclusive word-count bounds applied to both sides of a line pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    pub min_exclusive: usize,
    pub max_exclusive: usize,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min_exclusive: DEFAULT_MIN_WORDS,
            max_exclusive: DEFAULT_MAX_WORDS,
        }
    }
}

impl LengthBounds {
    /// Build bounds, rejecting ranges that cannot accept any length.
    pub fn new(min_exclusive: usize, max_exclusive: usize) -> Result<Self> {
        if min_exclusive.saturating_add(1) >= max_exclusive {
            return Err(FilterError::InvalidBounds {
                min: min_exclusive,
                max: max_exclusive,
            });
        }
        Ok(Self {
            min_exclusive,
            max_exclusive,
        })
    }

    /// Whether one side's word count lies strictly inside the bounds.
    pub fn admits(&self, words: usize) -> bool {
        words > self.min_exclusive && words < self.max_exclusive
    }

    /// A line pair is accepted iff both sides are admitted.
    pub fn accepts(&self, source_words: usize, target_words: usize) -> bool {
        self.admits(source_words) && self.admits(target_words)
    }
}
