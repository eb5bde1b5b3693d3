use std::path::Path;

use crate::stats::{CorpusStats, SideStats};

/// Width of the rule printed under the summary title.
const RULE_WIDTH: usize = 85;

/// Leading text of the first per-language summary line.
const WORDS_PER_LINE: &str = "Word per line: ";

/// Format the one-line progress report printed after each document pair.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use bitext_core::formatting::format_progress;
/// use bitext_core::stats::CorpusStats;
///
/// let mut stats = CorpusStats::default();
/// stats.record(2, 2, true);
/// stats.record(0, 0, false);
///
/// assert_eq!(
///     format_progress(Path::new("corpus/en/a.ixml"), &stats),
///     "corpus/en/a.ixml   Acceptance: 1  of  2"
/// );
/// ```
pub fn format_progress(source_path: &Path, stats: &CorpusStats) -> String {
    format!(
        "{}   Acceptance: {}  of  {}",
        source_path.display(),
        stats.approved,
        stats.classified()
    )
}

/// Capitalise a language code for the summary, `"en"` → `"En"`.
///
/// # Examples
///
/// ```
/// use bitext_core::formatting::language_label;
///
/// assert_eq!(language_label("fa"), "Fa");
/// assert_eq!(language_label(""), "");
/// ```
pub fn language_label(lang: &str) -> String {
    let mut chars = lang.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a float with Rust's shortest round-trip formatting, or `n/a`.
pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "n/a".to_string(),
    }
}

fn format_side(label: &str, side: &SideStats, total_lines: u64) -> String {
    format!(
        "{} Max: {}, Avg: {}, Min: {}",
        label,
        side.max_word_count,
        format_ratio(side.average(total_lines)),
        side.legacy_min()
    )
}

/// Format the closing summary block.
///
/// Field order is fixed: the approved/discarded/acceptance line first, then
/// max/average/min for the source and target sides. Averages and acceptance
/// print as `n/a` when no line was processed.
pub fn format_summary(
    stats: &CorpusStats,
    source_lang: &str,
    target_lang: &str,
    max_words: usize,
) -> String {
    let indent = " ".repeat(WORDS_PER_LINE.len());
    let lines = [
        String::new(),
        format!("Phrases below {} words:", max_words),
        "=".repeat(RULE_WIDTH),
        format!(
            "Total: Approved: {}  Discarded {}  Acceptance: {} %",
            stats.approved,
            stats.discarded,
            format_ratio(stats.acceptance_percent())
        ),
        format!(
            "{}{}",
            WORDS_PER_LINE,
            format_side(&language_label(source_lang), &stats.source, stats.total_lines)
        ),
        format!(
            "{}{}",
            indent,
            format_side(&language_label(target_lang), &stats.target, stats.total_lines)
        ),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::LEGACY_MIN_SENTINEL;

    fn sample_stats() -> CorpusStats {
        let mut stats = CorpusStats::default();
        stats.record(2, 2, true);
        stats.record(0, 0, false);
        stats.record(3, 3, true);
        stats
    }

    #[test]
    fn test_summary_field_order() {
        let summary = format_summary(&sample_stats(), "en", "fa", 95);
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Phrases below 95 words:");
        assert!(lines[2].chars().all(|c| c == '='));
        assert_eq!(
            lines[3],
            format!(
                "Total: Approved: 2  Discarded 1  Acceptance: {} %",
                2.0_f64 / 3.0 * 100.0
            )
        );
        assert!(lines[4].starts_with("Word per line: En Max: 3, Avg: "));
        assert!(lines[4].ends_with(", Min: 2"));
        assert!(lines[5].starts_with("               Fa Max: 3, Avg: "));
    }

    #[test]
    fn test_summary_empty_corpus_is_not_a_panic() {
        let summary = format_summary(&CorpusStats::default(), "en", "fa", 95);
        assert!(summary.contains("Acceptance: n/a %"));
        assert!(summary.contains("Avg: n/a"));
        assert!(summary.contains(&format!("Min: {}", LEGACY_MIN_SENTINEL)));
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(Some(50.0)), "50");
        assert_eq!(format_ratio(Some(1.5)), "1.5");
        assert_eq!(format_ratio(None), "n/a");
    }
}
