//! Headline totals for a selection.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::MessageRecord;
use crate::config::AnalysisConfig;

/// Matches `http://`, `https://` and bare `www.` links up to the next whitespace.
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("link pattern is valid")
});

/// Totals shown at the top of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TopStats {
    /// Number of records
    pub messages: usize,
    /// Whitespace-separated tokens across all bodies
    pub words: usize,
    /// Bodies equal to the media placeholder
    pub media: usize,
    /// Links found in bodies
    pub links: usize,
}

/// Computes message, word, media and link totals.
pub fn fetch_stats(records: &[&MessageRecord], config: &AnalysisConfig) -> TopStats {
    records.iter().fold(TopStats::default(), |mut stats, record| {
        let body = record.body();
        stats.messages += 1;
        stats.words += body.split_whitespace().count();
        if body.trim() == config.media_placeholder {
            stats.media += 1;
        }
        stats.links += count_links(body);
        stats
    })
}

/// Returns the number of links in `text`.
pub fn count_links(text: &str) -> usize {
    LINK_PATTERN.find_iter(text).count()
}
