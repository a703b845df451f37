//! Word frequency with an injected stop-word set.
//!
//! The stop-word list is loaded once by the caller and passed by reference,
//! so counting words does no I/O.
//!
//! ```rust
//! use chatlens::analysis::{StopWords, most_common_words};
//! use chatlens::config::AnalysisConfig;
//! use chatlens::parser::parse_export;
//!
//! let records = parse_export("1/1/24, 9:00 am - Alice: the cat and the hat\n1/1/24, 9:01 am - Bob: Cat!")?;
//! let selection: Vec<_> = records.iter().collect();
//! let stop_words = StopWords::from_text("the\nand");
//!
//! let words = most_common_words(&selection, &stop_words, &AnalysisConfig::default());
//! assert_eq!(words[0].label, "cat");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::Count;
use crate::MessageRecord;
use crate::config::AnalysisConfig;
use crate::error::Result;

/// A set of lowercase words to leave out of frequency counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Builds the set from whitespace- or newline-separated text.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Reads a stop-word file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// Returns `true` if `word` (already lowercased) is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Counts the most frequent words in a selection.
///
/// Notification records and media placeholders are skipped. Tokens are
/// split on whitespace, trimmed of surrounding punctuation and lowercased.
/// Returns at most `config.top_words` entries, ordered by count descending,
/// then alphabetically.
pub fn most_common_words(
    records: &[&MessageRecord],
    stop_words: &StopWords,
    config: &AnalysisConfig,
) -> Vec<Count> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in records {
        if record.is_notification() || record.body().trim() == config.media_placeholder {
            continue;
        }

        for token in record.body().split_whitespace() {
            let word = token
                .trim_matches(|c: char| c.is_ascii_punctuation())
                .to_lowercase();
            if word.is_empty() || stop_words.contains(&word) {
                continue;
            }
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut ranked: Vec<Count> = counts
        .into_iter()
        .map(|(word, count)| Count::new(word, count))
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    ranked.truncate(config.top_words);
    ranked
}
