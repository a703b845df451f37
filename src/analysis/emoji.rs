//! Emoji frequency.

use std::collections::HashMap;

use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::MessageRecord;

/// An emoji and how often it was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Counts emoji across all bodies, most used first.
///
/// Bodies are split into extended grapheme clusters, so skin-tone variants,
/// ZWJ sequences and flags are counted as single emoji. Ties keep the order
/// of first appearance.
pub fn emoji_usage(records: &[&MessageRecord]) -> Vec<EmojiCount> {
    let mut counts: Vec<EmojiCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().copied() {
        for grapheme in record.body().graphemes(true).filter(|g| is_emoji(g)) {
            match index.get(grapheme) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(grapheme, counts.len());
                    counts.push(EmojiCount {
                        emoji: grapheme.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Returns `true` if the grapheme cluster starts with a pictographic scalar.
pub fn is_emoji(grapheme: &str) -> bool {
    grapheme
        .chars()
        .next()
        .is_some_and(|c| is_pictographic(u32::from(c)))
}

fn is_pictographic(cp: u32) -> bool {
    matches!(
        cp,
        0x1F300..=0x1F5FF   // misc symbols and pictographs
            | 0x1F600..=0x1F64F // emoticons
            | 0x1F680..=0x1F6FF // transport and map
            | 0x1F900..=0x1F9FF // supplemental symbols and pictographs
            | 0x1FA70..=0x1FAFF // symbols and pictographs extended-a
            | 0x1F1E6..=0x1F1FF // regional indicators
            | 0x1F004
            | 0x1F0CF
            | 0x1F170..=0x1F251
            | 0x2600..=0x26FF   // misc symbols
            | 0x2700..=0x27BF   // dingbats
            | 0x2B50
            | 0x2B55
            | 0x2B05..=0x2B07
            | 0x2B1B..=0x2B1C
            | 0x2934..=0x2935
            | 0x3030
            | 0x303D
            | 0x3297
            | 0x3299
    )
}
