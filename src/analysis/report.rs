//! All aggregators bundled into one serializable report.

use serde::Serialize;
use tracing::debug;

use super::{
    BusyUsers, Count, DailyPoint, EmojiCount, Heatmap, MonthlyPoint, StopWords, TopStats,
    activity_heatmap, daily_timeline, emoji_usage, fetch_stats, month_activity_map,
    monthly_timeline, most_busy_users, most_common_words, week_activity_map,
};
use crate::MessageRecord;
use crate::config::AnalysisConfig;
use crate::core::filter::{SenderSelection, filter_by_sender, participants};

/// A complete analysis of one chat for one selection.
///
/// # Example
///
/// ```rust
/// use chatlens::analysis::{ChatReport, StopWords};
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::filter::SenderSelection;
/// use chatlens::parser::parse_export;
///
/// let records = parse_export("1/1/24, 9:00 am - Alice: Hi 👋\n1/1/24, 9:01 am - Bob: Hello")?;
/// let report = ChatReport::build(
///     &records,
///     &SenderSelection::sender("Alice"),
///     &StopWords::default(),
///     &AnalysisConfig::default(),
/// );
///
/// assert_eq!(report.stats.messages, 1);
/// assert_eq!(report.busy_users.top.len(), 2);
/// assert_eq!(report.emojis[0].emoji, "👋");
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReport {
    /// `"Overall"` or the selected participant
    pub selection: String,
    /// Every participant in the chat, `"Overall"` first
    pub participants: Vec<String>,
    pub stats: TopStats,
    /// Computed over the whole chat regardless of the selection
    pub busy_users: BusyUsers,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub week_activity: Vec<Count>,
    pub month_activity: Vec<Count>,
    pub heatmap: Heatmap,
    pub common_words: Vec<Count>,
    pub emojis: Vec<EmojiCount>,
}

impl ChatReport {
    /// Filters `records` once by `selection` and runs every aggregator.
    pub fn build(
        records: &[MessageRecord],
        selection: &SenderSelection,
        stop_words: &StopWords,
        config: &AnalysisConfig,
    ) -> Self {
        let selected = filter_by_sender(records, selection);
        let everyone: Vec<&MessageRecord> = records.iter().collect();

        debug!(
            selection = %selection,
            selected = selected.len(),
            total = records.len(),
            "building chat report"
        );

        Self {
            selection: selection.to_string(),
            participants: participants(records, true),
            stats: fetch_stats(&selected, config),
            busy_users: most_busy_users(&everyone, config.top_users),
            monthly_timeline: monthly_timeline(&selected),
            daily_timeline: daily_timeline(&selected),
            week_activity: week_activity_map(&selected),
            month_activity: month_activity_map(&selected),
            heatmap: activity_heatmap(&selected),
            common_words: most_common_words(&selected, stop_words, config),
            emojis: emoji_usage(&selected),
        }
    }
}
