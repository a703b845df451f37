//! Descriptive statistics over a selection of records.
//!
//! Every aggregator takes `&[&MessageRecord]`, the output of
//! [`filter_by_sender`](crate::core::filter::filter_by_sender) or
//! [`apply_filters`](crate::core::filter::apply_filters). An empty selection
//! always yields an empty (or zeroed) result.
//!
//! | Aggregator | Result |
//! |------------|--------|
//! | [`fetch_stats`] | Message, word, media and link totals |
//! | [`most_busy_users`] | Top senders and their share of the chat |
//! | [`monthly_timeline`] / [`daily_timeline`] | Messages per month / per day |
//! | [`week_activity_map`] / [`month_activity_map`] | Messages per weekday / per month name |
//! | [`activity_heatmap`] | Weekday × hour-bucket message counts |
//! | [`most_common_words`] | Frequent words, minus stop words |
//! | [`emoji_usage`] | Emoji frequencies |
//! | [`ChatReport`] | All of the above in one serializable value |
//!
//! # Example
//!
//! ```rust
//! use chatlens::analysis::{fetch_stats, week_activity_map};
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::filter::{SenderSelection, filter_by_sender};
//! use chatlens::parser::parse_export;
//!
//! let records = parse_export(
//!     "1/1/24, 9:00 am - Alice: see https://example.com\n2/1/24, 9:01 am - Bob: <Media omitted>",
//! )?;
//! let selection = filter_by_sender(&records, &SenderSelection::Overall);
//!
//! let stats = fetch_stats(&selection, &AnalysisConfig::default());
//! assert_eq!(stats.messages, 2);
//! assert_eq!(stats.links, 1);
//! assert_eq!(stats.media, 1);
//!
//! let weekdays = week_activity_map(&selection);
//! assert_eq!(weekdays[0].label, "Monday");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

pub mod activity;
pub mod emoji;
pub mod report;
pub mod stats;
pub mod timeline;
pub mod users;
pub mod words;

use serde::Serialize;

pub use activity::{Heatmap, activity_heatmap, month_activity_map, week_activity_map};
pub use emoji::{EmojiCount, emoji_usage, is_emoji};
pub use report::ChatReport;
pub use stats::{TopStats, fetch_stats};
pub use timeline::{DailyPoint, MonthlyPoint, daily_timeline, monthly_timeline};
pub use users::{BusyUsers, UserShare, most_busy_users};
pub use words::{StopWords, most_common_words};

/// A label with the number of records (or tokens) counted under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub label: String,
    pub count: usize,
}

impl Count {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Sorts by count descending. The sort is stable, so ties keep the
/// order they were collected in.
pub(crate) fn sort_by_count_desc(counts: &mut [Count]) {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
}
