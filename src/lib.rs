//! # Chatlens
//!
//! Parse exported group-chat text into timestamped records and compute
//! descriptive activity statistics for the whole chat or one participant.
//!
//! ## Overview
//!
//! An export is a plain-text file where every message starts with a marker
//! like `25/12/23, 9:41 pm - `, followed by `Sender: body`. Bodies may span
//! many lines. Chatlens turns that text into an ordered
//! `Vec<`[`MessageRecord`]`>`, each record carrying its sender, body,
//! timestamp and derived calendar fields, and then answers questions such
//! as who talks the most, when, and with which words and emoji.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let raw = "\
//! 1/1/24, 9:00 am - Alice: Happy new year! 🎉
//! 1/1/24, 9:02 am - Bob: Same to you
//! 2/1/24, 11:30 pm - Alice: <Media omitted>
//! ";
//!
//! let records = parse_export(raw)?;
//! assert_eq!(records.len(), 3);
//!
//! let alice = filter_by_sender(&records, &SenderSelection::sender("Alice"));
//! let stats = fetch_stats(&alice, &AnalysisConfig::default());
//! assert_eq!(stats.messages, 2);
//! assert_eq!(stats.media, 1);
//!
//! let report = ChatReport::build(
//!     &records,
//!     &SenderSelection::Overall,
//!     &StopWords::default(),
//!     &AnalysisConfig::default(),
//! );
//! assert_eq!(report.busy_users.top[0].label, "Alice");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ExportParser`](parser::ExportParser), [`parse_export`](parser::parse_export)
//! - [`parsing`] - marker scanning, timestamp resolution, sender split
//! - [`record`] - [`MessageRecord`] and calendar helpers
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`core`] - selection ([`core::filter`]) and record writers ([`core::output`])
//! - [`analysis`] - aggregators and [`ChatReport`](analysis::ChatReport)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`cli`], [`logging`] - binary support (feature `cli`)
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod parser;
pub mod parsing;
pub mod record;

pub use error::{ChatlensError, Result};
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;
    pub use crate::error::{ChatlensError, Result};

    pub use crate::parser::{ExportParser, parse_export};

    pub use crate::config::{AnalysisConfig, ParserConfig};

    pub use crate::core::filter::{
        FilterConfig, SenderSelection, apply_filters, filter_by_sender, participants,
    };
    pub use crate::core::models::OutputConfig;

    pub use crate::analysis::{
        ChatReport, StopWords, activity_heatmap, daily_timeline, emoji_usage, fetch_stats,
        month_activity_map, monthly_timeline, most_busy_users, most_common_words,
        week_activity_map,
    };

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
