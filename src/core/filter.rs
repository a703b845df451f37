//! Select records by sender and date range.
//!
//! Every aggregator works on a selection produced here, so the
//! "overall or one participant" choice is made exactly once.
//!
//! | Filter | Function / Method | Description |
//! |--------|-------------------|-------------|
//! | Sender | [`filter_by_sender`] | All records, or one participant's |
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::{SenderSelection, filter_by_sender};
//! use chatlens::parser::parse_export;
//!
//! # fn main() -> chatlens::Result<()> {
//! let records = parse_export(
//!     "1/1/24, 9:00 am - Alice: Hi\n1/1/24, 9:01 am - Bob: Hey\n1/1/24, 9:02 am - Alice: Bye",
//! )?;
//!
//! let alice = filter_by_sender(&records, &SenderSelection::sender("Alice"));
//! assert_eq!(alice.len(), 2);
//!
//! let everyone = filter_by_sender(&records, &SenderSelection::Overall);
//! assert_eq!(everyone.len(), 3);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::error::ChatlensError;

/// Label used for "all participants".
pub const OVERALL: &str = "Overall";

/// Which participant's records to analyze.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SenderSelection {
    /// Every record, notifications included
    #[default]
    Overall,
    /// Only records whose sender equals this name exactly
    Sender(String),
}

impl SenderSelection {
    /// Selects a single participant.
    pub fn sender(name: impl Into<String>) -> Self {
        SenderSelection::Sender(name.into())
    }

    /// Returns `true` if `record` belongs to this selection.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            SenderSelection::Overall => true,
            SenderSelection::Sender(name) => record.sender() == name,
        }
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, SenderSelection::Overall)
    }
}

impl std::fmt::Display for SenderSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SenderSelection::Overall => write!(f, "{OVERALL}"),
            SenderSelection::Sender(name) => write!(f, "{name}"),
        }
    }
}

impl std::str::FromStr for SenderSelection {
    type Err = std::convert::Infallible;

    /// `"Overall"` (any case) selects everyone; anything else is a sender name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(OVERALL) {
            Ok(SenderSelection::Overall)
        } else {
            Ok(SenderSelection::Sender(s.to_string()))
        }
    }
}

/// Returns the records matching `selection`, in source order.
///
/// An empty result (e.g. an unknown participant) is a valid outcome.
pub fn filter_by_sender<'a>(
    records: &'a [MessageRecord],
    selection: &SenderSelection,
) -> Vec<&'a MessageRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

/// Returns the sorted, unique participant names.
///
/// Notifications are not participants. With `include_overall`, the list
/// starts with `"Overall"`, which is how a participant picker presents it.
pub fn participants(records: &[MessageRecord], include_overall: bool) -> Vec<String> {
    let names: BTreeSet<&str> = records
        .iter()
        .filter(|r| !r.is_notification())
        .map(MessageRecord::sender)
        .collect();

    let mut list = Vec::with_capacity(names.len() + 1);
    if include_overall {
        list.push(OVERALL.to_string());
    }
    list.extend(names.into_iter().map(str::to_string));
    list
}

/// Configuration for filtering records by sender and date.
///
/// Filters are combined with AND logic. Date bounds are inclusive.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::FilterConfig;
///
/// # fn main() -> chatlens::Result<()> {
/// let config = FilterConfig::new()
///     .with_sender("Alice")
///     .with_date_from("2024-06-01")?
///     .with_date_to("2024-12-31")?;
/// assert!(config.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only records on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only records on or before this date.
    pub before: Option<NaiveDate>,

    /// Participant selection.
    pub sender: SenderSelection,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.after = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.before = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Restricts the selection to one participant.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = SenderSelection::sender(sender);
        self
    }

    /// Sets the participant selection directly.
    #[must_use]
    pub fn with_selection(mut self, selection: SenderSelection) -> Self {
        self.sender = selection;
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || !self.sender.is_overall()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Returns the records matching all active filters, in source order.
pub fn apply_filters<'a>(
    records: &'a [MessageRecord],
    config: &FilterConfig,
) -> Vec<&'a MessageRecord> {
    records
        .iter()
        .filter(|record| {
            if !config.sender.matches(record) {
                return false;
            }

            let date = record.date();
            if config.after.is_some_and(|after| date < after) {
                return false;
            }
            if config.before.is_some_and(|before| date > before) {
                return false;
            }

            true
        })
        .collect()
}
