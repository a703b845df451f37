//! The parsed message record and its calendar features.
//!
//! [`MessageRecord`] is the unit the parser produces and every aggregator
//! consumes. A record carries the sender, the body, the send time, and a set
//! of calendar fields derived from that time once, at construction.
//!
//! # Examples
//!
//! ```
//! use chatlens::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(23, 15, 0)
//!     .unwrap();
//! let record = MessageRecord::new("Alice", "Happy new year!", ts);
//!
//! assert_eq!(record.weekday_name(), "Monday");
//! assert_eq!(record.month_name(), "January");
//! assert_eq!(record.hour_bucket(), "23-00");
//! ```

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

/// Sender assigned to entries that have no `"Name: "` prefix.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// A single message parsed from a chat export.
///
/// Records are immutable: the derived calendar fields are computed in
/// [`MessageRecord::new`] and exposed through accessors only, so they always
/// agree with [`timestamp`](MessageRecord::timestamp).
///
/// # Fields
///
/// | Field | Type | Example |
/// |-------|------|---------|
/// | `timestamp` | `NaiveDateTime` | `2024-01-01T21:05:00` |
/// | `sender` | `String` | `Alice` / `group_notification` |
/// | `body` | `String` | `Hello\nworld` |
/// | `date` | `NaiveDate` | `2024-01-01` |
/// | `year` | `i32` | `2024` |
/// | `month_number` | `u32` | `1` |
/// | `month_name` | `&'static str` | `January` |
/// | `day_of_month` | `u32` | `1` |
/// | `weekday_name` | `&'static str` | `Monday` |
/// | `hour` | `u32` | `21` |
/// | `minute` | `u32` | `5` |
/// | `hour_bucket` | `String` | `21-22` |
///
/// Timestamps are wall-clock local time as written in the export; no
/// timezone conversion is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    timestamp: NaiveDateTime,
    sender: String,
    body: String,
    date: NaiveDate,
    year: i32,
    month_number: u32,
    month_name: &'static str,
    day_of_month: u32,
    weekday_name: &'static str,
    hour: u32,
    minute: u32,
    hour_bucket: String,
}

impl MessageRecord {
    /// Creates a record and derives all calendar fields from `timestamp`.
    pub fn new(
        sender: impl Into<String>,
        body: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        let date = timestamp.date();
        let hour = timestamp.hour();

        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
            date,
            year: date.year(),
            month_number: date.month(),
            month_name: month_name(date.month()),
            day_of_month: date.day(),
            weekday_name: weekday_name(date.weekday()),
            hour,
            minute: timestamp.minute(),
            hour_bucket: hour_bucket(hour),
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the send time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender name, or [`GROUP_NOTIFICATION`].
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the calendar date of the message.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month as 1-12.
    pub fn month_number(&self) -> u32 {
        self.month_number
    }

    /// Returns the English month name, e.g. `"January"`.
    pub fn month_name(&self) -> &'static str {
        self.month_name
    }

    pub fn day_of_month(&self) -> u32 {
        self.day_of_month
    }

    /// Returns the English weekday name, e.g. `"Monday"`.
    pub fn weekday_name(&self) -> &'static str {
        self.weekday_name
    }

    /// Returns the hour as 0-23.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns the one-hour window label containing [`hour`](Self::hour).
    pub fn hour_bucket(&self) -> &str {
        &self.hour_bucket
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` if this record is a system notification.
    pub fn is_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }
}

/// Returns the label of the one-hour window containing `hour`.
///
/// Hours 0-22 map to `"{hour}-{hour + 1}"`; hour 23 maps to `"23-00"`.
///
/// ```
/// use chatlens::record::hour_bucket;
///
/// assert_eq!(hour_bucket(0), "0-1");
/// assert_eq!(hour_bucket(9), "9-10");
/// assert_eq!(hour_bucket(23), "23-00");
/// ```
pub fn hour_bucket(hour: u32) -> String {
    if hour == 23 {
        "23-00".to_string()
    } else {
        format!("{}-{}", hour, hour + 1)
    }
}

/// Returns the English name of a month numbered 1-12.
pub fn month_name(month_number: u32) -> &'static str {
    u8::try_from(month_number)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("", |m| m.name())
}

/// Returns the full English weekday name.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_record_derives_calendar_fields() {
        let record = MessageRecord::new("Alice", "Hello", at(2024, 2, 29, 14, 7));

        assert_eq!(record.sender(), "Alice");
        assert_eq!(record.body(), "Hello");
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(record.year(), 2024);
        assert_eq!(record.month_number(), 2);
        assert_eq!(record.month_name(), "February");
        assert_eq!(record.day_of_month(), 29);
        assert_eq!(record.weekday_name(), "Thursday");
        assert_eq!(record.hour(), 14);
        assert_eq!(record.minute(), 7);
        assert_eq!(record.hour_bucket(), "14-15");
    }

    #[test]
    fn test_hour_bucket_boundaries() {
        assert_eq!(hour_bucket(0), "0-1");
        assert_eq!(hour_bucket(22), "22-23");
        assert_eq!(hour_bucket(23), "23-00");
    }

    #[test]
    fn test_month_name_range() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_is_notification() {
        let ts = at(2024, 1, 1, 9, 0);
        assert!(MessageRecord::new(GROUP_NOTIFICATION, "Bob left", ts).is_notification());
        assert!(!MessageRecord::new("Bob", "hi", ts).is_notification());
    }

    #[test]
    fn test_record_serialization() {
        let record = MessageRecord::new("Alice", "Hello", at(2024, 1, 1, 23, 30));
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains(r#""sender":"Alice""#));
        assert!(json.contains(r#""timestamp":"2024-01-01T23:30:00""#));
        assert!(json.contains(r#""weekday_name":"Monday""#));
        assert!(json.contains(r#""hour_bucket":"23-00""#));
    }
}
