//! JSON output writer.

use std::fs::File;
use std::io::Write;

use serde::Serialize;

use super::TIMESTAMP_FORMAT;
use crate::MessageRecord;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Record view for JSON output.
/// Only includes fields enabled in `OutputConfig`.
#[derive(Serialize)]
pub(super) struct JsonRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    sender: &'a str,
    body: &'a str,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    calendar: Option<JsonCalendar<'a>>,
}

#[derive(Serialize)]
pub(super) struct JsonCalendar<'a> {
    date: String,
    year: i32,
    month_number: u32,
    month_name: &'a str,
    day_of_month: u32,
    weekday_name: &'a str,
    hour: u32,
    minute: u32,
    hour_bucket: &'a str,
}

impl<'a> JsonRecord<'a> {
    pub(super) fn from_record(record: &'a MessageRecord, config: &OutputConfig) -> Self {
        Self {
            timestamp: config
                .include_timestamps
                .then(|| record.timestamp().format(TIMESTAMP_FORMAT).to_string()),
            sender: record.sender(),
            body: record.body(),
            calendar: config.include_calendar.then(|| JsonCalendar {
                date: record.date().to_string(),
                year: record.year(),
                month_number: record.month_number(),
                month_name: record.month_name(),
                day_of_month: record.day_of_month(),
                weekday_name: record.weekday_name(),
                hour: record.hour(),
                minute: record.minute(),
                hour_bucket: record.hour_bucket(),
            }),
        }
    }
}

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2024-01-01 09:00", "sender": "Alice", "body": "Hello"},
///   {"timestamp": "2024-01-01 09:01", "sender": "Bob", "body": "Hi"}
/// ]
/// ```
pub fn write_json(records: &[MessageRecord], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a JSON array string.
pub fn to_json(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let json_records: Vec<JsonRecord<'_>> = records
        .iter()
        .map(|r| JsonRecord::from_record(r, config))
        .collect();

    Ok(serde_json::to_string_pretty(&json_records)?)
}
