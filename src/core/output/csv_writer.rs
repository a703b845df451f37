//! CSV output writer.

use std::fs::File;
use std::io::Write;

use super::TIMESTAMP_FORMAT;
use crate::MessageRecord;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `Sender`, `Body`
///   - With timestamps: `Timestamp`, `Sender`, `Body`
///   - With calendar: `...`, `Date`, `Year`, `Month`, `Day`, `Weekday`, `Hour`, `Minute`, `Period`
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(records, file, config)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer, config)?;
    let csv = String::from_utf8(buffer)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(csv)
}

fn write_records<W: Write>(records: &[MessageRecord], sink: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;

    for record in records {
        writer.write_record(build_row(record, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.push("Sender");
    header.push("Body");

    if config.include_calendar {
        header.extend([
            "Date", "Year", "Month", "Day", "Weekday", "Hour", "Minute", "Period",
        ]);
    }

    header
}

/// Build CSV row for a single record.
fn build_row(record: &MessageRecord, config: &OutputConfig) -> Vec<String> {
    let mut row = Vec::new();

    if config.include_timestamps {
        row.push(record.timestamp().format(TIMESTAMP_FORMAT).to_string());
    }

    row.push(record.sender().to_string());
    row.push(record.body().to_string());

    if config.include_calendar {
        row.push(record.date().to_string());
        row.push(record.year().to_string());
        row.push(record.month_name().to_string());
        row.push(record.day_of_month().to_string());
        row.push(record.weekday_name().to_string());
        row.push(record.hour().to_string());
        row.push(record.minute().to_string());
        row.push(record.hour_bucket().to_string());
    }

    row
}
