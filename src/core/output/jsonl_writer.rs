//! JSON Lines (JSONL) output writer.
//!
//! One record per line, which suits line-oriented tools and
//! incremental ingestion.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::json_writer::JsonRecord;
use crate::MessageRecord;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2024-01-01 09:00","sender":"Alice","body":"Hello"}
/// {"timestamp":"2024-01-01 09:01","sender":"Bob","body":"Hi"}
/// ```
pub fn write_jsonl(records: &[MessageRecord], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_lines(records, BufWriter::new(file), config)
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(&JsonRecord::from_record(record, config))?);
        out.push('\n');
    }
    Ok(out)
}

fn write_lines<W: Write>(records: &[MessageRecord], mut writer: W, config: &OutputConfig) -> Result<()> {
    for record in records {
        let line = serde_json::to_string(&JsonRecord::from_record(record, config))?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    fn record(sender: &str, body: &str) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(8, 5, 0)
            .unwrap();
        MessageRecord::new(sender, body, ts)
    }

    #[test]
    fn test_write_jsonl_basic() {
        let records = vec![record("Alice", "Hello"), record("Bob", "Hi")];

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_jsonl(&records, path, &OutputConfig::new()).unwrap();

        let file = std::fs::File::open(path).unwrap();
        let lines: Vec<String> = BufReader::new(file).lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["sender"], "Alice");
        assert_eq!(first["body"], "Hello");
        assert_eq!(first["timestamp"], "2024-06-15 08:05");

        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["sender"], "Bob");
    }

    #[test]
    fn test_multiline_body_stays_on_one_line() {
        let jsonl = to_jsonl(&[record("Bob", "Hello\nworld")], &OutputConfig::new()).unwrap();
        assert_eq!(jsonl.lines().count(), 1);
        assert!(jsonl.contains(r#""body":"Hello\nworld""#));
    }

    #[test]
    fn test_jsonl_with_calendar() {
        let config = OutputConfig::new().with_calendar();
        let jsonl = to_jsonl(&[record("Alice", "Hello")], &config).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(jsonl.trim()).unwrap();

        assert_eq!(parsed["hour_bucket"], "8-9");
        assert_eq!(parsed["month_name"], "June");
        assert_eq!(parsed["day_of_month"], 15);
    }

    #[test]
    fn test_jsonl_no_array_brackets() {
        let jsonl = to_jsonl(&[record("Alice", "Hello")], &OutputConfig::new()).unwrap();
        assert!(!jsonl.starts_with('['));
        assert!(jsonl.ends_with('\n'));
    }
}
