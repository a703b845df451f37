//! Record writers.
//!
//! This module provides writers for the parsed record table:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::output::{to_csv, write_json, write_jsonl};
//! use chatlens::core::models::OutputConfig;
//! use chatlens::parser::parse_export;
//!
//! let records = parse_export("1/1/24, 9:00 am - Alice: Hello!")?;
//! let config = OutputConfig::new().with_calendar();
//!
//! write_json(&records, "records.json", &config)?;
//! write_jsonl(&records, "records.jsonl", &config)?;
//! let csv_string = to_csv(&records, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Timestamp layout used by every writer.
#[cfg(any(feature = "csv-output", feature = "json-output"))]
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
