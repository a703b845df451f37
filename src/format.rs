//! Output formats for the record table.
//!
//! [`OutputFormat`] has no CLI dependency of its own; with the `cli`
//! feature it also derives `clap::ValueEnum` so the binary can take it
//! directly as an argument.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::models::OutputConfig;
//! use chatlens::format::{OutputFormat, to_format_string};
//! use chatlens::parser::parse_export;
//!
//! let records = parse_export("1/1/24, 9:00 am - Alice: Hello!")?;
//!
//! let format = OutputFormat::from_path("records.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//!
//! let jsonl = to_format_string(&records, format, &OutputConfig::new())?;
//! assert_eq!(jsonl.lines().count(), 1);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::core::models::OutputConfig;
use crate::error::{ChatlensError, Result};

/// Output format for the record table.
///
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited table, opens in any spreadsheet
/// - [`Json`](OutputFormat::Json) - pretty-printed array
/// - [`Jsonl`](OutputFormat::Jsonl) - one object per line
///
/// ```rust
/// use chatlens::format::OutputFormat;
///
/// let format: OutputFormat = "ndjson".parse().unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with `;` delimiter
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines, one record per line
    #[cfg_attr(feature = "cli", value(alias = "ndjson"))]
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names, aliases included.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Cargo feature that provides the writer for this format.
    pub fn required_feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Detects the format from a file extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        Self::from_name(&ext).ok_or_else(|| {
            ChatlensError::invalid_format(
                "output",
                format!("unknown file extension '.{ext}', expected one of: csv, json, jsonl"),
            )
        })
    }

    /// Returns `path` with its extension replaced by this format's.
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(OutputFormat::Json.apply_extension("chat.csv"), PathBuf::from("chat.json"));
    /// ```
    pub fn apply_extension(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref().with_extension(self.extension())
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(&s.to_ascii_lowercase()).ok_or_else(|| {
            ChatlensError::invalid_format(
                "output",
                format!(
                    "unknown format '{s}', expected one of: {}",
                    OutputFormat::all_names().join(", ")
                ),
            )
        })
    }
}

fn missing_feature(format: OutputFormat) -> ChatlensError {
    ChatlensError::invalid_format(
        "output",
        format!(
            "output format {format} requires the '{}' feature",
            format.required_feature()
        ),
    )
}

/// Writes records to `path` in `format`.
///
/// # Errors
///
/// Fails if the writer's feature is disabled or the file cannot be written.
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[MessageRecord],
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders records as a string in `format`.
#[allow(unused_variables)]
pub fn to_format_string(
    records: &[MessageRecord],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(records, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}
