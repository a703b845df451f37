//! Selection and output for parsed records.
//!
//! This module contains:
//! - [`filter`] - Record selection by sender and date
//! - [`models`] - Output configuration
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatlens::core::{
//!     FilterConfig, OutputConfig, SenderSelection,
//!     apply_filters, filter_by_sender,
//!     write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod filter;
pub mod models;
pub mod output;

pub use filter::{FilterConfig, SenderSelection, apply_filters, filter_by_sender, participants};
pub use models::OutputConfig;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
