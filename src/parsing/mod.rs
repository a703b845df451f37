//! Low-level parsing utilities used by [`ExportParser`](crate::parser::ExportParser).
//!
//! This module holds the marker pattern, the calendar resolution rules and the
//! sender-prefix split. They are public so hosts can reuse the exact
//! derivation rules instead of re-implementing them.

pub mod marker;

pub use marker::{
    MARKER_PATTERN, Marker, PIVOT_CENTURY, find_markers, resolve_year, segment, split_sender,
    to_24_hour, trim_payload,
};
