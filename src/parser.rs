//! Export parser: raw chat text in, ordered [`MessageRecord`]s out.
//!
//! The parser segments an exported chat into entries using the timestamp
//! marker that starts each entry, resolves every marker into a wall-clock
//! timestamp, splits off the sender, and drops group-management notices.
//!
//! Parsing is pure and atomic: it performs no I/O, and on any error no
//! records are returned.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::parse_export;
//!
//! let raw = "1/1/24, 9:00 am - Bob: Hello\nworld\n1/1/24, 9:05 am - Alice: Hi Bob\n";
//! let records = parse_export(raw)?;
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].sender(), "Bob");
//! assert_eq!(records[0].body(), "Hello\nworld");
//! assert_eq!(records[1].hour_bucket(), "9-10");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! # Failure modes
//!
//! | Condition | Error |
//! |-----------|-------|
//! | Empty or blank text, invalid UTF-8 bytes | [`InvalidInput`](ChatlensError::InvalidInput) |
//! | No timestamp markers | [`NoMessagesFound`](ChatlensError::NoMessagesFound) |
//! | Unattributable text before the first marker | [`StreamAlignment`](ChatlensError::StreamAlignment) |
//! | Marker with an impossible date or time | [`TimestampParse`](ChatlensError::TimestampParse) |

use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::parsing::{find_markers, segment, split_sender, trim_payload};
use crate::record::{GROUP_NOTIFICATION, MessageRecord};

/// Parser for exported chat text.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
/// use chatlens::parser::ExportParser;
///
/// let parser = ExportParser::with_config(ParserConfig::new().with_skip_preamble(true));
/// let records = parser.parse_str("Exported chat\n1/1/24, 9:00 am - Bob: Hello")?;
/// assert_eq!(records.len(), 1);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExportParser {
    config: ParserConfig,
}

impl ExportParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses raw export bytes, which must be valid UTF-8.
    pub fn parse_bytes(&self, raw: &[u8]) -> Result<Vec<MessageRecord>> {
        let text = std::str::from_utf8(raw).map_err(|e| {
            ChatlensError::invalid_input(format!("export is not valid UTF-8: {e}"))
        })?;
        self.parse_str(text)
    }

    /// Parses raw export text.
    pub fn parse_str(&self, raw: &str) -> Result<Vec<MessageRecord>> {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        if raw.trim().is_empty() {
            return Err(ChatlensError::invalid_input("export is empty"));
        }

        // Step 1: locate markers
        let markers = find_markers(raw);
        if markers.is_empty() {
            return Err(ChatlensError::NoMessagesFound);
        }

        // Step 2: cut the text between markers and check alignment
        let (preamble, payloads) = segment(raw, &markers);
        let mut segments = payloads.len();

        if !preamble.trim().is_empty() {
            if self.config.skip_preamble {
                warn!(
                    bytes = preamble.len(),
                    "dropping text before the first timestamp marker"
                );
            } else {
                segments += 1;
            }
        }

        if segments != markers.len() {
            return Err(ChatlensError::StreamAlignment {
                markers: markers.len(),
                segments,
            });
        }

        // Step 3: build records, resolving every marker before suppression
        let mut records = Vec::with_capacity(markers.len());
        let mut suppressed = 0usize;

        for (marker, payload) in markers.iter().zip(payloads) {
            let timestamp = marker.resolve()?;
            let payload = trim_payload(payload);
            let (sender, body) = split_sender(payload).unwrap_or((GROUP_NOTIFICATION, payload));

            if self.config.is_suppressed(body) {
                suppressed += 1;
                continue;
            }

            records.push(MessageRecord::new(sender, body, timestamp));
        }

        debug!(
            markers = markers.len(),
            records = records.len(),
            suppressed,
            "parsed chat export"
        );

        Ok(records)
    }
}

/// Parses raw export text with the default configuration.
///
/// Equivalent to `ExportParser::new().parse_str(raw)`.
pub fn parse_export(raw: &str) -> Result<Vec<MessageRecord>> {
    ExportParser::new().parse_str(raw)
}
