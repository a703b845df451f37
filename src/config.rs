//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how an export is segmented and which notices are suppressed
//! - [`AnalysisConfig`] - limits and placeholders used by the aggregators
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::ParserConfig;
//! use chatlens::parser::ExportParser;
//!
//! let config = ParserConfig::new()
//!     .with_skip_preamble(true)
//!     .with_suppressed_phrase("pinned a message");
//!
//! let parser = ExportParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Phrases that mark group-management and security notices.
///
/// Records whose body contains any of these (ASCII case-insensitive) are
/// dropped during parsing and never reach the statistics.
pub const DEFAULT_SUPPRESSED_PHRASES: &[&str] = &[
    "security code",
    "changed the group",
    "changed the subject",
    "changed this group's icon",
    "deleted this group's icon",
    "created group",
];

/// Body text WhatsApp writes in place of an attachment.
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Configuration for export parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new().with_suppression(false);
/// assert!(!config.suppress_notices);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Drop records whose body contains a suppressed phrase (default: true)
    pub suppress_notices: bool,

    /// Phrases matched ASCII case-insensitively against each body
    pub suppressed_phrases: Vec<String>,

    /// Drop non-blank text before the first marker instead of failing (default: false)
    pub skip_preamble: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            suppress_notices: true,
            suppressed_phrases: DEFAULT_SUPPRESSED_PHRASES
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            skip_preamble: false,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables notice suppression.
    #[must_use]
    pub fn with_suppression(mut self, enabled: bool) -> Self {
        self.suppress_notices = enabled;
        self
    }

    /// Adds a phrase to the suppression list.
    #[must_use]
    pub fn with_suppressed_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.suppressed_phrases.push(phrase.into());
        self
    }

    /// Sets whether leading text before the first marker is dropped.
    #[must_use]
    pub fn with_skip_preamble(mut self, skip: bool) -> Self {
        self.skip_preamble = skip;
        self
    }

    /// Returns `true` if `body` should be suppressed under this configuration.
    pub fn is_suppressed(&self, body: &str) -> bool {
        if !self.suppress_notices {
            return false;
        }

        let body_lower = body.to_ascii_lowercase();
        self.suppressed_phrases
            .iter()
            .any(|phrase| body_lower.contains(&phrase.to_ascii_lowercase()))
    }
}

/// Configuration for the aggregators.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new().with_top_words(20);
/// assert_eq!(config.top_words, 20);
/// assert_eq!(config.top_users, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of entries in the most-common-words list (default: 10)
    pub top_words: usize,

    /// Number of entries in the busiest-users list (default: 5)
    pub top_users: usize,

    /// Body text that counts as a shared media item
    pub media_placeholder: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: 10,
            top_users: 5,
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the length of the most-common-words list.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the length of the busiest-users list.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the media placeholder text.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }
}
