//! Output configuration shared by the record writers.

/// Controls which columns the record writers emit.
///
/// `Sender` and `Body` are always written. The timestamp is on by default;
/// the derived calendar columns are opt-in.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Include the send time
    pub include_timestamps: bool,
    /// Include date, year, month, day, weekday, hour, minute and hour bucket
    pub include_calendar: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_timestamps: true,
            include_calendar: false,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_calendar(mut self) -> Self {
        self.include_calendar = true;
        self
    }

    #[must_use]
    pub fn without_timestamps(mut self) -> Self {
        self.include_timestamps = false;
        self
    }
}
