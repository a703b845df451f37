//! Command-line interface definition using clap.
//!
//! - [`Cli`] - global options and the chosen [`Command`]
//! - [`ExportArgs`] - `chatlens export`, write the parsed record table
//! - [`ReportArgs`] - `chatlens report`, compute and emit a [`ChatReport`](crate::analysis::ChatReport)

use clap::{Args, Parser, Subcommand};

use crate::config::{AnalysisConfig, ParserConfig};
use crate::core::filter::{FilterConfig, SenderSelection};
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::format::OutputFormat;

/// Default export path; its extension follows `--format`.
pub const DEFAULT_EXPORT_OUTPUT: &str = "chat_records.csv";

/// Turn exported group-chat text into structured records and activity statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens export chat.txt
    chatlens export chat.txt -f jsonl --calendar --after 2024-01-01
    chatlens report chat.txt --user Alice --stopwords stop_hinglish.txt
    chatlens --log-level debug report chat.txt -o report.json")]
pub struct Cli {
    /// Log filter, e.g. "debug" or "chatlens=trace" (overrides RUST_LOG)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Disable coloured log output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Parse an export and write the record table
    Export(ExportArgs),

    /// Parse an export and produce activity statistics as JSON
    Report(ReportArgs),
}

/// Options shared by both subcommands.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the exported chat text
    pub input: String,

    /// Drop text before the first message instead of failing
    #[arg(long)]
    pub skip_preamble: bool,
}

impl InputArgs {
    pub fn parser_config(&self, keep_system: bool) -> ParserConfig {
        ParserConfig::new()
            .with_skip_preamble(self.skip_preamble)
            .with_suppression(!keep_system)
    }
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_EXPORT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Only records from this participant
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,

    /// Only records on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only records on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Add date, weekday, hour and period columns
    #[arg(long)]
    pub calendar: bool,

    /// Omit the timestamp column
    #[arg(long)]
    pub no_timestamps: bool,

    /// Keep group-management and security notices
    #[arg(long)]
    pub keep_system: bool,
}

impl ExportArgs {
    /// Builds the record filter from `--user`, `--after` and `--before`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(ref user) = self.user {
            let Ok(selection) = user.parse::<SenderSelection>();
            config = config.with_selection(selection);
        }
        Ok(config)
    }

    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.calendar {
            config = config.with_calendar();
        }
        if self.no_timestamps {
            config = config.without_timestamps();
        }
        config
    }

    /// Output path, with the extension adjusted when the default is in use.
    pub fn output_path(&self) -> String {
        if self.output == DEFAULT_EXPORT_OUTPUT {
            self.format
                .apply_extension(&self.output)
                .to_string_lossy()
                .into_owned()
        } else {
            self.output.clone()
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Participant to analyze, or "Overall"
    #[arg(long, value_name = "NAME", default_value = "Overall")]
    pub user: SenderSelection,

    /// Stop-word file (whitespace separated) for the word ranking
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<String>,

    /// Number of entries in the word ranking
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Write the report here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,
}

impl ReportArgs {
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new().with_top_words(self.top)
    }
}
