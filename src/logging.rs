//! Tracing subscriber setup for the `chatlens` binary.
//!
//! Diagnostics go to stderr; stdout carries the progress lines and,
//! for `report` without `-o`, the JSON report itself.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ChatlensError, Result};

/// Level used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Installs the global subscriber.
///
/// `log_level` overrides `RUST_LOG`. Colour is disabled by `no_color` or by
/// a `NO_COLOR` environment variable.
pub fn init_logging(log_level: Option<&str>, no_color: bool) -> Result<()> {
    let env_level = std::env::var("RUST_LOG").ok();
    let filter = log_level
        .or(env_level.as_deref())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let env_filter = EnvFilter::try_new(filter)
        .map_err(|e| ChatlensError::Config(format!("invalid log filter '{filter}': {e}")))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!no_color && color_allowed());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ChatlensError::Config(format!("failed to init logging: {e}")))
}

fn color_allowed() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}
