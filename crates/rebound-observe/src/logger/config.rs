use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::logger::error::LoggerResult;
use crate::logger::object::{LoggerFormat, LoggerLevel};

/// Environment variable holding the filter expression.
pub const ENV_LEVEL: &str = "REBOUND_LOG";
/// Environment variable holding the output format.
pub const ENV_FORMAT: &str = "REBOUND_LOG_FORMAT";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// Filter expression, e.g. `"info"` or `"rebound_core=trace,info"`.
    pub level: LoggerLevel,
    /// Print the event target (module path).
    pub with_targets: bool,
    /// Color text output; only honored when stdout is a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Defaults overridden by [`ENV_LEVEL`] and [`ENV_FORMAT`] when set.
    pub fn from_env() -> LoggerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> LoggerResult<Self> {
        let mut cfg = Self::default();
        if let Some(level) = lookup(ENV_LEVEL) {
            cfg.level = level.parse()?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            cfg.format = format.parse()?;
        }
        Ok(cfg)
    }

    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}
