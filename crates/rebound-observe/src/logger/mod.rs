mod config;
mod error;
mod log;
mod object;

pub use config::{ENV_FORMAT, ENV_LEVEL, LoggerConfig};
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel};

/// Installs the global `tracing` subscriber described by `cfg`.
///
/// Can succeed only once per process; later calls return
/// [`LoggerError::AlreadyInitialized`].
///
/// ```rust
/// use rebound_observe::{LoggerConfig, init_logger};
///
/// init_logger(&LoggerConfig::default()).expect("logger");
/// tracing::info!("ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => log::install_text(cfg),
        LoggerFormat::Json => log::install_json(cfg),
        LoggerFormat::Journald => log::install_journald(cfg),
    }
}
