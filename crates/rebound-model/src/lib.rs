mod defaults;
pub use defaults::{
    DEFAULT_FACTOR, DEFAULT_INIT_INTERVAL, DEFAULT_INIT_INTERVAL_MS, DEFAULT_MAX_ELAPSED,
    DEFAULT_MAX_ELAPSED_MS, DEFAULT_MAX_INTERVAL, DEFAULT_MAX_INTERVAL_MS, DEFAULT_MAX_RETRY,
    DEFAULT_MULTIPLIER,
};

mod error;
pub use error::{ModelError, ModelResult};

mod config;
pub use config::BackoffConfig;
