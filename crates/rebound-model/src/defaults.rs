//! Default parameters of the exponential backoff.
//!
//! Both the [`Duration`] form (used by the generator) and the millisecond form
//! (used by [`crate::BackoffConfig`]) are exported; they always describe the same values.

use std::time::Duration;

/// Jitter width as a fraction of the current interval.
///
/// `0.5` spreads each delay over `[interval * 0.5, interval * 1.5]`.
pub const DEFAULT_FACTOR: f64 = 0.5;

/// Growth applied to the interval after every issued delay (50% per step).
pub const DEFAULT_MULTIPLIER: f64 = 1.5;

pub const DEFAULT_INIT_INTERVAL_MS: u64 = 500;
pub const DEFAULT_INIT_INTERVAL: Duration = Duration::from_millis(DEFAULT_INIT_INTERVAL_MS);

pub const DEFAULT_MAX_INTERVAL_MS: u64 = 60_000;
pub const DEFAULT_MAX_INTERVAL: Duration = Duration::from_millis(DEFAULT_MAX_INTERVAL_MS);

/// Elapsed budget used by bounded configurations (15 minutes).
pub const DEFAULT_MAX_ELAPSED_MS: u64 = 15 * 60 * 1_000;
pub const DEFAULT_MAX_ELAPSED: Duration = Duration::from_millis(DEFAULT_MAX_ELAPSED_MS);

/// Retry budget used by bounded configurations.
pub const DEFAULT_MAX_RETRY: u32 = 30;
