use std::time::Duration;

use rebound_model::BackoffConfig;

use crate::clock::{Clock, SystemClock};
use crate::exponential::Exponential;

/// Builds a generator from its serializable configuration.
///
/// Factor and multiplier go through the generator setters, so out-of-range
/// values are clamped or ignored rather than rejected. Use
/// [`BackoffConfig::validate`] beforehand to fail on them instead.
pub fn to_exponential(cfg: &BackoffConfig) -> Exponential {
    to_exponential_with_clock(cfg, SystemClock)
}

pub fn to_exponential_with_clock<C: Clock>(cfg: &BackoffConfig, clock: C) -> Exponential<C> {
    let mut b = Exponential::with_clock(clock);
    b.set_factor(cfg.factor);
    b.set_multiplier(cfg.multiplier);
    b.init_interval = Duration::from_millis(cfg.init_interval_ms);
    b.max_interval = Duration::from_millis(cfg.max_interval_ms);
    b.max_elapsed = Duration::from_millis(cfg.max_elapsed_ms);
    b.max_retry = cfg.max_retry;
    b
}
