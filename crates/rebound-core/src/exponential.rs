//! # Exponential backoff with jitter.
//!
//! [`Exponential`] hands out one delay per failed attempt. Each delay is a
//! jittered sample of the current interval, and the interval grows by
//! [`Exponential::multiplier`] after every call until it reaches
//! [`Exponential::max_interval`], where it stays.
//!
//! A sequence ends ([`STOP`]) when either optional bound fires:
//! - [`Exponential::max_elapsed`] wall-clock time since the last reset;
//! - [`Exponential::max_retry`] delays issued since the last reset.
//!
//! Once stopped, the generator keeps returning [`STOP`] until [`Backoff::reset`].
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use rebound_core::prelude::*;
//!
//! let mut backoff = Exponential::new();
//! backoff.set_factor(0.0);
//! backoff.reset();
//!
//! assert_eq!(backoff.next(), Some(Duration::from_millis(500)));
//! assert_eq!(backoff.next(), Some(Duration::from_millis(750)));
//! ```

use std::time::{Duration, Instant};

use rebound_model::{
    DEFAULT_FACTOR, DEFAULT_INIT_INTERVAL, DEFAULT_MAX_INTERVAL, DEFAULT_MULTIPLIER,
};
use tracing::{debug, trace};

use crate::backoff::{Backoff, STOP};
use crate::clock::{Clock, SystemClock};
use crate::jitter::jittered;

/// Why a retry sequence was stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// More than `max_elapsed` passed since the last reset.
    Elapsed,
    /// `max_retry` delays were already issued.
    MaxRetry,
}

impl StopReason {
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            StopReason::Elapsed => "elapsed",
            StopReason::MaxRetry => "max-retry",
        }
    }
}

/// Stateful exponential backoff generator.
///
/// Bounds are public and may be changed between construction and
/// [`Backoff::reset`]; `factor` and `multiplier` go through setters that
/// clamp or ignore invalid values instead of failing.
#[derive(Debug, Clone)]
pub struct Exponential<C: Clock = SystemClock> {
    /// Interval the sequence starts from.
    pub init_interval: Duration,
    /// Ceiling of the interval growth.
    pub max_interval: Duration,
    /// Wall-clock budget of a sequence; [`Duration::ZERO`] disables it.
    pub max_elapsed: Duration,
    /// Number of delays a sequence may issue; `0` disables it.
    pub max_retry: u32,

    factor: f64,
    multiplier: f64,
    current_interval: Duration,
    reached_max: bool,
    start: Instant,
    current_retry: u32,
    stopped: Option<StopReason>,
    clock: C,
}

impl Exponential<SystemClock> {
    /// Generator with default parameters and no bounds.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Generator that stops once `max_elapsed` has passed since the last reset.
    pub fn with_max_elapsed(max_elapsed: Duration) -> Self {
        Self {
            max_elapsed,
            ..Self::new()
        }
    }

    /// Generator that stops after issuing `max_retry` delays.
    pub fn with_max_retry(max_retry: u32) -> Self {
        Self {
            max_retry,
            ..Self::new()
        }
    }
}

impl Default for Exponential<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Exponential<C> {
    /// Generator with default parameters reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        let start = clock.now();
        let mut b = Self {
            init_interval: DEFAULT_INIT_INTERVAL,
            max_interval: DEFAULT_MAX_INTERVAL,
            max_elapsed: Duration::ZERO,
            max_retry: 0,
            factor: DEFAULT_FACTOR,
            multiplier: DEFAULT_MULTIPLIER,
            current_interval: DEFAULT_INIT_INTERVAL,
            reached_max: false,
            start,
            current_retry: 0,
            stopped: None,
            clock,
        };
        b.restart();
        b
    }

    /// Sets the jitter factor, clamped into `[0, 1]`. NaN becomes `0`.
    pub fn set_factor(&mut self, factor: f64) {
        self.factor = if factor.is_nan() {
            0.0
        } else {
            factor.clamp(0.0, 1.0)
        };
    }

    #[inline]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Sets the growth multiplier.
    ///
    /// Values that are not strictly greater than `1` (or not a number) would
    /// stop or reverse the growth; they are ignored and the previous
    /// multiplier is kept.
    pub fn set_multiplier(&mut self, multiplier: f64) {
        if multiplier > 1.0 {
            self.multiplier = multiplier;
        }
    }

    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Delays issued since the last reset.
    #[inline]
    pub fn attempts(&self) -> u32 {
        self.current_retry
    }

    /// Interval the next delay will be sampled from.
    #[inline]
    pub fn current_interval(&self) -> Duration {
        self.current_interval
    }

    /// Time since the last reset, as seen by the clock.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.start)
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.stopped.is_some()
    }

    /// Bound that ended the current sequence, if any.
    #[inline]
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stopped
    }

    fn restart(&mut self) {
        self.reached_max = self.init_interval >= self.max_interval;
        self.current_interval = self.init_interval.min(self.max_interval);
        self.start = self.clock.now();
        self.current_retry = 0;
        self.stopped = None;
    }

    fn check_bounds(&self) -> Option<StopReason> {
        if !self.max_elapsed.is_zero() && self.elapsed() > self.max_elapsed {
            return Some(StopReason::Elapsed);
        }
        if self.max_retry != 0 && self.current_retry >= self.max_retry {
            return Some(StopReason::MaxRetry);
        }
        None
    }

    fn grow(&mut self) {
        if self.reached_max {
            return;
        }
        let candidate = self.current_interval.as_nanos() as f64 * self.multiplier;
        if candidate >= self.max_interval.as_nanos() as f64 {
            self.current_interval = self.max_interval;
            self.reached_max = true;
        } else {
            self.current_interval = Duration::from_nanos(candidate as u64);
        }
    }
}

impl<C: Clock> Backoff for Exponential<C> {
    fn next(&mut self) -> Option<Duration> {
        if self.stopped.is_some() {
            return STOP;
        }
        if let Some(reason) = self.check_bounds() {
            debug!(
                reason = reason.as_label(),
                attempts = self.current_retry,
                elapsed_ms = self.elapsed().as_millis() as u64,
                "backoff exhausted"
            );
            self.stopped = Some(reason);
            return STOP;
        }

        self.current_retry += 1;
        let delay = jittered(self.current_interval, self.factor, &mut rand::rng());
        trace!(
            attempt = self.current_retry,
            delay_ms = delay.as_millis() as u64,
            interval_ms = self.current_interval.as_millis() as u64,
            "backoff delay"
        );
        self.grow();
        Some(delay)
    }

    fn reset(&mut self) {
        self.restart();
    }
}
