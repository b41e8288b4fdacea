//! Randomized spread around the current interval.
//!
//! Given an interval `C` and a factor `f`, the delay is sampled uniformly from
//! `[C * (1 - f), C * (1 + f)]` at nanosecond resolution. One extra nanosecond
//! is added to the span before scaling so that flooring the sample can still
//! reach the upper bound.

use std::time::Duration;

use rand::Rng;

/// Samples a delay around `interval`.
///
/// `factor` is expected in `[0, 1]`; with `0` the result is exactly `interval`.
///
/// ```
/// use std::time::Duration;
/// use rebound_core::jitter::jittered;
///
/// let d = jittered(Duration::from_millis(500), 0.0, &mut rand::rng());
/// assert_eq!(d, Duration::from_millis(500));
/// ```
pub fn jittered<R: Rng + ?Sized>(interval: Duration, factor: f64, rng: &mut R) -> Duration {
    let current = interval.as_nanos() as f64;
    let lo = current * (1.0 - factor);
    let hi = current * (1.0 + factor);

    let r: f64 = rng.random();
    let sample = lo + r * (hi - lo + 1.0);

    // `as` saturates, so a pathological interval cannot panic here.
    Duration::from_nanos(sample as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn zero_factor_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        for ms in [1, 500, 750, 60_000] {
            let interval = Duration::from_millis(ms);
            for _ in 0..100 {
                assert_eq!(jittered(interval, 0.0, &mut rng), interval);
            }
        }
    }

    #[test]
    fn samples_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let interval = Duration::from_secs(2);

        for factor in [0.1, 0.5, 1.0] {
            let lo = interval.mul_f64(1.0 - factor);
            let hi = interval.mul_f64(1.0 + factor);
            for _ in 0..1_000 {
                let d = jittered(interval, factor, &mut rng);
                assert!(d >= lo && d <= hi, "{d:?} outside [{lo:?}, {hi:?}] for factor {factor}");
            }
        }
    }

    #[test]
    fn full_factor_reaches_near_zero_and_double() {
        let mut rng = StdRng::seed_from_u64(1);
        let interval = Duration::from_secs(1);

        let (mut min, mut max) = (Duration::MAX, Duration::ZERO);
        for _ in 0..10_000 {
            let d = jittered(interval, 1.0, &mut rng);
            min = min.min(d);
            max = max.max(d);
        }

        assert!(min < Duration::from_millis(50), "min was {min:?}");
        assert!(max > Duration::from_millis(1_950), "max was {max:?}");
    }

    #[test]
    fn samples_are_spread() {
        let mut rng = StdRng::seed_from_u64(9);
        let interval = Duration::from_millis(500);

        let first = jittered(interval, 0.5, &mut rng);
        let differs = (0..100).any(|_| jittered(interval, 0.5, &mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn zero_interval_stays_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(jittered(Duration::ZERO, 1.0, &mut rng), Duration::ZERO);
    }
}
