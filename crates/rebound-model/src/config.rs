use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::defaults::{
    DEFAULT_FACTOR, DEFAULT_INIT_INTERVAL_MS, DEFAULT_MAX_ELAPSED_MS, DEFAULT_MAX_INTERVAL_MS,
    DEFAULT_MAX_RETRY, DEFAULT_MULTIPLIER,
};
use crate::error::{ModelError, ModelResult};

/// Serializable parameters of an exponential backoff.
///
/// Intervals are expressed in milliseconds.
/// A zero `max_elapsed_ms` or `max_retry` disables the corresponding bound.
///
/// Missing fields fall back to the defaults, so `{}` is a valid (unbounded) config:
/// ```
/// use rebound_model::BackoffConfig;
///
/// let cfg = BackoffConfig::from_json(r#"{"maxRetry": 5}"#).unwrap();
/// assert_eq!(cfg.max_retry, 5);
/// assert_eq!(cfg.init_interval_ms, 500);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct BackoffConfig {
    /// Jitter width as a fraction of the current interval, in `[0, 1]`.
    pub factor: f64,
    /// Interval growth per issued delay, `> 1`.
    pub multiplier: f64,
    pub init_interval_ms: u64,
    pub max_interval_ms: u64,
    /// Wall-clock budget of a retry sequence; `0` disables it.
    pub max_elapsed_ms: u64,
    /// Number of delays a retry sequence may issue; `0` disables it.
    pub max_retry: u32,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            factor: DEFAULT_FACTOR,
            multiplier: DEFAULT_MULTIPLIER,
            init_interval_ms: DEFAULT_INIT_INTERVAL_MS,
            max_interval_ms: DEFAULT_MAX_INTERVAL_MS,
            max_elapsed_ms: 0,
            max_retry: 0,
        }
    }
}

impl BackoffConfig {
    /// Defaults with both the elapsed and the retry bound enabled.
    pub fn bounded() -> Self {
        Self {
            max_elapsed_ms: DEFAULT_MAX_ELAPSED_MS,
            max_retry: DEFAULT_MAX_RETRY,
            ..Self::default()
        }
    }

    /// Parses a JSON document and validates it.
    pub fn from_json(s: &str) -> ModelResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Strict check for configuration coming from outside the program.
    ///
    /// The generator itself never rejects parameters (it clamps the factor and
    /// ignores bad multipliers); this is for callers that prefer to fail loudly
    /// on a malformed config file.
    pub fn validate(&self) -> ModelResult<()> {
        if !self.factor.is_finite() || !(0.0..=1.0).contains(&self.factor) {
            return Err(ModelError::InvalidFactor(self.factor));
        }
        if !self.multiplier.is_finite() || self.multiplier <= 1.0 {
            return Err(ModelError::InvalidMultiplier(self.multiplier));
        }
        if self.init_interval_ms > self.max_interval_ms {
            return Err(ModelError::InvalidInterval(format!(
                "initIntervalMs ({}) exceeds maxIntervalMs ({})",
                self.init_interval_ms, self.max_interval_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let cfg = BackoffConfig::default();

        assert_eq!(cfg.factor, 0.5);
        assert_eq!(cfg.multiplier, 1.5);
        assert_eq!(cfg.init_interval_ms, 500);
        assert_eq!(cfg.max_interval_ms, 60_000);
        assert_eq!(cfg.max_elapsed_ms, 0);
        assert_eq!(cfg.max_retry, 0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bounded_enables_both_caps() {
        let cfg = BackoffConfig::bounded();

        assert_eq!(cfg.max_elapsed_ms, 900_000);
        assert_eq!(cfg.max_retry, 30);
        assert_eq!(cfg.multiplier, BackoffConfig::default().multiplier);
    }

    #[test]
    fn empty_json_uses_defaults() {
        let cfg = BackoffConfig::from_json("{}").unwrap();
        assert_eq!(cfg, BackoffConfig::default());
    }

    #[test]
    fn camel_case_fields() {
        let json = r#"{"factor": 0, "initIntervalMs": 100, "maxIntervalMs": 1000, "maxElapsedMs": 5000}"#;
        let cfg = BackoffConfig::from_json(json).unwrap();

        assert_eq!(cfg.factor, 0.0);
        assert_eq!(cfg.init_interval_ms, 100);
        assert_eq!(cfg.max_interval_ms, 1_000);
        assert_eq!(cfg.max_elapsed_ms, 5_000);
        assert_eq!(cfg.max_retry, 0);

        let out = serde_json::to_value(&cfg).unwrap();
        assert_eq!(out["initIntervalMs"], 100);
        assert_eq!(out["maxRetry"], 0);
    }

    #[test]
    fn rejects_out_of_range_factor() {
        for factor in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let cfg = BackoffConfig {
                factor,
                ..Default::default()
            };
            assert!(
                matches!(cfg.validate(), Err(ModelError::InvalidFactor(_))),
                "factor {factor} should be rejected"
            );
        }
    }

    #[test]
    fn multiplier_must_exceed_one() {
        for multiplier in [1.0, 0.5, 0.0, -2.0, f64::NAN] {
            let cfg = BackoffConfig {
                multiplier,
                ..Default::default()
            };
            assert!(
                matches!(cfg.validate(), Err(ModelError::InvalidMultiplier(_))),
                "multiplier {multiplier} should be rejected"
            );
        }

        let cfg = BackoffConfig {
            multiplier: 1.0001,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn init_interval_above_max_is_rejected() {
        let err = BackoffConfig::from_json(r#"{"initIntervalMs": 2000, "maxIntervalMs": 1000}"#)
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidInterval(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = BackoffConfig::from_json(r#"{"maxRetry": "ten"}"#).unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }
}
