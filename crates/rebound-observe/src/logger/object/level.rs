use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Validated `EnvFilter` expression.
///
/// The raw string is kept so the config can be serialized back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// ```
    /// use rebound_observe::LoggerLevel;
    ///
    /// assert!(LoggerLevel::new("rebound_core=trace,info").is_ok());
    /// assert!(LoggerLevel::new("rebound_core=chatty").is_err());
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_env_filter(&self) -> EnvFilter {
        // Validated on construction.
        EnvFilter::try_new(&self.0).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        EnvFilter::try_new(&s)
            .map(|_| Self(s.clone()))
            .map_err(|e| LoggerError::InvalidLevel(format!("{s}: {e}")))
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;

    #[test]
    fn accepts_directives() {
        for lvl in ["info", "warn", "trace", "rebound_core=trace,info", "rebound_core::exponential=debug"] {
            assert!(lvl.parse::<LoggerLevel>().is_ok(), "{lvl} should parse");
        }
    }

    #[test]
    fn rejects_unknown_levels() {
        for lvl in ["rebound_core=loud", "a=trace,b=wat"] {
            assert!(lvl.parse::<LoggerLevel>().is_err(), "{lvl} should be rejected");
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let lvl = LoggerLevel::new("debug").unwrap();
        assert_eq!(serde_json::to_string(&lvl).unwrap(), r#""debug""#);

        let back: LoggerLevel = serde_json::from_str(r#""rebound_core=trace""#).unwrap();
        assert_eq!(back.as_str(), "rebound_core=trace");
        let _ = back.to_env_filter();
    }

    #[test]
    fn default_is_info() {
        assert_eq!(LoggerLevel::default().as_str(), "info");
    }
}
