//! Environment-driven configuration.

use crate::error::ConfigError;

pub const MIN_LENGTH_ENV: &str = "PWD_RULES_MIN_LENGTH";
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Settings for the baseline rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultRulesConfig {
    /// Minimum number of characters required by the `minLength` rule.
    pub min_length: usize,
}

impl Default for DefaultRulesConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl DefaultRulesConfig {
    /// Reads the configuration from the environment.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_RULES_MIN_LENGTH`
    /// 2. Default of 8 characters
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the variable is set but is not
    /// a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let min_length = match std::env::var(MIN_LENGTH_ENV) {
            Ok(raw) => parse_min_length(&raw)?,
            Err(_) => DEFAULT_MIN_LENGTH,
        };
        Ok(Self { min_length })
    }
}

fn parse_min_length(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            key: MIN_LENGTH_ENV,
            value: raw.to_string(),
        }),
    }
}
