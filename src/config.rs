//! Checker configuration
//!
//! Reads validator settings from the environment.

use thiserror::Error;

use crate::scorer::StrengthScorer;
use crate::validator::{DEFAULT_MIN_LENGTH, PasswordValidator};

/// Environment variable overriding the minimum password length.
pub const MIN_LENGTH_ENV: &str = "PWD_MIN_LENGTH";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid minimum length {value:?}: {reason}")]
    InvalidMinLength { value: String, reason: String },
    #[error("Minimum length must be greater than zero")]
    ZeroMinLength,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckerConfig {
    pub min_length: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl CheckerConfig {
    /// Builds a config from the environment.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_MIN_LENGTH`
    /// 2. Default minimum length (8)
    ///
    /// # Errors
    ///
    /// Returns error if the variable is set but is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(MIN_LENGTH_ENV) {
            Ok(raw) => Self::default().with_min_length_str(&raw),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Replaces the minimum length with a parsed value.
    pub fn with_min_length_str(self, raw: &str) -> Result<Self, ConfigError> {
        let min_length = raw.trim().parse::<usize>().map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected {}={:?}: {}", MIN_LENGTH_ENV, raw, e);
            ConfigError::InvalidMinLength {
                value: raw.to_string(),
                reason: e.to_string(),
            }
        })?;
        self.with_min_length(min_length)
    }

    pub fn with_min_length(self, min_length: usize) -> Result<Self, ConfigError> {
        if min_length == 0 {
            return Err(ConfigError::ZeroMinLength);
        }
        Ok(Self { min_length })
    }

    pub fn validator(&self) -> PasswordValidator {
        PasswordValidator::new(self.min_length)
    }

    pub fn build_scorer(&self) -> StrengthScorer {
        StrengthScorer::new(self.validator())
    }
}
