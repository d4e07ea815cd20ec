//! Policy configuration
//!
//! The default policy is the fixed institutional one. Individual limits can
//! be overridden through environment variables.

use std::env::VarError;

use thiserror::Error;

use crate::similarity::SIMILARITY_LENGTH_SLACK;

pub const ENV_MIN_LENGTH: &str = "PWD_POLICY_MIN_LENGTH";
pub const ENV_MAX_LENGTH: &str = "PWD_POLICY_MAX_LENGTH";
pub const ENV_MAX_REPEAT: &str = "PWD_POLICY_MAX_REPEAT";
pub const ENV_SIMILARITY_SLACK: &str = "PWD_POLICY_SIMILARITY_SLACK";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
    #[error("Minimum length {min} exceeds maximum length {max}")]
    InvalidLengthBounds { min: usize, max: usize },
    #[error("Maximum consecutive identical characters must be at least 1")]
    InvalidRepeatLimit,
}

/// Limits applied by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    /// Longest allowed run of identical characters.
    pub max_consecutive_identical: usize,
    /// See [`crate::similar_to_word_within`].
    pub similarity_length_slack: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 32,
            max_consecutive_identical: 2,
            similarity_length_slack: SIMILARITY_LENGTH_SLACK,
        }
    }
}

impl PasswordPolicy {
    /// The UMD password rules. Same as `Default`.
    pub fn umd() -> Self {
        Self::default()
    }

    /// Builds a policy from environment variables.
    ///
    /// Priority, per field:
    /// 1. The matching `PWD_POLICY_*` environment variable
    /// 2. The default policy value
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - A variable is set but is not an unsigned integer
    /// - The resulting policy fails [`PasswordPolicy::validate`]
    pub fn from_env() -> Result<Self, PolicyError> {
        let defaults = Self::default();
        let policy = Self {
            min_length: env_usize(ENV_MIN_LENGTH, defaults.min_length)?,
            max_length: env_usize(ENV_MAX_LENGTH, defaults.max_length)?,
            max_consecutive_identical: env_usize(
                ENV_MAX_REPEAT,
                defaults.max_consecutive_identical,
            )?,
            similarity_length_slack: env_usize(
                ENV_SIMILARITY_SLACK,
                defaults.similarity_length_slack,
            )?,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Checks that the limits are consistent.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.min_length > self.max_length {
            return Err(PolicyError::InvalidLengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }
        if self.max_consecutive_identical == 0 {
            return Err(PolicyError::InvalidRepeatLimit);
        }
        Ok(())
    }
}

fn env_usize(var: &'static str, default: usize) -> Result<usize, PolicyError> {
    let value = match std::env::var(var) {
        Ok(value) => value,
        Err(VarError::NotPresent) => return Ok(default),
        Err(VarError::NotUnicode(raw)) => raw.to_string_lossy().into_owned(),
    };
    value.trim().parse().map_err(|_| {
        #[cfg(feature = "tracing")]
        tracing::warn!("Invalid policy configuration {}={:?}", var, value);
        PolicyError::InvalidValue { var, value }
    })
}
