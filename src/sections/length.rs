//! Length section - checks password length bounds.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::evaluation::PolicyViolation;
use crate::policy::PasswordPolicy;

/// Checks that the password length lies within the policy bounds.
///
/// Length is counted in bytes.
pub fn length_section(password: &SecretString, policy: &PasswordPolicy) -> SectionResult {
    let len = password.expose_secret().len();
    if len < policy.min_length {
        return vec![PolicyViolation::TooShort {
            min: policy.min_length,
        }];
    }
    if len > policy.max_length {
        return vec![PolicyViolation::TooLong {
            max: policy.max_length,
        }];
    }
    Vec::new()
}
