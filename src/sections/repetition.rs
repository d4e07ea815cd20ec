//! Repetition section - limits runs of identical characters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::evaluation::PolicyViolation;
use crate::policy::PasswordPolicy;
use crate::runs::longest_consecutive_identical_characters;

/// Rejects runs of identical characters longer than the policy allows.
pub fn repetition_section(password: &SecretString, policy: &PasswordPolicy) -> SectionResult {
    let run = longest_consecutive_identical_characters(password.expose_secret());
    if run > policy.max_consecutive_identical {
        return vec![PolicyViolation::RepeatedCharacters {
            run,
            max: policy.max_consecutive_identical,
        }];
    }
    Vec::new()
}
