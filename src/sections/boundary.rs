//! Boundary section - checks the first and last characters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::evaluation::PolicyViolation;
use crate::policy::PasswordPolicy;

/// Rejects a leading or trailing space and a trailing `*`.
pub fn boundary_section(password: &SecretString, _policy: &PasswordPolicy) -> SectionResult {
    let pwd = password.expose_secret();
    let mut violations = Vec::new();

    if pwd.starts_with(' ') {
        violations.push(PolicyViolation::LeadingSpace);
    }
    if pwd.ends_with(' ') {
        violations.push(PolicyViolation::TrailingSpace);
    }
    if pwd.ends_with('*') {
        violations.push(PolicyViolation::TrailingAsterisk);
    }
    violations
}
