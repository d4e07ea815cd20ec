//! Forbidden characters section - line breaks and slashes.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::evaluation::PolicyViolation;
use crate::policy::PasswordPolicy;

/// Rejects carriage return, line feed, `/` and `\` anywhere in the password.
pub fn forbidden_characters_section(
    password: &SecretString,
    _policy: &PasswordPolicy,
) -> SectionResult {
    let pwd = password.expose_secret();
    let mut violations = Vec::new();

    if pwd.contains('\r') {
        violations.push(PolicyViolation::CarriageReturn);
    }
    if pwd.contains('\n') {
        violations.push(PolicyViolation::LineFeed);
    }
    for separator in ['/', '\\'] {
        if pwd.contains(separator) {
            violations.push(PolicyViolation::PathSeparator { separator });
        }
    }
    violations
}
