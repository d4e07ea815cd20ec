//! Character variety section - checks for uppercase, lowercase and non-letters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::classes::CharacterClasses;
use crate::evaluation::PolicyViolation;
use crate::policy::PasswordPolicy;

/// Requires at least one character from each class.
pub fn character_variety_section(
    password: &SecretString,
    _policy: &PasswordPolicy,
) -> SectionResult {
    let classes = CharacterClasses::scan(password.expose_secret());

    vec![
        if !classes.has_lower { Some(PolicyViolation::MissingLowercase) } else { None },
        if !classes.has_upper { Some(PolicyViolation::MissingUppercase) } else { None },
        if !classes.has_non_letter { Some(PolicyViolation::MissingNonLetter) } else { None },
    ]
    .into_iter()
    .flatten()
    .collect()
}
