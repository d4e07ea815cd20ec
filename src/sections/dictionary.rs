//! Dictionary section - rejects simple variants of dictionary words.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::evaluation::PolicyViolation;
use crate::policy::PasswordPolicy;
use crate::similarity::similar_to_word_within;

/// Checks the password against each dictionary word in order.
///
/// Reports the first word the password is too similar to.
pub fn dictionary_section<S: AsRef<str>>(
    password: &SecretString,
    dictionary: &[S],
    policy: &PasswordPolicy,
) -> SectionResult {
    let pwd = password.expose_secret();
    dictionary
        .iter()
        .map(|word| word.as_ref())
        .find(|word| similar_to_word_within(word, pwd, policy.similarity_length_slack))
        .map(|word| PolicyViolation::SimilarToWord {
            word: word.to_string(),
        })
        .into_iter()
        .collect()
}
