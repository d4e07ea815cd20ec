//! Password policy evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::evaluation::PolicyEvaluation;
use crate::policy::PasswordPolicy;
use crate::sections::{
    SectionResult, boundary_section, character_variety_section, dictionary_section,
    forbidden_characters_section, length_section, repetition_section,
};

type Section = fn(&SecretString, &PasswordPolicy) -> SectionResult;

/// Evaluates a password against the default policy.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `dictionary` - Words the password must not be a simple variant of
///
/// # Returns
/// A `PolicyEvaluation` listing every violated rule.
pub fn evaluate_password<S: AsRef<str>>(
    password: &SecretString,
    dictionary: &[S],
) -> PolicyEvaluation {
    evaluate_password_with(password, dictionary, &PasswordPolicy::default())
}

/// Evaluates a password against the given policy.
///
/// Every section runs, so the result carries the complete set of
/// violations rather than only the first one.
pub fn evaluate_password_with<S: AsRef<str>>(
    password: &SecretString,
    dictionary: &[S],
    policy: &PasswordPolicy,
) -> PolicyEvaluation {
    let sections: [(&str, Section); 5] = [
        ("length", length_section),
        ("boundary", boundary_section),
        ("repetition", repetition_section),
        ("variety", character_variety_section),
        ("forbidden", forbidden_characters_section),
    ];

    let mut violations = Vec::new();
    for (_section_name, section_fn) in sections {
        let found = section_fn(password, policy);
        #[cfg(feature = "tracing")]
        {
            if !found.is_empty() {
                tracing::trace!("Section {} reported {} violation(s)", _section_name, found.len());
            }
        }
        violations.extend(found);
    }
    violations.extend(dictionary_section(password, dictionary, policy));

    #[cfg(feature = "tracing")]
    {
        if !violations.is_empty() {
            let rules: Vec<&str> = violations.iter().map(|v| v.rule()).collect();
            tracing::debug!("Password rejected: {} violation(s) {:?}", violations.len(), rules);
        }
    }

    PolicyEvaluation { violations }
}

/// Returns `true` if the password satisfies every rule of the default policy.
pub fn check_password<S: AsRef<str>>(password: &str, dictionary: &[S]) -> bool {
    let password = SecretString::new(password.into());
    evaluate_password(&password, dictionary).is_acceptable()
}

/// Async version that sends evaluation result via channel.
///
/// Nothing is sent when `token` is cancelled before the result is ready.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx<S: AsRef<str>>(
    password: &SecretString,
    dictionary: &[S],
    token: CancellationToken,
    tx: mpsc::Sender<PolicyEvaluation>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Password evaluation cancelled before start");
        return;
    }

    let evaluation = evaluate_password(password, dictionary);

    if token.is_cancelled() {
        return;
    }

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
