//! Password policy validation library
//!
//! Checks candidate passwords against the UMD password rules:
//!
//! - 8 to 32 characters
//! - at least one uppercase letter, one lowercase letter and one
//!   non-letter (digit, punctuation, space)
//! - no leading or trailing space, no trailing `*`
//! - no more than two consecutive identical characters
//! - no carriage return, line feed, `/` or `\`
//! - not a simple variant of a dictionary word (case changes and
//!   `$`/`0`/`1` standing in for `s`/`o`/`l`)
//!
//! The caller supplies the dictionary as an in-memory list of words.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read only by [`PasswordPolicy::from_env`]:
//!
//! - `PWD_POLICY_MIN_LENGTH` (default: 8)
//! - `PWD_POLICY_MAX_LENGTH` (default: 32)
//! - `PWD_POLICY_MAX_REPEAT` (default: 2)
//! - `PWD_POLICY_SIMILARITY_SLACK` (default: 4)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{check_password, evaluate_password};
//! use secrecy::SecretString;
//!
//! let dictionary = ["password", "dragon"];
//! assert!(check_password("Str0ngP@ss", &dictionary));
//! assert!(!check_password("Pa$$word1", &dictionary));
//!
//! let password = SecretString::new("Dr4gon!".to_string().into());
//! let evaluation = evaluate_password(&password, &dictionary);
//! for reason in evaluation.reasons() {
//!     println!("{reason}");
//! }
//! ```

mod classes;
mod evaluation;
mod evaluator;
mod policy;
mod runs;
mod sections;
mod similarity;

// Public API
pub use classes::{
    CharacterClasses, count_lowercase_letters, count_uppercase_letters, has_non_letter,
};
pub use evaluation::{PolicyEvaluation, PolicyViolation};
pub use evaluator::{check_password, evaluate_password, evaluate_password_with};
pub use policy::{
    ENV_MAX_LENGTH, ENV_MAX_REPEAT, ENV_MIN_LENGTH, ENV_SIMILARITY_SLACK, PasswordPolicy,
    PolicyError,
};
pub use runs::{longest_consecutive_identical_characters, run_lengths};
pub use similarity::{SIMILARITY_LENGTH_SLACK, fold, similar_to_word, similar_to_word_within};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
