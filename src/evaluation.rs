//! Policy verdict types.

use thiserror::Error;

/// A single rule of the password policy that a password failed.
///
/// Messages describe the rule only; they never echo the password.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },
    #[error("Password must be no more than {max} characters")]
    TooLong { max: usize },
    #[error("Password must not begin with a space")]
    LeadingSpace,
    #[error("Password must not end with a space")]
    TrailingSpace,
    #[error("Password contains {run} consecutive identical characters (max {max})")]
    RepeatedCharacters { run: usize, max: usize },
    #[error("Password is too similar to the dictionary word \"{word}\"")]
    SimilarToWord { word: String },
    #[error("Password must contain a lowercase letter")]
    MissingLowercase,
    #[error("Password must contain an uppercase letter")]
    MissingUppercase,
    #[error("Password must contain a number or special character")]
    MissingNonLetter,
    #[error("Password must not contain a carriage return")]
    CarriageReturn,
    #[error("Password must not contain a line feed")]
    LineFeed,
    #[error("Password must not contain '{separator}'")]
    PathSeparator { separator: char },
    #[error("Password must not end with '*'")]
    TrailingAsterisk,
}

impl PolicyViolation {
    /// Short stable name of the violated rule.
    pub fn rule(&self) -> &'static str {
        match self {
            Self::TooShort { .. } | Self::TooLong { .. } => "length",
            Self::LeadingSpace | Self::TrailingSpace => "boundary_space",
            Self::RepeatedCharacters { .. } => "repetition",
            Self::SimilarToWord { .. } => "dictionary",
            Self::MissingLowercase => "lowercase",
            Self::MissingUppercase => "uppercase",
            Self::MissingNonLetter => "non_letter",
            Self::CarriageReturn => "carriage_return",
            Self::LineFeed => "line_feed",
            Self::PathSeparator { .. } => "separator",
            Self::TrailingAsterisk => "trailing_asterisk",
        }
    }
}

/// Outcome of checking one password against the policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyEvaluation {
    pub violations: Vec<PolicyViolation>,
}

impl PolicyEvaluation {
    /// `true` when no rule was violated.
    pub fn is_acceptable(&self) -> bool {
        self.violations.is_empty()
    }

    /// Human-readable reasons, one per violation.
    pub fn reasons(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}
