//! Character class scanning over the ASCII letter ranges.
//!
//! Passwords are treated as single-byte code units: anything outside
//! `A`-`Z` and `a`-`z` (digits, punctuation, space, bytes of non-ASCII
//! characters) counts as a non-letter.

/// Character classes present in a password, collected in a single pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_non_letter: bool,
}

impl CharacterClasses {
    /// Scans the password once and records which classes occur.
    ///
    /// An empty password yields all-false.
    pub fn scan(password: &str) -> Self {
        password.bytes().fold(Self::default(), |mut classes, b| {
            match b {
                b'A'..=b'Z' => classes.has_upper = true,
                b'a'..=b'z' => classes.has_lower = true,
                _ => classes.has_non_letter = true,
            }
            classes
        })
    }
}

/// Counts the letters in `A`-`Z`.
pub fn count_uppercase_letters(password: &str) -> usize {
    password.bytes().filter(u8::is_ascii_uppercase).count()
}

/// Counts the letters in `a`-`z`.
pub fn count_lowercase_letters(password: &str) -> usize {
    password.bytes().filter(u8::is_ascii_lowercase).count()
}

/// Returns `true` if any byte lies outside both ASCII letter ranges.
pub fn has_non_letter(password: &str) -> bool {
    password.bytes().any(|b| !b.is_ascii_alphabetic())
}
