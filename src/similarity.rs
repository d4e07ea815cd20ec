//! Fuzzy dictionary-word matching.
//!
//! Both the word and the password are folded to a canonical form before a
//! plain contiguous substring search:
//!
//! - ASCII letters are lowercased
//! - `$` becomes `s`
//! - `0` becomes `o`
//! - `1` becomes `l`
//!
//! Folding is symmetric, so `$` in a word also matches `s` in a password.

/// Default number of extra characters a password may carry over the word
/// length and still be considered a variant of that word.
pub const SIMILARITY_LENGTH_SLACK: usize = 4;

fn fold_byte(b: u8) -> u8 {
    match b {
        b'$' => b's',
        b'0' => b'o',
        b'1' => b'l',
        _ => b.to_ascii_lowercase(),
    }
}

/// Folds a string to the canonical form used for similarity checks.
pub fn fold(s: &str) -> Vec<u8> {
    s.bytes().map(fold_byte).collect()
}

/// Returns `true` if `password` is too similar to `word`.
///
/// Uses the default slack of [`SIMILARITY_LENGTH_SLACK`].
pub fn similar_to_word(word: &str, password: &str) -> bool {
    similar_to_word_within(word, password, SIMILARITY_LENGTH_SLACK)
}

/// Returns `true` if the folded password contains the folded word and the
/// password is at most `slack` characters longer than the word.
///
/// Passwords longer than `word.len() + slack` are never flagged, even when
/// they contain the word. An empty word is contained in every password.
pub fn similar_to_word_within(word: &str, password: &str, slack: usize) -> bool {
    if password.len() > word.len().saturating_add(slack) {
        return false;
    }
    if word.is_empty() {
        return true;
    }
    if word.len() > password.len() {
        return false;
    }

    let word = fold(word);
    fold(password)
        .windows(word.len())
        .any(|window| window == word.as_slice())
}
