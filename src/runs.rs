//! Runs of consecutive identical characters.

/// Returns the length of every maximal run of identical bytes, left to right.
///
/// The lengths always sum to `password.len()`.
pub fn run_lengths(password: &str) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut bytes = password.bytes();
    let Some(mut prev) = bytes.next() else {
        return runs;
    };

    let mut current = 1;
    for b in bytes {
        if b == prev {
            current += 1;
        } else {
            runs.push(current);
            current = 1;
            prev = b;
        }
    }
    runs.push(current);
    runs
}

/// Length of the longest run of consecutive identical characters.
///
/// `0` for an empty password, `1` when no adjacent characters repeat.
/// Comparison is case-sensitive: `"Aa"` is two runs of one.
pub fn longest_consecutive_identical_characters(password: &str) -> usize {
    let bytes = password.as_bytes();
    if bytes.is_empty() {
        return 0;
    }

    let mut longest = 1;
    let mut current = 1;
    for pair in bytes.windows(2) {
        if pair[0] == pair[1] {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }
    longest
}
