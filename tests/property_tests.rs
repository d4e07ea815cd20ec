//! Property-based tests for the policy checks.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use pwd_policy::{
    CharacterClasses, PasswordPolicy, PolicyEvaluation, check_password, count_lowercase_letters, count_uppercase_letters, fold,
    longest_consecutive_identical_characters, run_lengths, similar_to_word,
};

prop_compose! {
    fn ascii_password(max_len: usize)(s in proptest::collection::vec(0x20u8..0x7f, 0..max_len)) -> String {
        String::from_utf8(s).unwrap_or_default()
    }
}

proptest! {
    #[test]
    fn run_lengths_sum_to_password_length(pwd in ascii_password(40)) {
        let runs = run_lengths(&pwd);
        prop_assert_eq!(runs.iter().sum::<usize>(), pwd.len());
        prop_assert!(runs.iter().all(|&r| r >= 1));
    }

    #[test]
    fn longest_run_is_max_of_runs(pwd in ascii_password(40)) {
        let longest = longest_consecutive_identical_characters(&pwd);
        prop_assert_eq!(longest == 0, pwd.is_empty());
        prop_assert_eq!(longest, run_lengths(&pwd).into_iter().max().unwrap_or(0));
    }

    #[test]
    fn repeating_a_char_sets_run_length(c in 0x21u8..0x7f, n in 1usize..20) {
        let pwd = String::from_utf8(vec![c; n]).unwrap_or_default();
        prop_assert_eq!(longest_consecutive_identical_characters(&pwd), n);
    }

    #[test]
    fn class_counts_match_scan(pwd in ascii_password(40)) {
        let classes = CharacterClasses::scan(&pwd);
        prop_assert_eq!(classes.has_upper, count_uppercase_letters(&pwd) > 0);
        prop_assert_eq!(classes.has_lower, count_lowercase_letters(&pwd) > 0);
        let letters = count_uppercase_letters(&pwd) + count_lowercase_letters(&pwd);
        prop_assert_eq!(classes.has_non_letter, letters < pwd.len());
    }

    #[test]
    fn fold_is_idempotent(pwd in ascii_password(40)) {
        let once = fold(&pwd);
        let twice = fold(&String::from_utf8(once.clone()).unwrap_or_default());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn password_is_similar_to_itself(pwd in ascii_password(40)) {
        prop_assert!(similar_to_word(&pwd, &pwd));
    }

    #[test]
    fn long_padding_exempts_similarity(word in "[a-z]{1,10}", pad in "[A-Z0-9]{5,12}") {
        let pwd = format!("{pad}{word}");
        prop_assert!(!similar_to_word(&word, &pwd));
    }

    #[test]
    fn short_padding_is_similar(word in "[a-z]{1,10}", pad in "[A-Z#]{0,4}") {
        let pwd = format!("{pad}{word}");
        prop_assert!(similar_to_word(&word, &pwd));
    }

    #[test]
    fn dictionary_only_adds_violations(pwd in ascii_password(40), word in "[a-z]{1,6}") {
        if !check_password::<&str>(&pwd, &[]) {
            prop_assert!(!check_password(&pwd, &[word]));
        }
    }

    #[test]
    fn password_listed_in_dictionary_is_rejected(pwd in ascii_password(40)) {
        prop_assert!(!check_password(&pwd, &[pwd.clone()]));
    }
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PasswordPolicy>();
    assert_send_sync::<PolicyEvaluation>();
};

#[test]
fn concurrent_checks_share_dictionary() {
    let dictionary = vec!["password".to_string(), "dragon".to_string()];
    let passwords = ["Str0ngP@ss", "Pa$$word1", "Dr4g0n!!", "Dragon#12", "GoodOne#7"];

    let expected: Vec<bool> = passwords
        .iter()
        .map(|pwd| check_password(pwd, &dictionary))
        .collect();

    let shared = &dictionary;
    let results: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = passwords
            .iter()
            .map(|pwd| scope.spawn(move || check_password(pwd, shared)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("checker thread panicked"))
            .collect()
    });

    assert_eq!(results, expected);
    assert_eq!(results, vec![true, false, true, false, true]);
}
