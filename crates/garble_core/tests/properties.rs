use garble_core::{is_valid, tokenize, validity_score, WordListDictionary};
use proptest::prelude::*;

fn dictionary() -> WordListDictionary {
    WordListDictionary::from_words(["the", "a", "cat", "dog", "runs", "blue", "xyz"])
}

proptest! {
    #[test]
    fn tokens_are_nonempty_lowercase_ascii_words(text in any::<String>()) {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.bytes().all(|b| b.is_ascii_lowercase()), "bad token {token:?}");
        }
    }

    #[test]
    fn tokenizing_is_repeatable(text in any::<String>()) {
        prop_assert_eq!(tokenize(&text), tokenize(&text));
    }

    #[test]
    fn score_stays_in_unit_interval(text in "[a-zA-Z0-9 .,!_-]{0,64}") {
        let score = validity_score(&text, &dictionary());
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn lower_thresholds_are_easier(
        text in "(the|cat|dog|qq|zz|runs|blue|[0-9]+| |,)*",
        t1 in 0.0f64..=1.0,
        t2 in 0.0f64..=1.0,
    ) {
        let dict = dictionary();
        let (low, high) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        if is_valid(&text, &dict, high) {
            prop_assert!(is_valid(&text, &dict, low));
        }
    }

    #[test]
    fn letterless_text_is_never_valid(text in "[0-9 .,;:!?#()\\[\\]_-]*", threshold in -1.0f64..=1.0) {
        prop_assert_eq!(validity_score(&text, &dictionary()), 0.0);
        prop_assert!(!is_valid(&text, &dictionary(), threshold));
    }
}
