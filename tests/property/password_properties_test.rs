//! Property-based tests for PasswordEngine output.
//!
//! These tests verify length, class coverage and alphabet membership of
//! generated passwords for arbitrary lengths and class selections.

use passgen::services::password_engine::{
    PasswordEngine, PasswordEngineTrait, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE,
};
use passgen::types::options::PasswordOptions;
use proptest::prelude::*;

/// Strategy for option sets with at least one class enabled.
fn arb_options() -> impl Strategy<Value = PasswordOptions> {
    (4usize..=64, any::<[bool; 4]>())
        .prop_filter("at least one class", |(_, classes)| {
            classes.iter().any(|c| *c)
        })
        .prop_map(|(length, [upper, lower, numbers, symbols])| PasswordOptions {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
        })
}

fn enabled_classes(options: &PasswordOptions) -> Vec<&'static str> {
    let mut classes = Vec::new();
    if options.include_uppercase {
        classes.push(UPPERCASE);
    }
    if options.include_lowercase {
        classes.push(LOWERCASE);
    }
    if options.include_numbers {
        classes.push(DIGITS);
    }
    if options.include_symbols {
        classes.push(SYMBOLS);
    }
    classes
}

// **Property: exact length**
//
// *For any* length in [4, 64] and non-empty class selection, the password
// has exactly the requested number of characters.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn generated_password_has_requested_length(options in arb_options()) {
        let engine = PasswordEngine::new();
        let password = engine.generate(&options).expect("system randomness available");
        prop_assert_eq!(password.chars().count(), options.length);
    }
}

// **Property: class coverage and alphabet membership**
//
// *For any* option set, every enabled class appears at least once and no
// character falls outside the union of the enabled classes.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn generated_password_covers_enabled_classes(options in arb_options()) {
        let engine = PasswordEngine::new();
        let password = engine.generate(&options).expect("system randomness available");
        let classes = enabled_classes(&options);

        for class in &classes {
            prop_assert!(
                password.chars().any(|c| class.contains(c)),
                "password {:?} is missing a character from {:?}",
                password,
                class
            );
        }

        for c in password.chars() {
            prop_assert!(
                classes.iter().any(|class| class.contains(c)),
                "character {:?} is outside the enabled alphabet",
                c
            );
        }
    }

    #[test]
    fn charset_size_matches_enabled_union(options in arb_options()) {
        let engine = PasswordEngine::new();
        let expected: usize = enabled_classes(&options)
            .iter()
            .map(|class| class.chars().count())
            .sum();
        prop_assert_eq!(engine.charset_size(&options), expected);
    }
}
