//! Property-based tests for UuidEngine batches.
//!
//! These tests verify batch size, version-4 layout and letter case for
//! arbitrary requested quantities.

use passgen::services::uuid_engine::{UuidEngine, UuidEngineTrait};
use passgen::types::options::UuidOptions;
use proptest::prelude::*;

/// Positions of the hyphens in the 8-4-4-4-12 layout.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

// **Property: batch shape**
//
// *For any* quantity, the batch holds the quantity clamped into [1, 50] and
// every element is a hyphenated version-4, RFC 4122 variant UUID.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn uuid_batch_has_clamped_size_and_v4_layout(
        quantity in 0usize..200,
        uppercase in any::<bool>(),
    ) {
        let engine = UuidEngine::new();
        let uuids = engine
            .generate(&UuidOptions { quantity, uppercase })
            .expect("system randomness available");

        prop_assert_eq!(uuids.len(), quantity.clamp(1, 50));

        for value in &uuids {
            prop_assert_eq!(value.len(), 36);
            for (i, c) in value.chars().enumerate() {
                if HYPHENS.contains(&i) {
                    prop_assert_eq!(c, '-');
                } else {
                    prop_assert!(c.is_ascii_hexdigit());
                    if c.is_ascii_alphabetic() {
                        prop_assert_eq!(c.is_ascii_uppercase(), uppercase);
                    }
                }
            }
            prop_assert_eq!(&value[14..15], "4");
            let variant = value[19..20].to_ascii_lowercase();
            prop_assert!(["8", "9", "a", "b"].contains(&variant.as_str()));

            let parsed = uuid::Uuid::parse_str(value).expect("valid uuid text");
            prop_assert_eq!(parsed.get_version_num(), 4);
        }
    }
}
