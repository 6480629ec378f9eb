//! Property tests for delimiter selection.

use proptest::prelude::*;

use assetgen::domain::value_objects::{
    choose_delimiter, delimiter_candidates, DelimiterChoice, MAX_DELIMITER_CANDIDATES,
};

/// Payload text seeded with the closing sequences of the first few candidates
fn colliding_payload() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec("[a-z<>()\"!0-9 ]{0,12}", 1..6),
        0usize..8,
    )
        .prop_map(|(chunks, collisions)| {
            let closers: Vec<String> = delimiter_candidates()
                .take(collisions)
                .map(|d| d.close())
                .collect();
            let mut out = String::new();
            for (i, chunk) in chunks.iter().enumerate() {
                out.push_str(chunk);
                if let Some(closer) = closers.get(i % closers.len().max(1)) {
                    out.push_str(closer);
                }
            }
            for closer in &closers {
                out.push_str(closer);
            }
            out
        })
}

fn payload() -> impl Strategy<Value = String> {
    prop_oneof![any::<String>(), colliding_payload()]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The chosen delimiter's closing sequence never occurs in the payload.
    #[test]
    fn property_chosen_closer_is_absent(payload in payload()) {
        if let DelimiterChoice::Chosen(delimiter) = choose_delimiter(&payload) {
            prop_assert!(!payload.contains(&delimiter.close()));
        }
    }

    /// PROPERTY: Selection is a pure function of the payload.
    #[test]
    fn property_selection_is_deterministic(payload in payload()) {
        prop_assert_eq!(choose_delimiter(&payload), choose_delimiter(&payload));
    }

    /// PROPERTY: Every candidate before the chosen one collides.
    #[test]
    fn property_first_free_candidate_wins(payload in colliding_payload()) {
        let DelimiterChoice::Chosen(chosen) = choose_delimiter(&payload) else {
            return Err(TestCaseError::fail("payload with few collisions exhausted candidates"));
        };
        for candidate in delimiter_candidates().take_while(|d| *d != chosen) {
            prop_assert!(payload.contains(&candidate.close()));
        }
    }
}

#[test]
fn exhaustion_requires_every_closer() {
    let all: String = delimiter_candidates().map(|d| d.close()).collect();
    assert_eq!(
        choose_delimiter(&all),
        DelimiterChoice::Exhausted {
            attempts: MAX_DELIMITER_CANDIDATES
        }
    );

    let last = delimiter_candidates().last().unwrap();
    let all_but_last: String = delimiter_candidates()
        .filter(|d| *d != last)
        .map(|d| d.close())
        .collect();
    assert_eq!(
        choose_delimiter(&all_but_last),
        DelimiterChoice::Chosen(last)
    );
}
