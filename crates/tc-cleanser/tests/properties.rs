//! Property tests for the cleansing pipeline.

use proptest::prelude::*;
use tc_cleanser::{AbuseSet, Cleanser, SlangMap};

fn cleanser() -> Cleanser {
    // Keys use characters the generators below never produce.
    let slang = SlangMap::from_pairs([("g_p", "enggak papa")]);
    let abuse = AbuseSet::new(["b@ngsat"]).unwrap();
    Cleanser::new(slang, abuse)
}

proptest! {
    #[test]
    fn clean_is_total(text in any::<String>()) {
        let _ = cleanser().clean(&text);
    }

    #[test]
    fn clean_has_no_uppercase_ascii(text in any::<String>()) {
        let out = cleanser().clean(&text);
        prop_assert!(!out.bytes().any(|b| b.is_ascii_uppercase()));
    }

    #[test]
    fn clean_leaves_only_alnum_and_single_spaces(text in "[ -~\n]{0,64}") {
        let out = cleanser().clean(&text);
        prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn clean_is_idempotent_on_alnum_text(text in "[a-zA-Z0-9 ]{0,64}") {
        let c = cleanser();
        let once = c.clean(&text);
        prop_assert_eq!(c.clean(&once), once);
    }

    #[test]
    fn clean_column_preserves_row_count(values in prop::collection::vec("[a-z ]{0,16}", 0..20)) {
        let c = cleanser();
        let out = c.clean_values(&values);
        prop_assert_eq!(out.len(), values.len());
        for (v, o) in values.iter().zip(&out) {
            prop_assert_eq!(o, &c.clean(v));
        }
    }
}
