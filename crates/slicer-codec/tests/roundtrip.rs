//! Round-trip properties for the identifier encodings.

use proptest::prelude::{Strategy, prop};
use proptest::{prop_assert, prop_assert_eq, proptest};
use slicer_codec::{new_own_id, parse_old_own_id, parse_own_id};

/// Path components free of the encoding separators (`~|~`, `_|~`) and the
/// old format's dash disambiguator.
fn component() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{1,12}"
}

fn components() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(component(), 1..6)
}

fn old_own_id(parts: &[String]) -> String {
    format!("~|{}", parts.join("_|~"))
}

proptest! {
    #[test]
    fn new_encoding_round_trips(parts in components()) {
        let encoded = new_own_id(&parts);
        prop_assert_eq!(parse_own_id(&encoded), parts);
    }

    #[test]
    fn old_encoding_round_trips(parts in components()) {
        let encoded = old_own_id(&parts);
        prop_assert_eq!(parse_old_own_id(&encoded), parts);
    }

    #[test]
    fn dispatch_follows_the_terminator(parts in components()) {
        // new-format parsing is chosen iff the id ends with the terminator
        let new_encoded = new_own_id(&parts);
        prop_assert!(new_encoded.ends_with("~|"));
        let old_encoded = old_own_id(&parts);
        prop_assert!(!old_encoded.ends_with("~|"));
        prop_assert_eq!(parse_own_id(&old_encoded), parse_old_own_id(&old_encoded));
    }
}
