//! Property-based tests for tool ID parsing invariants.

use proptest::prelude::*;
use toolspan_model::ToolId;

// Segments never contain ':'; that is what makes Display/parse a bijection.
const SEGMENT: &str = "[a-zA-Z0-9_.-]{1,12}";

proptest! {
    #[test]
    fn parse_never_panics(s in ".*") {
        let _ = ToolId::parse(&s);
    }

    #[test]
    fn well_formed_ids_round_trip(
        namespace in proptest::option::of(SEGMENT),
        name in SEGMENT,
        version in proptest::option::of(SEGMENT),
    ) {
        // A version without a namespace is not expressible as an ID string.
        prop_assume!(namespace.is_some() || version.is_none());

        let id = ToolId::new(namespace, name, version);
        let parsed = ToolId::parse(&id.to_string()).expect("well-formed ID parses");
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn parsed_ids_have_no_empty_segments(s in ".*") {
        if let Ok(id) = ToolId::parse(&s) {
            prop_assert!(!id.name.is_empty());
            if let Some(ns) = &id.namespace {
                prop_assert!(!ns.is_empty());
            }
            if let Some(v) = &id.version {
                prop_assert!(!v.is_empty());
            }
        }
    }

    #[test]
    fn more_than_two_colons_is_rejected(
        a in SEGMENT, b in SEGMENT, c in SEGMENT, d in SEGMENT,
    ) {
        let id = format!("{a}:{b}:{c}:{d}");
        prop_assert!(ToolId::parse(&id).is_err());
    }
}
