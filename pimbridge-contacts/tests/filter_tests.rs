use pimbridge_contacts::{build_filter, case_insensitive_pattern};
use pimbridge_store::{MatchOperator, NativeField};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use regex::Regex;

// ── Pattern construction ─────────────────────────────────────────

#[test]
fn pattern_spells_out_each_case() {
    assert_eq!(case_insensitive_pattern("bob"), ".*[bB][oO][bB].*");
    assert_eq!(case_insensitive_pattern("NoRm"), ".*[nN][oO][rR][mM].*");
}

#[test]
fn caseless_characters_still_get_a_class() {
    assert_eq!(case_insensitive_pattern("a1 "), ".*[aA][11][  ].*");
}

#[test]
fn class_metacharacters_are_escaped() {
    assert_eq!(case_insensitive_pattern("a-b"), r".*[aA][\-\-][bB].*");
    assert_eq!(case_insensitive_pattern("]"), r".*[\]\]].*");
}

// ── Filter expressions ───────────────────────────────────────────

#[test]
fn name_search_covers_three_slots() {
    let filter = build_filter(&["name"], Some("bob")).unwrap();
    let leaves = filter.leaves();
    assert_eq!(
        leaves,
        vec![
            (NativeField::Title, MatchOperator::Regex, ".*[bB][oO][bB].*"),
            (NativeField::FirstName, MatchOperator::Regex, ".*[bB][oO][bB].*"),
            (NativeField::LastName, MatchOperator::Regex, ".*[bB][oO][bB].*"),
        ]
    );
}

#[test]
fn leaves_follow_caller_path_order() {
    let filter = build_filter(&["emails", "id"], Some("x")).unwrap();
    let fields: Vec<_> = filter.leaves().into_iter().map(|(f, _, _)| f).collect();
    assert_eq!(
        fields,
        vec![
            NativeField::Email1,
            NativeField::Email2,
            NativeField::Email3,
            NativeField::Uid,
        ]
    );
}

#[test]
fn empty_or_missing_search_builds_nothing() {
    assert!(build_filter(&["name"], None).is_none());
    assert!(build_filter(&["name"], Some("")).is_none());
}

#[test]
fn unmapped_paths_are_skipped() {
    assert!(build_filter(&["nickname", "ims"], Some("bob")).is_none());
    let filter = build_filter(&["nickname", "note", ""], Some("bob")).unwrap();
    assert_eq!(filter.leaves().len(), 1);
}

#[test]
fn no_fields_builds_nothing() {
    let none: [&str; 0] = [];
    assert!(build_filter(&none, Some("bob")).is_none());
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    /// The compiled pattern matches any value containing the search text,
    /// in any letter case.
    #[test]
    fn pattern_matches_containing_value_in_any_case(
        needle in "[a-zA-Z0-9 .@-]{1,12}",
        prefix in "[a-z ]{0,8}",
        suffix in "[a-z ]{0,8}",
    ) {
        let re = Regex::new(&format!("^(?:{})$", case_insensitive_pattern(&needle))).unwrap();
        let upper = format!("{prefix}{}{suffix}", needle.to_uppercase());
        let lower = format!("{prefix}{}{suffix}", needle.to_lowercase());
        prop_assert!(re.is_match(&upper));
        prop_assert!(re.is_match(&lower));
    }

    /// One leaf per mapped slot of the requested paths.
    #[test]
    fn leaf_count_matches_table(paths in prop::sample::subsequence(
        vec!["name", "phoneNumbers", "emails", "addresses", "note", "urls", "bogus"], 1..=7,
    )) {
        let expected: usize = paths.iter().map(|p| pimbridge_contacts::field_map::lookup(p).len()).sum();
        let leaves = build_filter(&paths, Some("q")).map(|f| f.leaves().len()).unwrap_or(0);
        prop_assert_eq!(leaves, expected);
    }
}
