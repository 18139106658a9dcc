//! Unit tests for the Maybe type.
//!
//! Covers construction (including the collapsing nullable constructor),
//! extraction with fallbacks, the mapping combinators and their asymmetry,
//! case analysis, and conversions.

use fieldwise::optional::Maybe;
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
#[case(Maybe::some(0), true)]
#[case(Maybe::some(-7), true)]
#[case(Maybe::NONE, false)]
#[case(Maybe::none(), false)]
#[case(Maybe::default(), false)]
fn test_is_defined(#[case] value: Maybe<i32>, #[case] expected: bool) {
    assert_eq!(value.is_defined(), expected);
    assert_eq!(value.is_absent(), !expected);
}

#[rstest]
fn test_from_nullable_sentinel_is_none() {
    let collapsed: Maybe<&str> = Maybe::from_nullable(None);
    assert_eq!(collapsed, Maybe::NONE);

    let converted: Maybe<&str> = None.into();
    assert_eq!(converted, Maybe::NONE);
}

#[rstest]
fn test_from_nullable_present_value() {
    assert_eq!(Maybe::from_nullable(Some("x")), Maybe::some("x"));
}

#[rstest]
fn test_falsy_looking_values_are_still_present() {
    assert!(Maybe::some(false).is_defined());
    assert!(Maybe::some("").is_defined());
    assert!(Maybe::some(serde_json::Value::Null).is_defined());
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn test_get_returns_sentinel_when_absent() {
    assert_eq!(Maybe::some(4).get(), Some(&4));
    assert_eq!(Maybe::<i32>::NONE.get(), None);
}

#[rstest]
fn test_get_or_else_round_trip() {
    let present = Maybe::some("value".to_string());
    assert_eq!(present.get_or_else(|| "fallback".to_string()), "value");

    let absent: Maybe<String> = Maybe::NONE;
    assert_eq!(absent.get_or_else(|| "fallback".to_string()), "fallback");
}

#[rstest]
fn test_get_or_else_does_not_call_producer_when_present() {
    let value = Maybe::some(1).get_or_else(|| panic!("producer must not run"));
    assert_eq!(value, 1);
}

#[rstest]
fn test_get_or_plain_fallback() {
    assert_eq!(Maybe::some(1).get_or(9), 1);
    assert_eq!(Maybe::NONE.get_or(9), 9);
}

// =============================================================================
// Mapping
// =============================================================================

#[rstest]
fn test_map_on_absent_never_calls_function() {
    let result: Maybe<i32> = Maybe::<i32>::NONE.map(|_| panic!("must not run"));
    assert_eq!(result, Maybe::NONE);
}

#[rstest]
fn test_map_nullable_recollapses() {
    let lookup = |key: &str| if key == "known" { Some(1) } else { None };
    assert_eq!(Maybe::some("known").map_nullable(lookup), Maybe::some(1));
    assert_eq!(Maybe::some("other").map_nullable(lookup), Maybe::NONE);
}

#[rstest]
fn test_flat_map_returns_raw_results() {
    let present: Option<String> = Maybe::some(3).flat_map(|n| n.to_string());
    assert_eq!(present, Some("3".to_string()));

    let absent: Option<String> = Maybe::<i32>::NONE.flat_map(|n| n.to_string());
    assert_eq!(absent, None);
}

#[rstest]
fn test_flat_map_does_not_flatten_nested_maybe() {
    let nested = Maybe::some(1).flat_map(|_| Maybe::<i32>::NONE);
    assert_eq!(nested, Some(Maybe::NONE));
}

#[rstest]
fn test_and_then_chains_inside_maybe() {
    let parse = |text: &str| Maybe::from_nullable(text.parse::<i32>().ok());
    assert_eq!(Maybe::some("12").and_then(parse), Maybe::some(12));
    assert_eq!(Maybe::some("x").and_then(parse), Maybe::NONE);
    assert_eq!(Maybe::<&str>::NONE.and_then(parse), Maybe::NONE);
}

#[rstest]
#[case(Maybe::some(4), Maybe::some(4))]
#[case(Maybe::some(3), Maybe::NONE)]
#[case(Maybe::NONE, Maybe::NONE)]
fn test_filter(#[case] value: Maybe<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(value.filter(|n| n % 2 == 0), expected);
}

#[rstest]
fn test_or_else() {
    assert_eq!(Maybe::some(1).or_else(|| Maybe::some(2)), Maybe::some(1));
    assert_eq!(Maybe::NONE.or_else(|| Maybe::some(2)), Maybe::some(2));
}

// =============================================================================
// Case Analysis
// =============================================================================

#[rstest]
fn test_fold_present_calls_on_present() {
    let result = Maybe::some(5).fold(|n| n * 2, || 0);
    assert_eq!(result, 10);
}

#[rstest]
fn test_fold_absent_calls_on_absent() {
    let result = Maybe::<i32>::NONE.fold(|n| n * 2, || -1);
    assert_eq!(result, -1);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn test_to_vec() {
    assert_eq!(Maybe::some('a').to_vec(), vec!['a']);
    assert!(Maybe::<char>::NONE.to_vec().is_empty());
}

#[rstest]
fn test_into_iterator() {
    let collected: Vec<i32> = Maybe::some(1)
        .into_iter()
        .chain(Maybe::NONE)
        .chain(Maybe::some(3))
        .collect();
    assert_eq!(collected, vec![1, 3]);
}

#[rstest]
fn test_option_round_trip() {
    let option: Option<i32> = Maybe::some(8).into();
    assert_eq!(option, Some(8));
    assert_eq!(Maybe::from(option), Maybe::some(8));
}

#[rstest]
fn test_as_ref_and_cloned() {
    let owned = Maybe::some(String::from("text"));
    let borrowed: Maybe<&String> = owned.as_ref();
    assert_eq!(borrowed.cloned(), owned);
}

#[rstest]
fn test_as_mut_updates_in_place() {
    let mut counter = Maybe::some(1);
    if let Maybe::Present(value) = counter.as_mut() {
        *value += 1;
    }
    assert_eq!(counter, Maybe::some(2));
}

#[rstest]
#[case(Maybe::some("abc"), "Some(abc)")]
#[case(Maybe::NONE, "None")]
fn test_display(#[case] value: Maybe<&str>, #[case] expected: &str) {
    assert_eq!(format!("{value}"), expected);
}
