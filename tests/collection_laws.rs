//! Property-based tests for the collection combinators.
//!
//! - `filter` with boolean verdicts agrees with `filter_ref`
//! - `find` agrees with the head of `filter`, and reverse `find` with its tail
//! - `sorted_by_field` is an ordered permutation of its input
//! - `unique` is idempotent and never grows the input
//! - a list is a subset of itself by any field

use std::cmp::Ordering;

use fieldwise::collection::{
    Direction, FieldPath, SortOrder, Verdict, compare_by_field, filter, filter_ref, find,
    is_subset_by_field, sorted_by_field, unique, unique_by_field,
};
use fieldwise::optional::Maybe;
use proptest::prelude::*;
use serde_json::{Value, json};

fn field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-5_i64..5).prop_map(Value::from),
        "[a-c]{0,2}".prop_map(Value::from),
    ]
}

fn record() -> impl Strategy<Value = Value> {
    (proptest::option::of(field_value()), proptest::option::of(field_value()))
        .prop_map(|(primary, secondary)| {
            let mut fields = serde_json::Map::new();
            if let Some(primary) = primary {
                fields.insert("p".to_string(), primary);
            }
            if let Some(secondary) = secondary {
                fields.insert("q".to_string(), secondary);
            }
            Value::Object(fields)
        })
}

fn records() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(record(), 0..12)
}

proptest! {
    #[test]
    fn prop_filter_boolean_equals_filter_ref(list in prop::collection::vec(any::<i16>(), 0..32)) {
        let by_verdict = filter(&list, |n| (n % 3 == 0).into());
        let by_reference: Vec<i16> = filter_ref(&list, |n| n % 3 == 0).into_iter().copied().collect();
        prop_assert_eq!(by_verdict, by_reference);
    }

    #[test]
    fn prop_find_is_head_of_filter(list in prop::collection::vec(any::<i16>(), 0..32)) {
        let predicate = |n: &i16| -> Verdict<i16> {
            if n % 4 == 1 { Verdict::Replace(n.wrapping_mul(2)) } else { Verdict::Skip }
        };
        let all = filter(&list, predicate);
        prop_assert_eq!(
            find(&list, predicate, Direction::Forward),
            Maybe::from_nullable(all.first().copied())
        );
        prop_assert_eq!(
            find(&list, predicate, Direction::Reverse),
            Maybe::from_nullable(all.last().copied())
        );
    }

    #[test]
    fn prop_sorted_is_ordered_permutation(list in records(), descending in any::<bool>()) {
        let order = SortOrder::from_ascending(!descending);
        let sorted = sorted_by_field(&list, "p", order, Some("q"));

        prop_assert_eq!(sorted.len(), list.len());
        for window in sorted.windows(2) {
            let ordering = order.apply(compare_by_field(&window[0], &window[1], "p", Some("q")));
            prop_assert_ne!(ordering, Ordering::Greater);
        }
        for element in &list {
            let expected = list.iter().filter(|other| *other == element).count();
            let actual = sorted.iter().filter(|other| *other == element).count();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn prop_comparator_is_antisymmetric(left in record(), right in record()) {
        prop_assert_eq!(
            compare_by_field(&left, &right, "p", Some("q")),
            compare_by_field(&right, &left, "p", Some("q")).reverse()
        );
    }

    #[test]
    fn prop_unique_is_idempotent(list in records()) {
        let once: Vec<Value> = unique(&list).into_iter().cloned().collect();
        let twice: Vec<Value> = unique(&once).into_iter().cloned().collect();
        prop_assert!(once.len() <= list.len());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_unique_by_field_is_idempotent(list in records()) {
        let once: Vec<Value> = unique_by_field(&list, "p").into_iter().cloned().collect();
        let twice: Vec<Value> = unique_by_field(&once, "p").into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_list_with_field_is_subset_of_itself(values in prop::collection::vec(-50_i64..50, 0..16)) {
        let list: Vec<Value> = values.iter().map(|value| json!({"a": value})).collect();
        let path = FieldPath::parse("a").unwrap();
        prop_assert!(is_subset_by_field(&list, &list, &path));
    }
}
