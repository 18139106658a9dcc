//! Integration tests for sort_by_field, sorted_by_field and compare_by_field.

use std::cmp::Ordering;

use fieldwise::collection::{SortOrder, compare_by_field, sort_by_field, sorted_by_field};
use rstest::rstest;
use serde_json::{Value, json};

fn ids(records: &[Value]) -> Vec<i64> {
    records.iter().filter_map(|record| record["id"].as_i64()).collect()
}

#[rstest]
fn test_tie_break_orders_equal_primary_values() {
    let mut records = vec![json!({"p": 1, "id": 2}), json!({"p": 1, "id": 1})];
    sort_by_field(&mut records, "p", SortOrder::Ascending, Some("id"));
    assert_eq!(records, vec![json!({"p": 1, "id": 1}), json!({"p": 1, "id": 2})]);
}

#[rstest]
fn test_without_tie_break_equal_values_keep_input_order() {
    let mut records = vec![
        json!({"p": 1, "id": 2}),
        json!({"p": 1, "id": 1}),
        json!({"p": 0.5, "id": 3}),
    ];
    sort_by_field(&mut records, "p", SortOrder::Ascending, None);
    assert_eq!(ids(&records), vec![3, 2, 1]);
}

#[rstest]
fn test_missing_field_sorts_after_truthy_value() {
    let mut records = vec![json!({"id": 1}), json!({"id": 2, "p": 3})];
    sort_by_field(&mut records, "p", SortOrder::Ascending, None);
    assert_eq!(ids(&records), vec![2, 1]);
}

#[rstest]
fn test_two_falsy_records_are_equal() {
    let left = json!({"id": 1});
    let right = json!({"id": 2, "p": 0});
    assert_eq!(compare_by_field(&left, &right, "p", None), Ordering::Equal);
    assert_eq!(compare_by_field(&right, &left, "p", None), Ordering::Equal);
}

#[rstest]
#[case(SortOrder::Ascending, vec![4, 2, 3, 1])]
#[case(SortOrder::Descending, vec![1, 3, 2, 4])]
fn test_numbers_with_falsy_tail(#[case] order: SortOrder, #[case] expected: Vec<i64>) {
    let mut records = vec![
        json!({"id": 1, "p": null}),
        json!({"id": 2, "p": 10}),
        json!({"id": 3, "p": 20}),
        json!({"id": 4, "p": 2}),
    ];
    sort_by_field(&mut records, "p", order, None);
    assert_eq!(ids(&records), expected);
}

#[rstest]
fn test_strings_sort_by_code_point() {
    let mut records = json!([
        {"id": 1, "name": "beta"},
        {"id": 2, "name": "Alpha"},
        {"id": 3, "name": "alpha"},
    ]);
    sort_by_field(&mut records, "name", SortOrder::Ascending, None);
    let sorted = records.as_array().map(|items| ids(items)).unwrap_or_default();
    assert_eq!(sorted, vec![2, 3, 1]);
}

#[rstest]
fn test_tie_break_applies_falsy_rules() {
    let mut records = vec![
        json!({"id": 1, "p": 1}),
        json!({"id": 2, "p": 1, "rank": 5}),
    ];
    sort_by_field(&mut records, "p", SortOrder::Ascending, Some("rank"));
    assert_eq!(ids(&records), vec![2, 1]);
}

#[rstest]
fn test_descending_tie_break_is_also_reversed() {
    let mut records = vec![json!({"p": 1, "id": 1}), json!({"p": 1, "id": 2})];
    sort_by_field(&mut records, "p", SortOrder::Descending, Some("id"));
    assert_eq!(ids(&records), vec![2, 1]);
}

#[rstest]
fn test_sort_returns_the_mutated_list() {
    let mut records = vec![json!({"id": 2, "p": 2}), json!({"id": 1, "p": 1})];
    let returned = sort_by_field(&mut records, "p", SortOrder::Ascending, None);
    assert_eq!(ids(returned), vec![1, 2]);
}

#[rstest]
fn test_sorted_by_field_leaves_input_untouched() {
    let records = json!([{"id": 2, "p": 2}, {"id": 1, "p": 1}]);
    let sorted = sorted_by_field(&records, "p", SortOrder::Ascending, None);
    assert_eq!(ids(&sorted), vec![1, 2]);
    assert_eq!(records[0]["id"], json!(2));
}

#[rstest]
fn test_sorted_by_field_on_non_list_is_empty() {
    assert!(sorted_by_field(&json!("text"), "p", SortOrder::Ascending, None).is_empty());
}

#[rstest]
fn test_mixed_types_sort_by_type_rank() {
    let mut records = vec![
        json!({"id": 1, "p": "text"}),
        json!({"id": 2, "p": 7}),
        json!({"id": 3, "p": true}),
        json!({"id": 4, "p": {"k": 1}}),
        json!({"id": 5, "p": [1]}),
    ];
    sort_by_field(&mut records, "p", SortOrder::Ascending, None);
    assert_eq!(ids(&records), vec![3, 2, 1, 5, 4]);
}
