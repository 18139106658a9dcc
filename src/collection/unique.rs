//! Order-preserving deduplication.
//!
//! Membership is checked with a linear scan over the keys kept so far, so
//! keys only need an equality relation, not `Hash`. Keys compare with
//! [`LooseEq`]: JSON values that are loosely equal (`1`, `1.0`, `"1"`) are
//! one key.

use serde_json::Value;

use super::sequence::Sequence;
use super::value::{LooseEq, loosely_equal};

fn first_occurrences<'a, T, K, F, E>(items: &'a [T], mut key_of: F, mut same: E) -> Vec<&'a T>
where
    F: FnMut(&'a T) -> K,
    E: FnMut(&K, &K) -> bool,
{
    let mut seen: Vec<K> = Vec::new();
    let mut kept = Vec::new();
    for item in items {
        let key = key_of(item);
        if !seen.iter().any(|existing| same(existing, &key)) {
            seen.push(key);
            kept.push(item);
        }
    }
    kept
}

/// Keeps the first occurrence of each distinct element.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::unique;
/// use serde_json::json;
///
/// assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![&3, &1, &2]);
/// assert_eq!(unique(&json!([1, "1", 1.0, 2])), vec![&json!(1), &json!(2)]);
/// ```
pub fn unique<L>(list: &L) -> Vec<&L::Item>
where
    L: Sequence + ?Sized,
    L::Item: LooseEq,
{
    list.as_sequence()
        .map(|items| {
            first_occurrences(items, |item| item, |left, right| {
                LooseEq::loosely_eq(*left, *right)
            })
        })
        .unwrap_or_default()
}

/// Keeps the first element for each distinct key produced by `key_of`.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::unique_by;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let by_initial = unique_by(&words, |word| word.chars().next());
/// assert_eq!(by_initial, vec![&"apple", &"banana", &"cherry"]);
/// ```
pub fn unique_by<L, K, F>(list: &L, mut key_of: F) -> Vec<&L::Item>
where
    L: Sequence + ?Sized,
    K: LooseEq,
    F: FnMut(&L::Item) -> K,
{
    list.as_sequence()
        .map(|items| first_occurrences(items, |item| key_of(item), K::loosely_eq))
        .unwrap_or_default()
}

/// Keeps the first record for each distinct value of `field`.
///
/// Field values compare with [`loosely_equal`]: `1` and `"1"` are the same
/// key, and all records lacking the field share one key with `null`.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::unique_by_field;
/// use serde_json::json;
///
/// let records = json!([{"id": 1}, {"id": 2}, {"id": 1}]);
/// assert_eq!(unique_by_field(&records, "id"), vec![&json!({"id": 1}), &json!({"id": 2})]);
/// ```
pub fn unique_by_field<'a, L>(list: &'a L, field: &str) -> Vec<&'a Value>
where
    L: Sequence<Item = Value> + ?Sized,
{
    list.as_sequence()
        .map(|items| {
            first_occurrences(
                items,
                |record| record.get(field),
                |left, right| loosely_equal(*left, *right),
            )
        })
        .unwrap_or_default()
}
