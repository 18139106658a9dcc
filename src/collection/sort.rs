//! Sorting records by a field with a single tie-break field.
//!
//! [`compare_by_field`] is the comparator; [`sort_by_field`] applies it in
//! place and [`sorted_by_field`] returns a sorted copy. Records whose field is
//! missing or falsy (see [`is_truthy`](super::is_truthy)) are all equal to one
//! another and sort after every record with a truthy value in ascending
//! order. Sorting is stable.

use std::cmp::Ordering;

use serde_json::Value;

use super::sequence::{Sequence, SequenceMut};
use super::value::{is_truthy, natural_order, strictly_equal};

/// Direction of a field sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Returns [`SortOrder::Ascending`] when `ascending` is `true`.
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending { Self::Ascending } else { Self::Descending }
    }

    /// Orients an ascending comparison result.
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Compares two records by `field`, falling back to `tie_break` once.
///
/// 1. Both values missing or falsy: equal.
/// 2. Only `right` missing or falsy: `left` comes first.
/// 3. Only `left` missing or falsy: `right` comes first.
/// 4. Strictly equal values: compare by `tie_break` under the same rules,
///    without a further tie-break; equal when there is none.
/// 5. Otherwise the [`natural_order`] of the two values.
///
/// The result is ascending; use [`SortOrder::apply`] to flip it.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fieldwise::collection::compare_by_field;
/// use serde_json::json;
///
/// let left = json!({"p": 1, "id": 2});
/// let right = json!({"p": 1, "id": 1});
/// assert_eq!(compare_by_field(&left, &right, "p", None), Ordering::Equal);
/// assert_eq!(compare_by_field(&left, &right, "p", Some("id")), Ordering::Greater);
/// assert_eq!(compare_by_field(&json!({}), &right, "p", None), Ordering::Greater);
/// ```
pub fn compare_by_field(
    left: &Value,
    right: &Value,
    field: &str,
    tie_break: Option<&str>,
) -> Ordering {
    match (truthy_field(left, field), truthy_field(right, field)) {
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(left_value), Some(right_value)) if strictly_equal(left_value, right_value) => {
            tie_break.map_or(Ordering::Equal, |tie_break| {
                compare_by_field(left, right, tie_break, None)
            })
        }
        (Some(left_value), Some(right_value)) => natural_order(left_value, right_value),
    }
}

fn truthy_field<'a>(record: &'a Value, field: &str) -> Option<&'a Value> {
    record.get(field).filter(|value| is_truthy(value))
}

/// Sorts the records of `list` in place by `field` and returns `list`.
///
/// A `list` that is not a list is returned untouched.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::{sort_by_field, SortOrder};
/// use serde_json::json;
///
/// let mut records = json!([{"p": 1, "id": 2}, {"p": 1, "id": 1}, {"p": 0, "id": 3}]);
/// sort_by_field(&mut records, "p", SortOrder::Ascending, Some("id"));
/// assert_eq!(records, json!([{"p": 1, "id": 1}, {"p": 1, "id": 2}, {"p": 0, "id": 3}]));
/// ```
pub fn sort_by_field<'a, L>(
    list: &'a mut L,
    field: &str,
    order: SortOrder,
    tie_break: Option<&str>,
) -> &'a mut L
where
    L: SequenceMut<Item = Value> + ?Sized,
{
    if let Some(records) = list.as_sequence_mut() {
        tracing::trace!(field, ?order, ?tie_break, len = records.len(), "sorting records by field");
        records.sort_by(|left, right| order.apply(compare_by_field(left, right, field, tie_break)));
    }
    list
}

/// Returns a sorted copy of `list`, leaving the input untouched.
///
/// A non-list input yields an empty vector.
pub fn sorted_by_field<L>(
    list: &L,
    field: &str,
    order: SortOrder,
    tie_break: Option<&str>,
) -> Vec<Value>
where
    L: Sequence<Item = Value> + ?Sized,
{
    let mut records = list.as_sequence().map(<[Value]>::to_vec).unwrap_or_default();
    sort_by_field(&mut records, field, order, tie_break);
    records
}
