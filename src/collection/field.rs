//! Field-based lookups over lists of records.
//!
//! Every function here takes a parsed [`FieldPath`]. A single-segment path
//! compares `record[field]` with the wanted value; a nested path resolves
//! through intermediate records and arrays (see [`FieldPath::resolve`]) and
//! matches when any reached leaf is strictly equal to the wanted value.
//!
//! Results are always the outer list elements. Callers that need the nested
//! record holding the matched leaf can ask [`FieldPath::find_match`].

use serde_json::Value;

use crate::optional::Maybe;

use super::path::FieldPath;
use super::search::{Direction, filter_ref, find_ref};
use super::sequence::Sequence;

/// Returns the records whose value at `path` strictly equals `value`.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::{filter_by_field, FieldPath};
/// use serde_json::json;
///
/// let records = json!([{"a": 1}, {"a": 2}, {"a": 3}]);
/// let path = FieldPath::parse("a").unwrap();
/// assert_eq!(filter_by_field(&records, &path, &json!(2)), vec![&json!({"a": 2})]);
/// ```
pub fn filter_by_field<'a, L>(list: &'a L, path: &FieldPath, value: &Value) -> Vec<&'a Value>
where
    L: Sequence<Item = Value> + ?Sized,
{
    filter_ref(list, |record| path.matches(record, value))
}

/// Returns the first (or, with [`Direction::Reverse`], last) record whose
/// value at `path` strictly equals `value`.
///
/// A record without the field never matches.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::{find_by_field, Direction, FieldPath};
/// use fieldwise::optional::Maybe;
/// use serde_json::json;
///
/// let records = json!([{"id": 1, "v": "a"}, {"id": 2, "v": "b"}, {"id": 3, "v": "a"}]);
/// let path = FieldPath::parse("v").unwrap();
///
/// let last = find_by_field(&records, &path, &json!("a"), Direction::Reverse);
/// assert_eq!(last, Maybe::some(&json!({"id": 3, "v": "a"})));
/// ```
pub fn find_by_field<'a, L>(
    list: &'a L,
    path: &FieldPath,
    value: &Value,
    direction: Direction,
) -> Maybe<&'a Value>
where
    L: Sequence<Item = Value> + ?Sized,
{
    find_ref(list, |record| path.matches(record, value), direction)
}

/// Returns the position of the record [`find_by_field`] finds.
///
/// The position is located by identity, so with duplicate records the index
/// of the exact element found is reported.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::{find_index_by_field_and_value, Direction, FieldPath};
/// use fieldwise::optional::Maybe;
/// use serde_json::json;
///
/// let records = json!([{"a": 1}, {"a": 1}]);
/// let path = FieldPath::parse("a").unwrap();
///
/// let forward = find_index_by_field_and_value(&records, &path, &json!(1), Direction::Forward);
/// let reverse = find_index_by_field_and_value(&records, &path, &json!(1), Direction::Reverse);
/// assert_eq!((forward, reverse), (Maybe::some(0), Maybe::some(1)));
/// ```
pub fn find_index_by_field_and_value<L>(
    list: &L,
    path: &FieldPath,
    value: &Value,
    direction: Direction,
) -> Maybe<usize>
where
    L: Sequence<Item = Value> + ?Sized,
{
    let Some(records) = list.as_sequence() else {
        return Maybe::NONE;
    };
    find_by_field(records, path, value, direction).map_nullable(|found| {
        records
            .iter()
            .position(|record| std::ptr::eq(record, found))
    })
}

/// Returns `true` if every record of `subset` has its value at `path`
/// present, at the same path, in some record of `base`.
///
/// Returns `false` when either input is not a list or `base` has fewer
/// records than `subset`. An empty `subset` is a subset of any list. A
/// `subset` record with no value at `path` is never found. Order and
/// multiplicity of `subset` do not matter beyond the length check.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::{is_subset_by_field, FieldPath};
/// use serde_json::json;
///
/// let path = FieldPath::parse("a").unwrap();
/// let base = json!([{"a": 1}, {"a": 2}, {"a": 3}]);
///
/// assert!(is_subset_by_field(&base, &json!([{"a": 1}, {"a": 2}]), &path));
/// assert!(!is_subset_by_field(&base, &json!([{"a": 1}, {"a": 4}]), &path));
/// ```
pub fn is_subset_by_field<B, S>(base: &B, subset: &S, path: &FieldPath) -> bool
where
    B: Sequence<Item = Value> + ?Sized,
    S: Sequence<Item = Value> + ?Sized,
{
    let (Some(base), Some(subset)) = (base.as_sequence(), subset.as_sequence()) else {
        tracing::trace!(%path, "subset check on a non-list input");
        return false;
    };
    if base.len() < subset.len() {
        tracing::trace!(
            %path,
            base_len = base.len(),
            subset_len = subset.len(),
            "subset check short-circuited by length"
        );
        return false;
    }
    subset.iter().all(|record| {
        path.resolve(record)
            .into_iter()
            .any(|wanted| find_by_field(base, path, wanted, Direction::Forward).is_defined())
    })
}
