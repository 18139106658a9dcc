//! Query combinators over ordered sequences of records.
//!
//! Records are JSON-shaped [`serde_json::Value`]s. Generic combinators
//! ([`find`], [`filter`], [`first`], [`unique`], ...) work on any element
//! type; field-based ones ([`filter_by_field`], [`sort_by_field`],
//! [`is_subset_by_field`], ...) work on records.
//!
//! - [`Sequence`]: inputs that may or may not be lists
//! - [`Verdict`]: three-way predicate results for [`find`] and [`filter`]
//! - [`FieldPath`]: parsed dot paths with fan-out over arrays
//! - [`SortOrder`] and [`compare_by_field`]: field sorting with a tie-break
//!
//! Inputs that are not lists never raise an error; they produce an empty
//! vector or [`Maybe::Absent`](crate::optional::Maybe::Absent). Panics from
//! caller-supplied closures propagate unchanged.
//!
//! # Examples
//!
//! ```rust
//! use fieldwise::collection::{
//!     find_by_field, sort_by_field, unique_by_field, Direction, FieldPath, SortOrder,
//! };
//! use serde_json::json;
//!
//! let mut tasks = json!([
//!     {"id": 1, "priority": 2, "owner": {"team": "core"}},
//!     {"id": 2, "priority": 5, "owner": {"team": "web"}},
//!     {"id": 3, "priority": 2, "owner": {"team": "core"}},
//! ]);
//!
//! let team = FieldPath::parse("owner.team").unwrap();
//! let web_task = find_by_field(&tasks, &team, &json!("web"), Direction::Forward)
//!     .map(|task| task["id"].clone());
//! assert_eq!(web_task.get_or(json!(null)), json!(2));
//!
//! sort_by_field(&mut tasks, "priority", SortOrder::Descending, Some("id"));
//! assert_eq!(tasks[0]["id"], json!(2));
//!
//! assert_eq!(unique_by_field(&tasks, "priority").len(), 2);
//! ```

mod field;
mod path;
mod search;
mod sequence;
mod sort;
mod unique;
mod value;

pub use field::{
    filter_by_field, find_by_field, find_index_by_field_and_value, is_subset_by_field,
};
pub use path::{FieldPath, FieldPathError};
pub use search::{
    Direction, Verdict, filter, filter_map, filter_ref, find, find_map, find_ref, first, last,
};
pub use sequence::{Sequence, SequenceMut, push_all, values_of};
pub use sort::{SortOrder, compare_by_field, sort_by_field, sorted_by_field};
pub use unique::{unique, unique_by, unique_by_field};
pub use value::{LooseEq, is_truthy, loosely_equal, natural_order, strictly_equal};
