//! # fieldwise
//!
//! An Optional type and collection-query combinators for JSON-shaped records.
//!
//! ## Overview
//!
//! - **Optional**: [`Maybe`](optional::Maybe), a value that is present or
//!   absent, with `map`, `and_then`, `fold` and friends instead of null checks
//! - **Collection**: find, filter, field-path lookup, deduplication, subset
//!   testing and tie-break sorting over ordered sequences, returning `Maybe`
//!   wherever a result can be absent
//!
//! ## Feature Flags
//!
//! - `optional`: the `Maybe` type
//! - `collection`: collection combinators (implies `optional`)
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fieldwise::prelude::*;
//! use serde_json::json;
//!
//! let people = json!([{"name": "ann", "age": 31}, {"name": "bob", "age": 27}]);
//! let name = FieldPath::parse("name").unwrap();
//!
//! let age = find_by_field(&people, &name, &json!("bob"), Direction::Forward)
//!     .map_nullable(|person| person["age"].as_u64())
//!     .get_or(0);
//! assert_eq!(age, 27);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use fieldwise::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "optional")]
    pub use crate::optional::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;
}

#[cfg(feature = "optional")]
pub mod optional;

#[cfg(feature = "collection")]
pub mod collection;
