//! Dot-delimited field paths into nested records.
//!
//! A [`FieldPath`] is parsed once from a string such as `"owner.address.city"`
//! and then resolved against any number of records. Resolution fans out over
//! arrays: when a segment lands on an array, every element of that array
//! (and of arrays nested inside it) is visited for the remaining segments.
//!
//! Resolution only reads; it never creates intermediate structure.
//!
//! # Examples
//!
//! ```rust
//! use fieldwise::collection::FieldPath;
//! use serde_json::json;
//!
//! let path = FieldPath::parse("orders.total").unwrap();
//! let customer = json!({"orders": [{"total": 10}, {"total": 25}]});
//!
//! assert_eq!(path.resolve(&customer), vec![&json!(10), &json!(25)]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use smallvec::SmallVec;
use thiserror::Error;

use super::value::strictly_equal;
use crate::optional::Maybe;

/// Errors raised while parsing a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldPathError {
    /// The path string was empty.
    #[error("field path is empty")]
    Empty,
    /// A segment between two dots (or at either end) was empty.
    #[error("field path segment {position} is empty")]
    EmptySegment {
        /// Zero-based index of the empty segment.
        position: usize,
    },
}

/// A validated, pre-split field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: SmallVec<[String; 4]>,
}

impl FieldPath {
    /// Parses a dot-delimited path.
    ///
    /// # Errors
    ///
    /// Returns [`FieldPathError::Empty`] for an empty string and
    /// [`FieldPathError::EmptySegment`] when any segment is empty
    /// (`"a..b"`, `".a"`, `"a."`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwise::collection::{FieldPath, FieldPathError};
    ///
    /// assert_eq!(FieldPath::parse("a.b").unwrap().segments(), ["a", "b"]);
    /// assert_eq!(
    ///     FieldPath::parse("a..b"),
    ///     Err(FieldPathError::EmptySegment { position: 1 })
    /// );
    /// ```
    pub fn parse(path: &str) -> Result<Self, FieldPathError> {
        if path.is_empty() {
            tracing::debug!("rejected empty field path");
            return Err(FieldPathError::Empty);
        }
        let segments = path
            .split('.')
            .enumerate()
            .map(|(position, segment)| {
                if segment.is_empty() {
                    tracing::debug!(path, position, "rejected field path with empty segment");
                    Err(FieldPathError::EmptySegment { position })
                } else {
                    Ok(segment.to_owned())
                }
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { segments })
    }

    /// Returns the path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns `true` if the path has more than one segment.
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    /// Returns every value the path reaches in `record`, in traversal order.
    ///
    /// The final value is returned as-is even when it is an array; only
    /// intermediate arrays are fanned out.
    pub fn resolve<'a>(&self, record: &'a Value) -> Vec<&'a Value> {
        let Some((last, _)) = self.segments.split_last() else {
            return Vec::new();
        };
        self.holders(record)
            .into_iter()
            .filter_map(|holder| holder.get(last.as_str()))
            .collect()
    }

    /// Finds the innermost record whose final field strictly equals `value`.
    ///
    /// For a single-segment path this is `record` itself. For a nested path
    /// it is the nested record that holds the matching leaf, which may be an
    /// element of an array somewhere along the path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwise::collection::FieldPath;
    /// use fieldwise::optional::Maybe;
    /// use serde_json::json;
    ///
    /// let path = FieldPath::parse("lines.sku").unwrap();
    /// let order = json!({"lines": [{"sku": "a", "qty": 1}, {"sku": "b", "qty": 2}]});
    ///
    /// let line = path.find_match(&order, &json!("b"));
    /// assert_eq!(line, Maybe::some(&json!({"sku": "b", "qty": 2})));
    /// ```
    pub fn find_match<'a>(&self, record: &'a Value, value: &Value) -> Maybe<&'a Value> {
        let Some((last, _)) = self.segments.split_last() else {
            return Maybe::NONE;
        };
        Maybe::from_nullable(self.holders(record).into_iter().find(|holder| {
            holder
                .get(last.as_str())
                .is_some_and(|leaf| strictly_equal(leaf, value))
        }))
    }

    /// Returns `true` if any value the path reaches in `record` strictly
    /// equals `value`. A missing field never matches.
    pub fn matches(&self, record: &Value, value: &Value) -> bool {
        self.find_match(record, value).is_defined()
    }

    /// Collects the records that should carry the final segment.
    fn holders<'a>(&self, record: &'a Value) -> Vec<&'a Value> {
        let Some((_, parents)) = self.segments.split_last() else {
            return Vec::new();
        };
        parents.iter().fold(vec![record], |frontier, segment| {
            let mut next = Vec::new();
            for node in frontier {
                if let Some(child) = node.get(segment.as_str()) {
                    fan_out(child, &mut next);
                }
            }
            next
        })
    }
}

fn fan_out<'a>(node: &'a Value, into: &mut Vec<&'a Value>) {
    match node {
        Value::Array(elements) => {
            for element in elements {
                fan_out(element, into);
            }
        }
        _ => into.push(node),
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.segments.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Self::parse(path)
    }
}

impl TryFrom<&str> for FieldPath {
    type Error = FieldPathError;

    fn try_from(path: &str) -> Result<Self, Self::Error> {
        Self::parse(path)
    }
}
