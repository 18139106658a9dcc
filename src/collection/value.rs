//! Comparison semantics for JSON-shaped record values.
//!
//! Records come from a dynamically typed world, so the combinators need a
//! fixed notion of truthiness, equality and ordering:
//!
//! - [`is_truthy`]: `null`, `false`, `0` and `""` are falsy; arrays and
//!   objects are truthy even when empty. A missing field is falsy too, which
//!   callers express with `Option::is_some_and(is_truthy)`.
//! - [`strictly_equal`]: type-preserving equality. Numbers compare by value
//!   (`1 == 1.0`); arrays and objects compare structurally.
//! - [`loosely_equal`]: coercing equality, with a missing value equal to
//!   `null`. An array or object compared with a primitive is first reduced to
//!   its primitive text (`[1, 2]` is `"1,2"`, any object is
//!   `"[object Object]"`); two composites still compare structurally.
//! - [`natural_order`]: a total order, consistent with [`strictly_equal`].
//!
//! [`LooseEq`] carries loose equality to dedup keys of any type.

use std::cmp::Ordering;

use serde_json::{Number, Value};

/// Returns `true` if `value` is truthy.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!(1)));
/// assert!(is_truthy(&json!([])));
/// assert!(!is_truthy(&json!("")));
/// assert!(!is_truthy(&json!(null)));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Type-preserving equality.
///
/// Values of different JSON types are never equal.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::strictly_equal;
/// use serde_json::json;
///
/// assert!(strictly_equal(&json!(1), &json!(1.0)));
/// assert!(strictly_equal(&json!({"a": [1, 2]}), &json!({"a": [1, 2]})));
/// assert!(!strictly_equal(&json!(1), &json!("1")));
/// ```
pub fn strictly_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(left), Value::Bool(right)) => left == right,
        (Value::Number(left), Value::Number(right)) => {
            compare_numbers(left, right) == Ordering::Equal
        }
        (Value::String(left), Value::String(right)) => left == right,
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(left, right)| strictly_equal(left, right))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, left)| {
                    right
                        .get(key)
                        .is_some_and(|right| strictly_equal(left, right))
                })
        }
        _ => false,
    }
}

/// Coercing equality; `None` stands for a missing value.
///
/// A missing value and `null` are equal to each other and to nothing else.
/// Booleans compare as `0`/`1`, and numeric strings compare with numbers.
/// An array or object compared with a primitive is reduced to its primitive
/// text first; two arrays or two objects compare structurally.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::loosely_equal;
/// use serde_json::json;
///
/// assert!(loosely_equal(Some(&json!(1)), Some(&json!("1"))));
/// assert!(loosely_equal(Some(&json!(true)), Some(&json!(1))));
/// assert!(loosely_equal(None, Some(&json!(null))));
/// assert!(!loosely_equal(None, Some(&json!(0))));
/// assert!(loosely_equal(Some(&json!(true)), Some(&json!([1]))));
/// assert!(loosely_equal(Some(&json!("1,2")), Some(&json!([1, 2]))));
/// ```
pub fn loosely_equal(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (None | Some(Value::Null), None | Some(Value::Null)) => true,
        (None | Some(Value::Null), _) | (_, None | Some(Value::Null)) => false,
        (Some(left), Some(right)) => loosely_equal_defined(left, right),
    }
}

fn loosely_equal_defined(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(number), Value::String(text))
        | (Value::String(text), Value::Number(number)) => {
            string_to_number(text).is_some_and(|parsed| Some(parsed) == number.as_f64())
        }
        (Value::Bool(flag), other) | (other, Value::Bool(flag))
            if !matches!(other, Value::Bool(_)) =>
        {
            loosely_equal_defined(&Value::from(u8::from(*flag)), other)
        }
        (composite @ (Value::Array(_) | Value::Object(_)), primitive)
        | (primitive, composite @ (Value::Array(_) | Value::Object(_)))
            if !matches!(primitive, Value::Array(_) | Value::Object(_)) =>
        {
            loosely_equal_defined(&Value::String(primitive_text(composite)), primitive)
        }
        _ => strictly_equal(left, right),
    }
}

fn primitive_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number_text(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(primitive_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e21 => {
            format!("{float:.0}")
        }
        _ => number.to_string(),
    }
}

/// Loose equality as a key relation, used by [`unique`](fn@super::unique) and
/// [`unique_by`](fn@super::unique_by).
///
/// For [`Value`] this is [`loosely_equal`], so `1`, `1.0` and `"1"` are one
/// key. Other primitives use their own `==`.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::LooseEq;
/// use serde_json::json;
///
/// assert!(json!(1).loosely_eq(&json!("1")));
/// assert!(Some(json!(1.0)).loosely_eq(&Some(json!(1))));
/// assert!(!3_i32.loosely_eq(&4));
/// ```
pub trait LooseEq {
    /// Returns `true` if `self` and `other` are the same key.
    fn loosely_eq(&self, other: &Self) -> bool;
}

impl LooseEq for Value {
    fn loosely_eq(&self, other: &Self) -> bool {
        loosely_equal(Some(self), Some(other))
    }
}

impl<T: LooseEq + ?Sized> LooseEq for &T {
    fn loosely_eq(&self, other: &Self) -> bool {
        T::loosely_eq(self, other)
    }
}

impl<T: LooseEq> LooseEq for Option<T> {
    fn loosely_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.loosely_eq(right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: LooseEq> LooseEq for [T] {
    fn loosely_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(left, right)| left.loosely_eq(right))
    }
}

impl<T: LooseEq> LooseEq for Vec<T> {
    fn loosely_eq(&self, other: &Self) -> bool {
        self.as_slice().loosely_eq(other.as_slice())
    }
}

macro_rules! impl_loose_eq_for_primitives {
    ($($type:ty),* $(,)?) => {
        $(
            impl LooseEq for $type {
                fn loosely_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_loose_eq_for_primitives!(
    (), bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

fn string_to_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Some(0.0)
    } else {
        trimmed.parse().ok()
    }
}

/// Total order over values.
///
/// Same-typed values compare naturally: numbers by value, strings by code
/// point, `false < true`, arrays lexicographically and objects by their
/// entries sorted by key. Different types compare by rank:
/// `null < bool < number < string < array < object`.
///
/// Returns [`Ordering::Equal`] exactly when [`strictly_equal`] holds.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use fieldwise::collection::natural_order;
/// use serde_json::json;
///
/// assert_eq!(natural_order(&json!(2), &json!(10)), Ordering::Less);
/// assert_eq!(natural_order(&json!("b"), &json!("a")), Ordering::Greater);
/// assert_eq!(natural_order(&json!(true), &json!("a")), Ordering::Less);
/// ```
pub fn natural_order(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(left), Value::Bool(right)) => left.cmp(right),
        (Value::Number(left), Value::Number(right)) => compare_numbers(left, right),
        (Value::String(left), Value::String(right)) => left.cmp(right),
        (Value::Array(left), Value::Array(right)) => left
            .iter()
            .zip(right)
            .map(|(left, right)| natural_order(left, right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| left.len().cmp(&right.len())),
        (Value::Object(left), Value::Object(right)) => {
            let mut left_entries: Vec<_> = left.iter().collect();
            let mut right_entries: Vec<_> = right.iter().collect();
            left_entries.sort_by(|a, b| a.0.cmp(b.0));
            right_entries.sort_by(|a, b| a.0.cmp(b.0));
            left_entries
                .iter()
                .zip(&right_entries)
                .map(|((left_key, left), (right_key, right))| {
                    left_key.cmp(right_key).then_with(|| natural_order(left, right))
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| left_entries.len().cmp(&right_entries.len()))
        }
        _ => type_rank(left).cmp(&type_rank(right)),
    }
}

const fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn compare_numbers(left: &Number, right: &Number) -> Ordering {
    if let (Some(left), Some(right)) = (left.as_i64(), right.as_i64()) {
        return left.cmp(&right);
    }
    if let (Some(left), Some(right)) = (left.as_u64(), right.as_u64()) {
        return left.cmp(&right);
    }
    // JSON numbers are never NaN
    match (left.as_f64(), right.as_f64()) {
        (Some(left), Some(right)) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}
