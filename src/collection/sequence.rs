//! Inputs that may or may not be lists.
//!
//! Collection functions accept anything implementing [`Sequence`]. A value
//! that is not a list (a JSON scalar or object, or an undefined `None`)
//! reports no elements, and every combinator degrades to an empty or absent
//! result for it instead of failing.

use serde_json::Value;

/// A value that may be an ordered list of `Item`s.
pub trait Sequence {
    /// Element type of the list.
    type Item;

    /// Returns the elements, or `None` when `self` is not a list.
    fn as_sequence(&self) -> Option<&[Self::Item]>;
}

/// A [`Sequence`] whose elements can be reordered in place.
pub trait SequenceMut: Sequence {
    /// Returns the elements mutably, or `None` when `self` is not a list.
    fn as_sequence_mut(&mut self) -> Option<&mut [Self::Item]>;
}

impl<T> Sequence for [T] {
    type Item = T;

    fn as_sequence(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T> SequenceMut for [T] {
    fn as_sequence_mut(&mut self) -> Option<&mut [T]> {
        Some(self)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn as_sequence(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T, const N: usize> SequenceMut for [T; N] {
    fn as_sequence_mut(&mut self) -> Option<&mut [T]> {
        Some(self)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn as_sequence(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T> SequenceMut for Vec<T> {
    fn as_sequence_mut(&mut self) -> Option<&mut [T]> {
        Some(self)
    }
}

/// `None` is an undefined list.
impl<S: Sequence> Sequence for Option<S> {
    type Item = S::Item;

    fn as_sequence(&self) -> Option<&[S::Item]> {
        self.as_ref().and_then(Sequence::as_sequence)
    }
}

impl<S: SequenceMut> SequenceMut for Option<S> {
    fn as_sequence_mut(&mut self) -> Option<&mut [S::Item]> {
        self.as_mut().and_then(SequenceMut::as_sequence_mut)
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn as_sequence(&self) -> Option<&[S::Item]> {
        (**self).as_sequence()
    }
}

/// Only `Value::Array` is a list.
impl Sequence for Value {
    type Item = Self;

    fn as_sequence(&self) -> Option<&[Self]> {
        self.as_array().map(Vec::as_slice)
    }
}

impl SequenceMut for Value {
    fn as_sequence_mut(&mut self) -> Option<&mut [Self]> {
        self.as_array_mut().map(Vec::as_mut_slice)
    }
}

/// Appends clones of every element of `source` onto `destination`.
///
/// A `source` that is not a list (for example `None`) leaves `destination`
/// untouched. Returns `destination` for chaining.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::push_all;
///
/// let mut numbers = vec![1, 2];
/// push_all(&mut numbers, &[3, 4]).push(5);
/// assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
///
/// push_all(&mut numbers, &None::<Vec<i32>>);
/// assert_eq!(numbers.len(), 5);
/// ```
pub fn push_all<'a, T, S>(destination: &'a mut Vec<T>, source: &S) -> &'a mut Vec<T>
where
    T: Clone,
    S: Sequence<Item = T> + ?Sized,
{
    if let Some(items) = source.as_sequence() {
        destination.extend_from_slice(items);
    }
    destination
}

/// Returns the own property values of an object in enumeration order.
///
/// Anything other than an object yields an empty vector.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::values_of;
/// use serde_json::json;
///
/// let by_id = json!({"b": {"id": "b"}, "a": {"id": "a"}});
/// assert_eq!(values_of(&by_id), vec![&json!({"id": "b"}), &json!({"id": "a"})]);
/// assert!(values_of(&json!([1, 2])).is_empty());
/// ```
pub fn values_of(object: &Value) -> Vec<&Value> {
    object
        .as_object()
        .map(|fields| fields.values().collect())
        .unwrap_or_default()
}
