//! Searching and filtering ordered sequences.
//!
//! Two primitives do the work:
//!
//! - a boolean predicate ([`find_ref`], [`filter_ref`]) that selects elements,
//! - a mapping step ([`find_map`], [`filter_map`]) that selects and transforms
//!   in one pass.
//!
//! [`find`] and [`filter`] combine them through [`Verdict`]: a predicate may
//! keep the element, skip it, or replace it with a different value. This lets
//! one closure act as a filter-and-transform step.
//!
//! # Examples
//!
//! ```rust
//! use fieldwise::collection::{find, Direction, Verdict};
//! use fieldwise::optional::Maybe;
//!
//! let words = ["apple", "banana", "cherry"];
//! let found = find(&words, |word| {
//!     if word.starts_with('b') { Verdict::Replace("B!") } else { Verdict::Skip }
//! }, Direction::Forward);
//! assert_eq!(found, Maybe::some("B!"));
//! ```

use crate::optional::Maybe;

use super::sequence::Sequence;

/// Scan direction for searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// From the first element to the last.
    #[default]
    Forward,
    /// From the last element to the first.
    Reverse,
}

impl Direction {
    /// Returns [`Direction::Reverse`] when `reverse` is `true`.
    pub const fn from_reverse(reverse: bool) -> Self {
        if reverse { Self::Reverse } else { Self::Forward }
    }
}

/// Outcome of a three-way predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict<T> {
    /// The element itself matches.
    Keep,
    /// Not a match; keep scanning.
    Skip,
    /// A match, represented by the carried value instead of the element.
    Replace(T),
}

impl<T> Verdict<T> {
    /// Returns `true` unless this is [`Verdict::Skip`].
    pub const fn is_match(&self) -> bool {
        !matches!(self, Self::Skip)
    }

    /// Turns the verdict for `element` into the value a search yields.
    pub fn resolve(self, element: &T) -> Option<T>
    where
        T: Clone,
    {
        match self {
            Self::Keep => Some(element.clone()),
            Self::Skip => None,
            Self::Replace(value) => Some(value),
        }
    }
}

impl<T> From<bool> for Verdict<T> {
    fn from(matched: bool) -> Self {
        if matched { Self::Keep } else { Self::Skip }
    }
}

/// `None` skips; `Some(value)` replaces the element with `value`.
impl<T> From<Option<T>> for Verdict<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Skip, Self::Replace)
    }
}

impl<T> From<Maybe<T>> for Verdict<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_nullable().into()
    }
}

/// Returns the first `Some` produced by `function`, scanning in `direction`.
///
/// A non-list or empty input yields [`Maybe::Absent`] without calling
/// `function`.
pub fn find_map<'a, L, U, F>(list: &'a L, mut function: F, direction: Direction) -> Maybe<U>
where
    L: Sequence + ?Sized,
    F: FnMut(&'a L::Item) -> Option<U>,
{
    let Some(items) = list.as_sequence() else {
        return Maybe::NONE;
    };
    let found = match direction {
        Direction::Forward => items.iter().find_map(&mut function),
        Direction::Reverse => items.iter().rev().find_map(&mut function),
    };
    Maybe::from_nullable(found)
}

/// Returns the first element satisfying `predicate`, scanning in `direction`.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::{find_ref, Direction};
/// use fieldwise::optional::Maybe;
///
/// let numbers = [1, 4, 6, 7];
/// assert_eq!(find_ref(&numbers, |n| n % 2 == 0, Direction::Forward), Maybe::some(&4));
/// assert_eq!(find_ref(&numbers, |n| n % 2 == 0, Direction::Reverse), Maybe::some(&6));
/// ```
pub fn find_ref<'a, L, P>(list: &'a L, mut predicate: P, direction: Direction) -> Maybe<&'a L::Item>
where
    L: Sequence + ?Sized,
    P: FnMut(&L::Item) -> bool,
{
    find_map(list, |item| predicate(item).then_some(item), direction)
}

/// Returns the first match under the three-way [`Verdict`] convention.
///
/// [`Verdict::Keep`] yields the element itself, [`Verdict::Replace`] yields
/// the carried value, and [`Verdict::Skip`] continues the scan.
pub fn find<L, P>(list: &L, mut predicate: P, direction: Direction) -> Maybe<L::Item>
where
    L: Sequence + ?Sized,
    L::Item: Clone,
    P: FnMut(&L::Item) -> Verdict<L::Item>,
{
    find_map(list, |item| predicate(item).resolve(item), direction)
}

/// Collects every `Some` produced by `function`, in order.
pub fn filter_map<'a, L, U, F>(list: &'a L, function: F) -> Vec<U>
where
    L: Sequence + ?Sized,
    F: FnMut(&'a L::Item) -> Option<U>,
{
    list.as_sequence()
        .map(|items| items.iter().filter_map(function).collect())
        .unwrap_or_default()
}

/// Collects every element satisfying `predicate`, in order.
pub fn filter_ref<'a, L, P>(list: &'a L, mut predicate: P) -> Vec<&'a L::Item>
where
    L: Sequence + ?Sized,
    P: FnMut(&L::Item) -> bool,
{
    filter_map(list, |item| predicate(item).then_some(item))
}

/// Collects matches under the three-way [`Verdict`] convention.
///
/// Kept elements are cloned; replaced elements contribute the carried value.
///
/// # Examples
///
/// ```rust
/// use fieldwise::collection::{filter, Verdict};
///
/// let doubled_evens = filter(&[1, 2, 3, 4], |n| {
///     if n % 2 == 0 { Verdict::Replace(n * 2) } else { Verdict::Skip }
/// });
/// assert_eq!(doubled_evens, vec![4, 8]);
/// ```
pub fn filter<L, P>(list: &L, mut predicate: P) -> Vec<L::Item>
where
    L: Sequence + ?Sized,
    L::Item: Clone,
    P: FnMut(&L::Item) -> Verdict<L::Item>,
{
    filter_map(list, |item| predicate(item).resolve(item))
}

/// Returns the first element, or [`Maybe::Absent`] for an empty or
/// undefined list.
pub fn first<L>(list: &L) -> Maybe<&L::Item>
where
    L: Sequence + ?Sized,
{
    Maybe::from_nullable(list.as_sequence().and_then(<[L::Item]>::first))
}

/// Returns the last element, or [`Maybe::Absent`] for an empty or
/// undefined list.
pub fn last<L>(list: &L) -> Maybe<&L::Item>
where
    L: Sequence + ?Sized,
{
    Maybe::from_nullable(list.as_sequence().and_then(<[L::Item]>::last))
}
