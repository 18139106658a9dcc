//! Maybe type - a value that is either present or absent.
//!
//! `Maybe<T>` is the crate's replacement for a null sentinel. It differs from
//! [`Option`] mostly in its combinator vocabulary: `get_or_else`, `fold`
//! (case analysis) and the nullable-returning `flat_map`.
//!
//! # Examples
//!
//! ```rust
//! use fieldwise::optional::Maybe;
//!
//! let present = Maybe::some(21);
//! assert_eq!(present.map(|x| x * 2), Maybe::some(42));
//!
//! let absent: Maybe<i32> = Maybe::none();
//! let described = absent.fold(|x| format!("got {x}"), || "nothing".to_string());
//! assert_eq!(described, "nothing");
//! ```

use std::fmt;

/// A value of type `T`, or nothing.
///
/// The absent state is a single value, [`Maybe::NONE`]. Construction from a
/// nullable input goes through [`Maybe::from_nullable`], which never produces
/// a "present wrapper holding nothing".
///
/// # Type Parameters
///
/// * `T` - The type of the wrapped value
///
/// # Examples
///
/// ```rust
/// use fieldwise::optional::Maybe;
///
/// let name = Maybe::some("ada".to_string());
/// assert!(name.is_defined());
/// assert_eq!(name.get(), Some(&"ada".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Maybe<T> {
    /// No value.
    Absent,
    /// A value is present.
    Present(T),
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);

impl<T> Maybe<T> {
    /// The absent value.
    pub const NONE: Self = Self::Absent;

    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    ///
    /// A `T` can never be the absent sentinel, so this always yields
    /// [`Maybe::Present`]. Use [`Maybe::from_nullable`] for inputs that may
    /// be missing.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns the absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::Absent
    }

    /// Wraps a nullable value, collapsing `None` into [`Maybe::Absent`].
    ///
    /// "Explicitly stored absent" and "truly absent" are indistinguishable
    /// afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwise::optional::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some(1)), Maybe::some(1));
    /// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::NONE);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the wrapped value.
    ///
    /// When absent this returns the raw sentinel `None`; callers are expected
    /// to check [`Maybe::is_defined`] first.
    #[inline]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Converts into a nullable value, consuming the `Maybe`.
    #[inline]
    pub fn into_nullable(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Returns the wrapped value or `fallback`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwise::optional::Maybe;
    ///
    /// assert_eq!(Maybe::some(3).get_or(0), 3);
    /// assert_eq!(Maybe::NONE.get_or(0), 0);
    /// ```
    #[inline]
    pub fn get_or(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback,
        }
    }

    /// Returns the wrapped value, or the result of `producer` when absent.
    ///
    /// `producer` is only invoked for an absent value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwise::optional::Maybe;
    ///
    /// let absent: Maybe<String> = Maybe::none();
    /// assert_eq!(absent.get_or_else(|| "fallback".to_string()), "fallback");
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, producer: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => producer(),
        }
    }

    /// Takes the value out, leaving [`Maybe::Absent`] in its place.
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Absent)
    }

    // =========================================================================
    // Reference Adapters
    // =========================================================================

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Converts `&mut Maybe<T>` into `Maybe<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Returns an iterator over zero or one borrowed values.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.get().into_iter()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a present value.
    ///
    /// Total: an absent value maps to [`Maybe::Absent`] without calling
    /// `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwise::optional::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).map(|x| x + 1), Maybe::some(3));
    /// assert_eq!(Maybe::<i32>::NONE.map(|x| x + 1), Maybe::NONE);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies a nullable-returning `function` to a present value.
    ///
    /// A `None` result re-collapses to [`Maybe::Absent`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwise::optional::Maybe;
    ///
    /// let parsed = Maybe::some("x").map_nullable(|text| text.parse::<i32>().ok());
    /// assert_eq!(parsed, Maybe::NONE);
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Present(value) => Maybe::from_nullable(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Hands a present value to `function` and returns its raw result.
    ///
    /// Unlike [`Maybe::map`], the result is not re-wrapped: a present value
    /// yields `Some(function(value))`, whatever shape `function` returns, and
    /// an absent value yields the raw sentinel `None` rather than
    /// [`Maybe::Absent`]. Use [`Maybe::and_then`] to stay inside `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwise::optional::Maybe;
    ///
    /// let nested = Maybe::some(2).flat_map(|x| Maybe::some(x * 10));
    /// assert_eq!(nested, Some(Maybe::some(20)));
    ///
    /// let absent: Option<Maybe<i32>> = Maybe::<i32>::NONE.flat_map(Maybe::some);
    /// assert_eq!(absent, None);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Some(function(value)),
            Self::Absent => None,
        }
    }

    /// Chains a `Maybe`-returning computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwise::optional::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::NONE };
    /// assert_eq!(Maybe::some(8).and_then(half).and_then(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).and_then(half).and_then(half), Maybe::NONE);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Keeps a present value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(value) => Self::Present(value),
            Self::Absent => alternative(),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Maybe` by applying one of two functions.
    ///
    /// `on_present` receives the value; `on_absent` is called with nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwise::optional::Maybe;
    ///
    /// let label = Maybe::some(7).fold(|n| format!("#{n}"), || "-".to_string());
    /// assert_eq!(label, "#7");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_present: F, on_absent: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Returns `[value]` when present, otherwise an empty vector.
    #[inline]
    pub fn to_vec(self) -> Vec<T> {
        match self {
            Self::Present(value) => vec![value],
            Self::Absent => Vec::new(),
        }
    }
}

impl<T: Clone> Maybe<&T> {
    /// Maps `Maybe<&T>` to `Maybe<T>` by cloning the value.
    #[inline]
    pub fn cloned(self) -> Maybe<T> {
        self.map(Clone::clone)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Some({value})"),
            Self::Absent => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From / IntoIterator Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_nullable()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_nullable().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Maybe<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from_nullable)
    }
}
