//! Optional values without a null sentinel.
//!
//! This module provides [`Maybe`], a closed two-variant type that is either
//! [`Maybe::Present`] holding a value or [`Maybe::Absent`]. Callers chain
//! [`Maybe::map`], [`Maybe::and_then`] and [`Maybe::fold`] instead of
//! checking for null at every step.
//!
//! # Nullable interop
//!
//! Rust's [`Option`] plays the role of a "nullable" value here: `None` is the
//! raw absent sentinel. [`Maybe::from_nullable`] collapses that sentinel into
//! [`Maybe::Absent`], and [`Maybe::flat_map`] hands back a raw nullable
//! result. There is no way to store "an explicit absent sentinel" inside a
//! [`Maybe`].
//!
//! # Examples
//!
//! ```rust
//! use fieldwise::optional::Maybe;
//!
//! let port = Maybe::some("8080")
//!     .map_nullable(|text| text.parse::<u16>().ok())
//!     .get_or(80);
//! assert_eq!(port, 8080);
//!
//! let missing: Maybe<u16> = Maybe::from_nullable(None);
//! assert_eq!(missing.to_string(), "None");
//! ```

mod maybe;

pub use maybe::Maybe;
