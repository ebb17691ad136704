//! Semigroup trait for merging violation reports
//!
//! Every level of a schema check produces its own report. Reports from sibling
//! keys and nested containers are merged with [`Semigroup::combine`], so the
//! order of discovery is preserved no matter how deep the schema goes.
//!
//! # Laws
//!
//! `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use schemacheck::{Semigroup, Violation, Violations};
//!
//! let first = Violations::from(Violation::missing_key("id"));
//! let second = Violations::from(Violation::missing_key("name"));
//!
//! let merged = first.combine(second);
//! assert_eq!(merged.len(), 2);
//! assert_eq!(merged.to_string(), "Key \"id\" not found,\nKey \"name\" not found");
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes both sides by value; the left side's items always come
/// first in the result.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
