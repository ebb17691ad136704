//! Validation type for accumulating violations
//!
//! `Validation` is the outcome of checking one piece of data against one schema
//! node. Unlike `Result`, two failures combine into one failure holding the errors
//! of both, which is what lets the matcher keep walking sibling keys after the
//! first mismatch.
//!
//! # Examples
//!
//! ```
//! use schemacheck::{Validation, Violation, Violations};
//!
//! let ok = Validation::<(), Violations>::success(());
//! let missing = Validation::<(), _>::failure(Violations::from(Violation::missing_key("id")));
//!
//! let merged = Validation::all([ok, missing]);
//! assert!(merged.is_failure());
//! ```

use crate::Semigroup;

/// A check outcome that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Check if the validation succeeded
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if the validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Borrow the accumulated errors, if any
    ///
    /// ```
    /// use schemacheck::Validation;
    ///
    /// let v = Validation::<(), _>::failure(vec!["bad"]);
    /// assert_eq!(v.errors(), Some(&vec!["bad"]));
    /// ```
    #[inline]
    pub fn errors(&self) -> Option<&E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(e) => Some(e),
        }
    }

    /// Convert into a `Result`
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Transform the success value
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<E: Semigroup> Validation<(), E> {
    /// Fold a sequence of unit validations into one, keeping every error.
    ///
    /// An empty sequence is a success.
    ///
    /// ```
    /// use schemacheck::Validation;
    ///
    /// let merged = Validation::all([
    ///     Validation::failure(vec!["a"]),
    ///     Validation::success(()),
    ///     Validation::failure(vec!["b"]),
    /// ]);
    /// assert_eq!(merged, Validation::Failure(vec!["a", "b"]));
    /// ```
    pub fn all<I>(validations: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        validations
            .into_iter()
            .fold(Validation::Success(()), Semigroup::combine)
    }
}

impl<T, E: Semigroup> Semigroup for Validation<T, E> {
    /// Failures merge their errors; between two successes the right one wins.
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Validation::Success(_), Validation::Success(v)) => Validation::Success(v),
            (Validation::Failure(e), Validation::Success(_))
            | (Validation::Success(_), Validation::Failure(e)) => Validation::Failure(e),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
        }
    }
}
