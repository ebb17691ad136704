//! Violations: non-fatal mismatches between data and schema
//!
//! A check never stops at the first problem. Each mismatch becomes one
//! [`Violation`], and all of them are gathered, in the order they were found,
//! into a [`Violations`] report.
//!
//! The `Display` forms are stable and are what [`SchemaChecker::violations`]
//! returns, joined with `",\n"`.
//!
//! [`SchemaChecker::violations`]: crate::SchemaChecker::violations

use std::fmt;
use std::slice;
use std::vec;

use crate::{Semigroup, TypeTag};

/// Reason recorded when an empty container is not allowed to stand for null.
pub const NULL_NOT_ALLOWED: &str = "null value not allowed";
/// Reason recorded when a container was expected but a scalar was found.
pub const NOT_A_CONTAINER: &str = "expected a container";

/// One mismatch between data and schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The schema declares a key the data does not have.
    MissingKey {
        /// The missing key.
        key: String,
    },
    /// A value has the wrong runtime type.
    TypeMismatch {
        /// The key holding the value.
        key: String,
        /// What the value actually is.
        actual: TypeTag,
        /// The token the schema asked for, as written.
        expected: String,
    },
    /// The data is empty, undecodable, or has the wrong shape.
    InvalidData {
        /// The key under which the problem was found, if any.
        key: Option<String>,
        /// Human readable reason.
        reason: String,
    },
}

impl Violation {
    /// A key declared by the schema is absent.
    pub fn missing_key(key: impl Into<String>) -> Self {
        Violation::MissingKey { key: key.into() }
    }

    /// A value under `key` is of type `actual` but the schema asked for `expected`.
    pub fn type_mismatch(
        key: impl Into<String>,
        actual: TypeTag,
        expected: impl Into<String>,
    ) -> Self {
        Violation::TypeMismatch {
            key: key.into(),
            actual,
            expected: expected.into(),
        }
    }

    /// Generic invalid-data violation with no key.
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Violation::InvalidData {
            key: None,
            reason: reason.into(),
        }
    }

    /// An empty container where the schema does not allow null.
    pub fn null_not_allowed(key: Option<&str>) -> Self {
        Violation::InvalidData {
            key: key.map(str::to_string),
            reason: NULL_NOT_ALLOWED.to_string(),
        }
    }

    /// A scalar where the schema describes a container.
    pub fn not_a_container(key: Option<&str>, found: TypeTag) -> Self {
        Violation::InvalidData {
            key: key.map(str::to_string),
            reason: format!("{}, got \"{}\"", NOT_A_CONTAINER, found),
        }
    }

    /// The key this violation concerns, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Violation::MissingKey { key } | Violation::TypeMismatch { key, .. } => Some(key),
            Violation::InvalidData { key, .. } => key.as_deref(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingKey { key } => write!(f, "Key \"{}\" not found", key),
            Violation::TypeMismatch {
                key,
                actual,
                expected,
            } => write!(
                f,
                "Unexpected type of key: \"{}\". Expected: \"{}\", got: \"{}\"",
                key, expected, actual
            ),
            Violation::InvalidData {
                key: Some(key),
                reason,
            } => write!(f, "Invalid data for key \"{}\": {}", key, reason),
            Violation::InvalidData { key: None, reason } => write!(f, "Invalid data: {}", reason),
        }
    }
}

/// Ordered collection of violations from one check.
///
/// # Examples
///
/// ```
/// use schemacheck::{TypeTag, Violation, Violations};
///
/// let mut report = Violations::new();
/// report.push(Violation::missing_key("name"));
/// report.push(Violation::type_mismatch("id", TypeTag::String, "integer"));
///
/// assert_eq!(
///     report.to_string(),
///     "Key \"name\" not found,\nUnexpected type of key: \"id\". Expected: \"integer\", got: \"string\""
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Separator used by the joined `Display` form.
    pub const SEPARATOR: &'static str = ",\n";

    /// An empty report.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a violation.
    pub fn push(&mut self, violation: Violation) {
        #[cfg(feature = "tracing")]
        tracing::trace!(%violation, "violation recorded");
        self.0.push(violation);
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in discovery order.
    pub fn iter(&self) -> slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Borrow as a slice.
    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }

    /// Take the underlying vector.
    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl From<Violation> for Violations {
    fn from(violation: Violation) -> Self {
        let mut report = Violations::new();
        report.push(violation);
        report
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Semigroup for Violations {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(Self::SEPARATOR)?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}
