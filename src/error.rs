//! Hard failures: a broken schema or unusable input.
//!
//! These abort a check immediately. Problems with the *data* never show up here;
//! they are collected as [`Violation`](crate::Violation)s instead.

use std::error::Error as StdError;
use std::fmt;

use crate::TypeTag;

/// A schema that cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A schema node with nothing to check.
    Empty,
    /// A leaf token that does not follow the `type|type|...` grammar.
    InvalidToken {
        /// The key the token was declared under, when known.
        key: Option<String>,
        /// The offending token text.
        token: String,
    },
    /// A list schema must contain exactly one element schema.
    AmbiguousList {
        /// Number of elements found.
        len: usize,
    },
    /// A JSON schema node that is neither an object, a one-element array nor a string.
    UnsupportedNode {
        /// What was found instead.
        found: TypeTag,
    },
    /// Schema nesting goes deeper than the allowed limit.
    TooDeep {
        /// The limit that was hit.
        limit: usize,
    },
    /// A leaf comparison was reached without a key to report it under.
    UngovernedLeaf,
    /// Schema text is not valid JSON.
    Json {
        /// Decoder message.
        message: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "schema cannot be empty"),
            Self::InvalidToken {
                key: Some(key),
                token,
            } => write!(f, "invalid type token \"{}\" for key \"{}\"", token, key),
            Self::InvalidToken { key: None, token } => {
                write!(f, "invalid type token \"{}\"", token)
            }
            Self::AmbiguousList { len } => write!(
                f,
                "list schema must hold exactly one element schema, found {}",
                len
            ),
            Self::UnsupportedNode { found } => {
                write!(f, "unsupported schema node of type \"{}\"", found)
            }
            Self::TooDeep { limit } => write!(f, "schema nesting exceeds {} levels", limit),
            Self::UngovernedLeaf => write!(f, "leaf schema reached without a governing key"),
            Self::Json { message } => write!(f, "schema is not valid JSON: {}", message),
        }
    }
}

impl StdError for SchemaError {}

/// A check that could not run to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The entry point got something that is neither a container nor encoded text.
    InvalidInput {
        /// The runtime type that was passed.
        found: TypeTag,
    },
    /// The schema itself is broken.
    Schema(SchemaError),
    /// Data and schema nest deeper than the configured limit.
    DepthExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { found } => write!(
                f,
                "Invalid data format: expected a container or encoded JSON, got \"{}\"",
                found
            ),
            Self::Schema(e) => write!(f, "invalid schema: {}", e),
            Self::DepthExceeded { limit } => {
                write!(f, "check exceeded the maximum depth of {}", limit)
            }
        }
    }
}

impl StdError for CheckError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Schema(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SchemaError> for CheckError {
    fn from(e: SchemaError) -> Self {
        CheckError::Schema(e)
    }
}
