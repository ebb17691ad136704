//! # Schemacheck
//!
//! Check nested JSON data against a small, string-based schema and get back
//! *every* problem in one pass.
//!
//! A schema maps keys to type tokens (`"integer"`, `"string|nullable"`, `"*"`),
//! to nested schemas, or to one-element lists describing homogeneous lists.
//! It is deliberately much smaller than JSON Schema: no ranges, no patterns,
//! no custom validators.
//!
//! ## Quick Example
//!
//! ```rust
//! use schemacheck::{Schema, SchemaChecker};
//!
//! let schema: Schema = r#"{
//!     "id": "integer",
//!     "username": "string",
//!     "avatar": "string|nullable",
//!     "roles": ["string|nullable"],
//!     "enabled": "boolean"
//! }"#
//! .parse()
//! .unwrap();
//!
//! let mut checker = SchemaChecker::new();
//!
//! let ok = checker
//!     .assert_schema(
//!         r#"{"id": 1, "username": "test", "avatar": null, "roles": [], "enabled": true}"#,
//!         &schema,
//!     )
//!     .unwrap();
//! assert!(ok);
//!
//! let ok = checker
//!     .assert_schema(
//!         r#"{"id": "1", "username": "test", "roles": ["ADMIN"], "enabled": true}"#,
//!         &schema,
//!     )
//!     .unwrap();
//! assert!(!ok);
//! assert_eq!(
//!     checker.violations(),
//!     "Unexpected type of key: \"id\". Expected: \"integer\", got: \"string\",\nKey \"avatar\" not found"
//! );
//! ```
//!
//! ## Errors versus violations
//!
//! Problems with the **data** (missing keys, wrong types, disallowed empties,
//! undecodable JSON) are [`Violation`]s: they are collected and the walk goes on.
//! Problems with the **schema** or with the call itself (an empty schema, a
//! malformed token, a scalar passed as input) are [`CheckError`]s and abort
//! the call.
//!
//! ## Lists are checked by example
//!
//! By default only the first element of a list is compared against the list's
//! element schema. Use [`ListPolicy::EveryElement`] to check them all.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod checker;
pub mod config;
pub mod error;
pub mod matcher;
pub mod schema;
pub mod semigroup;
pub mod shape;
pub mod testing;
pub mod token;
pub mod types;
pub mod validation;
pub mod violation;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use checker::{check_input, Input, SchemaChecker};
pub use config::{CheckerConfig, ListPolicy};
pub use error::{CheckError, SchemaError};
pub use matcher::{check, check_with};
pub use schema::{ObjectSchema, Schema};
pub use semigroup::Semigroup;
pub use token::TypeToken;
pub use types::TypeTag;
pub use validation::Validation;
pub use violation::{Violation, Violations};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::checker::{check_input, SchemaChecker};
    pub use crate::config::{CheckerConfig, ListPolicy};
    pub use crate::error::{CheckError, SchemaError};
    pub use crate::matcher::{check, check_with};
    pub use crate::schema::{ObjectSchema, Schema};
    pub use crate::semigroup::Semigroup;
    pub use crate::types::TypeTag;
    pub use crate::validation::Validation;
    pub use crate::violation::{Violation, Violations};
}
