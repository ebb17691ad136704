//! Entry point: decode input, run the matcher, keep the report
//!
//! [`check_input`] is the stateless entry point. [`SchemaChecker`] wraps it for
//! callers that want the `assert` / `violations` pair: it remembers the report of
//! its most recent call and nothing else.
//!
//! # Examples
//!
//! ```
//! use schemacheck::{Schema, SchemaChecker};
//!
//! let schema: Schema = r#"{"id": "integer", "name": "string"}"#.parse().unwrap();
//! let mut checker = SchemaChecker::new();
//!
//! assert!(checker.assert_schema(r#"{"id": 1, "name": "x"}"#, &schema).unwrap());
//! assert_eq!(checker.violations(), "");
//!
//! assert!(!checker.assert_schema(r#"{"id": 1}"#, &schema).unwrap());
//! assert_eq!(checker.violations(), "Key \"name\" not found");
//! ```

use serde_json::Value;

use crate::matcher::{check_with, Outcome};
use crate::shape::is_container;
use crate::{CheckError, CheckerConfig, Schema, TypeTag, Validation, Violation, Violations};

/// Reason recorded when encoded input decodes to `null`.
pub const DECODED_NULL: &str = "decoded data is null";

/// Data handed to the entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    /// Already decoded data.
    Value(&'a Value),
    /// JSON text still to be decoded.
    Encoded(&'a str),
}

impl<'a> From<&'a Value> for Input<'a> {
    /// A JSON string value is taken as encoded JSON text.
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(text) => Input::Encoded(text),
            other => Input::Value(other),
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Encoded(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Encoded(text)
    }
}

/// Check decoded or encoded data against `schema`.
///
/// Encoded text that fails to decode is not an error: it yields a failed outcome
/// with one [`Violation::InvalidData`] whose `reason` is the bare decoder message.
/// Its rendered form carries the usual `Invalid data: ` prefix. Passing a decoded
/// scalar is an error.
///
/// ```
/// use schemacheck::{check_input, CheckError, CheckerConfig, Schema, TypeTag};
/// use serde_json::json;
///
/// let schema = Schema::from_value(&json!({"id": "integer"})).unwrap();
/// let config = CheckerConfig::default();
///
/// let outcome = check_input("{not json", &schema, &config).unwrap();
/// let report = outcome.errors().unwrap().to_string();
/// assert!(report.starts_with("Invalid data: key must be a string"));
///
/// assert_eq!(
///     check_input(&json!(1), &schema, &config),
///     Err(CheckError::InvalidInput { found: TypeTag::Integer })
/// );
/// ```
pub fn check_input<'a>(
    data: impl Into<Input<'a>>,
    schema: &Schema,
    config: &CheckerConfig,
) -> Result<Outcome, CheckError> {
    match data.into() {
        Input::Value(value) if is_container(value) => check_with(value, schema, config),
        Input::Value(value) => Err(CheckError::InvalidInput {
            found: TypeTag::of(value),
        }),
        Input::Encoded(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Null) => Ok(reject(Violation::invalid_data(DECODED_NULL))),
            Ok(value) if !is_container(&value) => Ok(reject(Violation::not_a_container(
                None,
                TypeTag::of(&value),
            ))),
            Ok(value) => check_with(&value, schema, config),
            Err(e) => Ok(reject(Violation::invalid_data(e.to_string()))),
        },
    }
}

fn reject(violation: Violation) -> Outcome {
    Validation::failure(Violations::from(violation))
}

#[cfg(feature = "tracing")]
fn log_outcome(outcome: &Result<Outcome, CheckError>) {
    match outcome {
        Ok(o) => tracing::debug!(
            passed = o.is_success(),
            violations = o.errors().map_or(0, Violations::len),
            "schema check finished"
        ),
        Err(e) => tracing::debug!(error = %e, "schema check aborted"),
    }
}

/// Checker that remembers the violations of its last call.
///
/// Every call to [`assert_schema`](Self::assert_schema) starts from a clean report,
/// even when it ends in an error. One instance is meant for one caller at a time;
/// use [`check_input`] directly to share nothing at all.
#[derive(Debug, Clone, Default)]
pub struct SchemaChecker {
    config: CheckerConfig,
    violations: Violations,
}

impl SchemaChecker {
    /// A checker with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A checker with the given configuration.
    pub fn with_config(config: CheckerConfig) -> Self {
        Self {
            config,
            violations: Violations::new(),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Check `data` against `schema`, replacing the stored report.
    ///
    /// Returns `Ok(true)` when no violation was found.
    pub fn assert_schema<'a>(
        &mut self,
        data: impl Into<Input<'a>>,
        schema: &Schema,
    ) -> Result<bool, CheckError> {
        self.violations = Violations::new();

        let outcome = check_input(data, schema, &self.config);

        #[cfg(feature = "tracing")]
        log_outcome(&outcome);

        match outcome? {
            Validation::Success(()) => Ok(true),
            Validation::Failure(violations) => {
                self.violations = violations;
                Ok(false)
            }
        }
    }

    /// Violations of the last call joined with `",\n"`, or an empty string.
    pub fn violations(&self) -> String {
        self.violations.to_string()
    }

    /// Violations of the last call, in discovery order.
    pub fn violation_list(&self) -> &[Violation] {
        self.violations.as_slice()
    }

    /// Take the report of the last call, leaving an empty one behind.
    pub fn take_violations(&mut self) -> Violations {
        std::mem::take(&mut self.violations)
    }
}
