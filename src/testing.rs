//! Testing utilities for code that checks data against schemas
//!
//! Assertion macros for check outcomes, plus proptest strategies (behind the
//! `proptest` feature) for generating type tokens and values of a given type.
//!
//! # Examples
//!
//! ```rust
//! use schemacheck::{assert_invalid, assert_valid, assert_violations, check, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::from_value(&json!({"id": "integer"})).unwrap();
//!
//! assert_valid!(check(&json!({"id": 1}), &schema).unwrap());
//! assert_invalid!(check(&json!({"id": "1"}), &schema).unwrap());
//! assert_violations!(
//!     check(&json!({}), &schema).unwrap(),
//!     ["Invalid data: null value not allowed"]
//! );
//! ```

/// Assert that an outcome has no violations.
///
/// Panics with the joined violations otherwise.
///
/// ```rust
/// use schemacheck::{assert_valid, Validation, Violations};
///
/// assert_valid!(Validation::<(), Violations>::success(()));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($outcome:expr) => {
        match $outcome {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(violations) => {
                panic!("Expected data to match schema, got violations:\n{}", violations);
            }
        }
    };
}

/// Assert that an outcome has at least one violation.
///
/// ```rust
/// use schemacheck::{assert_invalid, Validation, Violation, Violations};
///
/// assert_invalid!(Validation::<(), _>::failure(Violations::from(Violation::missing_key("id"))));
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($outcome:expr) => {
        match $outcome {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected violations, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome failed with exactly these violation messages, in order.
///
/// ```rust
/// use schemacheck::{assert_violations, Validation, Violation, Violations};
///
/// let outcome = Validation::<(), _>::failure(Violations::from(Violation::missing_key("id")));
/// assert_violations!(outcome, ["Key \"id\" not found"]);
/// ```
#[macro_export]
macro_rules! assert_violations {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Validation::Failure(violations) => {
                let actual: ::std::vec::Vec<::std::string::String> =
                    violations.iter().map(|v| v.to_string()).collect();
                let expected: ::std::vec::Vec<::std::string::String> =
                    $expected.iter().map(|s| s.to_string()).collect();
                assert_eq!(actual, expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected violations {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
pub use self::strategies::*;

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;
    use serde_json::{json, Value};

    use crate::token::{KNOWN_WORDS, WILDCARD};
    use crate::TypeTag;

    impl Arbitrary for TypeTag {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop::sample::select(TypeTag::ALL.to_vec()).boxed()
        }
    }

    /// A single union member: a known word or the wildcard.
    pub fn type_word() -> impl Strategy<Value = &'static str> {
        let mut words = KNOWN_WORDS.to_vec();
        words.push(WILDCARD);
        prop::sample::select(words)
    }

    /// A grammar-valid token of one to four members.
    pub fn type_token() -> impl Strategy<Value = String> {
        prop::collection::vec(type_word(), 1..=4).prop_map(|words| words.join("|"))
    }

    /// Text that never satisfies the grammar.
    pub fn malformed_token() -> impl Strategy<Value = String> {
        prop_oneof![
            "[A-Z0-9 ]{1,8}",
            "[a-z]{0,3}",
            type_token().prop_map(|t| format!("{}|", t)),
            type_token().prop_map(|t| format!("|{}", t)),
        ]
    }

    /// A JSON value classified as `tag`.
    pub fn value_of(tag: TypeTag) -> BoxedStrategy<Value> {
        match tag {
            TypeTag::String => any::<String>().prop_map(Value::String).boxed(),
            TypeTag::Integer => any::<i64>().prop_map(Value::from).boxed(),
            TypeTag::Float => (-1.0e9f64..1.0e9).prop_map(|f| json!(f)).boxed(),
            TypeTag::Boolean => any::<bool>().prop_map(Value::Bool).boxed(),
            TypeTag::Object => Just(json!({"key": 1})).boxed(),
            TypeTag::List => Just(json!([1])).boxed(),
            TypeTag::Null => Just(Value::Null).boxed(),
        }
    }
}
