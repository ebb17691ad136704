//! Runtime type tags for JSON values
//!
//! Every data node is classified into exactly one [`TypeTag`]. Type tokens in a
//! schema are compared against these tags, never against strings produced by
//! some host runtime.

use std::fmt;

use serde_json::Value;

/// The closed set of runtime types a data node can have.
///
/// # Examples
///
/// ```
/// use schemacheck::TypeTag;
/// use serde_json::json;
///
/// assert_eq!(TypeTag::of(&json!(1)), TypeTag::Integer);
/// assert_eq!(TypeTag::of(&json!(1.5)), TypeTag::Float);
/// assert_eq!(TypeTag::of(&json!(null)), TypeTag::Null);
/// assert_eq!(TypeTag::of(&json!([1, 2])).to_string(), "array");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    /// A JSON string.
    String,
    /// A number written without fraction or exponent that fits in `i64` or `u64`.
    Integer,
    /// Any other number.
    Float,
    /// `true` or `false`.
    Boolean,
    /// A keyed mapping.
    Object,
    /// A positional sequence.
    List,
    /// JSON `null`.
    Null,
}

impl TypeTag {
    /// Every tag, in declaration order.
    pub const ALL: [TypeTag; 7] = [
        TypeTag::String,
        TypeTag::Integer,
        TypeTag::Float,
        TypeTag::Boolean,
        TypeTag::Object,
        TypeTag::List,
        TypeTag::Null,
    ];

    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => TypeTag::Integer,
            Value::Number(_) => TypeTag::Float,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::List,
            Value::Object(_) => TypeTag::Object,
        }
    }

    /// The name used in violation messages.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Integer => "integer",
            TypeTag::Float => "double",
            TypeTag::Boolean => "boolean",
            TypeTag::Object => "object",
            TypeTag::List => "array",
            TypeTag::Null => "null",
        }
    }

    /// Whether values of this type hold other values.
    pub fn is_container(self) -> bool {
        matches!(self, TypeTag::Object | TypeTag::List)
    }

    /// Look up a tag by its message name.
    ///
    /// ```
    /// use schemacheck::TypeTag;
    ///
    /// assert_eq!(TypeTag::from_name("double"), Some(TypeTag::Float));
    /// assert_eq!(TypeTag::from_name("nullable"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
