//! Serde support (feature-gated)
//!
//! - [`Schema`] serializes to and deserializes from its JSON form, so schemas can
//!   live inside larger configuration files.
//! - [`TypeTag`] is written as its message name.
//! - [`Violation`] and [`Violations`] serialize to structured records for callers
//!   that ship reports elsewhere.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::Deserialize;
//! use schemacheck::Schema;
//!
//! #[derive(Deserialize)]
//! struct Endpoint {
//!     path: String,
//!     response: Schema, // validated on deserialize
//! }
//!
//! let json = r#"{"path": "/users", "response": {"id": "integer"}}"#;
//! let endpoint: Endpoint = serde_json::from_str(json).unwrap();
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{Schema, TypeTag, Violation, Violations};

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        TypeTag::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown type tag \"{}\"", name)))
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Schema::from_value(&value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Violation::MissingKey { key } => {
                map.serialize_entry("kind", "missing_key")?;
                map.serialize_entry("key", key)?;
            }
            Violation::TypeMismatch {
                key,
                actual,
                expected,
            } => {
                map.serialize_entry("kind", "type_mismatch")?;
                map.serialize_entry("key", key)?;
                map.serialize_entry("actual", actual)?;
                map.serialize_entry("expected", expected)?;
            }
            Violation::InvalidData { key, reason } => {
                map.serialize_entry("kind", "invalid_data")?;
                if let Some(key) = key {
                    map.serialize_entry("key", key)?;
                }
                map.serialize_entry("reason", reason)?;
            }
        }
        map.serialize_entry("message", &self.to_string())?;
        map.end()
    }
}

impl Serialize for Violations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize, Debug)]
    struct Endpoint {
        path: String,
        response: Schema,
    }

    #[test]
    fn test_schema_deserializes_inside_config() {
        let endpoint: Endpoint = serde_json::from_value(json!({
            "path": "/users",
            "response": {"id": "integer", "roles": ["string|nullable"]}
        }))
        .unwrap();

        assert_eq!(endpoint.path, "/users");
        assert!(endpoint.response.as_object().unwrap().get("roles").unwrap().is_list());
    }

    #[test]
    fn test_schema_deserialize_rejects_bad_token() {
        let result: Result<Endpoint, _> = serde_json::from_value(json!({
            "path": "/users",
            "response": {"id": "1"}
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("invalid type token \"1\" for key \"id\""), "{}", err);
    }

    #[test]
    fn test_schema_serializes_to_json_form() {
        let value = json!({"nullable": true, "id": "integer"});
        let schema = Schema::from_value(&value).unwrap();
        assert_eq!(serde_json::to_value(&schema).unwrap(), value);
    }

    #[test]
    fn test_type_tag_round_trip() {
        assert_eq!(serde_json::to_value(TypeTag::Float).unwrap(), json!("double"));
        let tag: TypeTag = serde_json::from_value(json!("array")).unwrap();
        assert_eq!(tag, TypeTag::List);
        assert!(serde_json::from_value::<TypeTag>(json!("nullable")).is_err());
    }

    #[test]
    fn test_violations_serialize_as_records() {
        let report: Violations = vec![
            Violation::missing_key("name"),
            Violation::type_mismatch("id", TypeTag::String, "integer"),
            Violation::null_not_allowed(None),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!([
                {"kind": "missing_key", "key": "name", "message": "Key \"name\" not found"},
                {
                    "kind": "type_mismatch",
                    "key": "id",
                    "actual": "string",
                    "expected": "integer",
                    "message": "Unexpected type of key: \"id\". Expected: \"integer\", got: \"string\""
                },
                {
                    "kind": "invalid_data",
                    "reason": "null value not allowed",
                    "message": "Invalid data: null value not allowed"
                }
            ])
        );
    }
}
