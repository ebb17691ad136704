//! Schema nodes
//!
//! A schema is a tree of three node kinds:
//!
//! - a **leaf**: a [`TypeToken`] such as `"integer"` or `"string|nullable"`;
//! - a **list**: one element schema describing every item of a homogeneous list;
//! - an **object**: ordered `key -> schema` fields plus an explicit flag saying
//!   whether an empty container may stand in for the whole object.
//!
//! # JSON form
//!
//! Schemas are usually written as JSON:
//!
//! ```
//! use schemacheck::Schema;
//!
//! let schema: Schema = r#"{
//!     "id": "integer",
//!     "avatar": "string|nullable",
//!     "roles": ["string|nullable"],
//!     "products": { "nullable": true, "id": "integer" }
//! }"#
//! .parse()
//! .unwrap();
//!
//! assert!(schema.as_object().unwrap().get("roles").unwrap().is_list());
//! ```
//!
//! In the JSON form the key `nullable` is reserved: `"nullable": true` sets the
//! object's flag and any other value is ignored. The builder API has no such
//! restriction, so a real field called `nullable` can still be declared:
//!
//! ```
//! use schemacheck::{ObjectSchema, Schema};
//!
//! let schema = Schema::from(
//!     ObjectSchema::new()
//!         .field("nullable", Schema::leaf("boolean").unwrap())
//!         .nullable(true),
//! );
//! assert!(schema.allows_empty());
//! ```

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::config::DEFAULT_MAX_DEPTH;
use crate::token::NULLABLE;
use crate::{SchemaError, TypeTag, TypeToken};

/// A node of a schema tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    /// A type token compared against a single value.
    Leaf(TypeToken),
    /// A homogeneous list whose items follow the inner schema.
    List(Box<Schema>),
    /// A keyed object.
    Object(ObjectSchema),
}

impl Schema {
    /// Parse a leaf token.
    pub fn leaf(token: &str) -> Result<Self, SchemaError> {
        TypeToken::parse(token).map(Schema::Leaf)
    }

    /// Wrap an element schema into a list schema.
    pub fn list(element: Schema) -> Self {
        Schema::List(Box::new(element))
    }

    /// Parse the JSON form of a schema.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        parse_node(value, None, 0)
    }

    /// Whether this is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Schema::Leaf(_))
    }

    /// Whether this is a list schema.
    pub fn is_list(&self) -> bool {
        matches!(self, Schema::List(_))
    }

    /// The token, for a leaf.
    pub fn as_token(&self) -> Option<&TypeToken> {
        match self {
            Schema::Leaf(token) => Some(token),
            _ => None,
        }
    }

    /// The object schema, for an object.
    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            Schema::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Whether an empty container is acceptable where this schema is expected.
    ///
    /// A list defers to its element: a leaf element must name `nullable`, an
    /// object element must carry the nullable flag.
    ///
    /// A leaf matches the `nullable` member of its union exactly, so a token
    /// such as `"nullablex"` does not allow empties.
    ///
    /// ```
    /// use schemacheck::Schema;
    /// use serde_json::json;
    ///
    /// let roles = Schema::from_value(&json!(["string|nullable"])).unwrap();
    /// assert!(roles.allows_empty());
    ///
    /// let products = Schema::from_value(&json!({"nullable": false, "id": "integer"})).unwrap();
    /// assert!(!products.allows_empty());
    /// ```
    pub fn allows_empty(&self) -> bool {
        match self {
            Schema::Leaf(token) => token.is_nullable(),
            Schema::List(element) => element.allows_empty(),
            Schema::Object(object) => object.is_nullable(),
        }
    }

    /// Nesting depth; a leaf has depth zero.
    pub fn depth(&self) -> usize {
        match self {
            Schema::Leaf(_) => 0,
            Schema::List(element) => 1 + element.depth(),
            Schema::Object(object) => {
                1 + object.fields().map(|(_, s)| s.depth()).max().unwrap_or(0)
            }
        }
    }

    /// Render back to the JSON form.
    ///
    /// Object fields literally named `nullable` have no JSON spelling and are left out.
    pub fn to_value(&self) -> Value {
        match self {
            Schema::Leaf(token) => Value::String(token.as_str().to_string()),
            Schema::List(element) => Value::Array(vec![element.to_value()]),
            Schema::Object(object) => {
                let mut map = Map::new();
                if object.marked {
                    map.insert(NULLABLE.to_string(), Value::Bool(object.is_nullable()));
                }
                for (name, schema) in object.fields() {
                    if name != NULLABLE {
                        map.insert(name.to_string(), schema.to_value());
                    }
                }
                Value::Object(map)
            }
        }
    }
}

impl From<ObjectSchema> for Schema {
    fn from(object: ObjectSchema) -> Self {
        Schema::Object(object)
    }
}

impl From<TypeToken> for Schema {
    fn from(token: TypeToken) -> Self {
        Schema::Leaf(token)
    }
}

impl TryFrom<&Value> for Schema {
    type Error = SchemaError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Schema::from_value(value)
    }
}

impl TryFrom<Value> for Schema {
    type Error = SchemaError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Schema::from_value(&value)
    }
}

impl FromStr for Schema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s).map_err(|e| SchemaError::Json {
            message: e.to_string(),
        })?;
        Schema::from_value(&value)
    }
}

fn parse_node(value: &Value, key: Option<&str>, depth: usize) -> Result<Schema, SchemaError> {
    if depth > DEFAULT_MAX_DEPTH {
        return Err(SchemaError::TooDeep {
            limit: DEFAULT_MAX_DEPTH,
        });
    }

    match value {
        Value::String(token) => {
            TypeToken::parse(token)
                .map(Schema::Leaf)
                .map_err(|_| SchemaError::InvalidToken {
                    key: key.map(str::to_string),
                    token: token.clone(),
                })
        }
        Value::Array(items) => match items.as_slice() {
            [] => Err(SchemaError::Empty),
            [element] => Ok(Schema::list(parse_node(element, key, depth + 1)?)),
            _ => Err(SchemaError::AmbiguousList { len: items.len() }),
        },
        Value::Object(map) => {
            let mut object = ObjectSchema::new();
            for (name, node) in map {
                if name == NULLABLE {
                    object = object.nullable(*node == Value::Bool(true));
                    continue;
                }
                let field = parse_node(node, Some(name.as_str()), depth + 1)?;
                object = object.field(name.as_str(), field);
            }
            Ok(Schema::Object(object))
        }
        other => Err(SchemaError::UnsupportedNode {
            found: TypeTag::of(other),
        }),
    }
}

/// The fields of an object schema, in declaration order.
///
/// # Examples
///
/// ```
/// use schemacheck::{ObjectSchema, Schema};
///
/// let product = ObjectSchema::new()
///     .field("id", Schema::leaf("integer").unwrap())
///     .field("name", Schema::leaf("string").unwrap());
///
/// let keys: Vec<_> = product.fields().map(|(k, _)| k).collect();
/// assert_eq!(keys, ["id", "name"]);
/// assert!(!product.is_nullable());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectSchema {
    fields: Vec<(String, Schema)>,
    nullable: bool,
    // set once the nullable marker has been declared, whatever its value
    marked: bool,
}

impl ObjectSchema {
    /// An object schema with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Declaring the same name twice replaces the first schema in place.
    pub fn field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = schema,
            None => self.fields.push((name, schema)),
        }
        self
    }

    /// Allow an empty container in place of this object.
    ///
    /// Declaring the marker, even as `false`, keeps a field-less schema from
    /// counting as empty.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self.marked = true;
        self
    }

    /// Whether an empty container may stand for this object.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Look up a field schema.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, schema)| schema)
    }

    /// Iterate fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.fields.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has nothing in it at all: no fields and no nullable marker.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && !self.marked
    }
}
