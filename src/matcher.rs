//! The recursive matcher
//!
//! The matcher walks a schema and a data tree in lock-step:
//!
//! 1. An empty container is accepted only if the schema allows it
//!    (see [`Schema::allows_empty`]).
//! 2. A list-like container is reduced to its first element
//!    ([`ListPolicy::FirstElement`]) or to each of its elements
//!    ([`ListPolicy::EveryElement`]).
//! 3. A scalar matched against a list schema is compared with the list's leaf
//!    token and reported under the key that led here.
//! 4. Otherwise every declared field is looked up and checked. Missing keys and
//!    type mismatches are recorded and the walk goes on.
//!
//! The key that led to a nested schema is passed down explicitly, so the matcher
//! holds no state between calls and can be used from any number of threads.
//!
//! # Examples
//!
//! ```
//! use schemacheck::{check, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::from_value(&json!({"id": "integer", "name": "string"})).unwrap();
//!
//! let outcome = check(&json!({"id": "abc"}), &schema).unwrap();
//! assert_eq!(
//!     outcome.errors().unwrap().to_string(),
//!     "Unexpected type of key: \"id\". Expected: \"integer\", got: \"string\",\nKey \"name\" not found"
//! );
//! ```

use serde_json::Value;

use crate::shape::{elements, is_container, is_empty_container, is_plain};
use crate::{
    CheckError, CheckerConfig, ListPolicy, ObjectSchema, Schema, SchemaError, TypeTag, TypeToken,
    Validation, Violation, Violations,
};

/// Outcome of checking one node.
pub type Outcome = Validation<(), Violations>;

/// Check `data` against `schema` with the default configuration.
pub fn check(data: &Value, schema: &Schema) -> Result<Outcome, CheckError> {
    check_with(data, schema, &CheckerConfig::default())
}

/// Check `data` against `schema`.
///
/// Returns `Err` only for a broken schema or runaway nesting; everything wrong
/// with the data itself ends up in the `Failure` side of the outcome.
pub fn check_with(
    data: &Value,
    schema: &Schema,
    config: &CheckerConfig,
) -> Result<Outcome, CheckError> {
    Matcher { config }.node(data, schema, None, 0)
}

/// Decide whether an empty container may stand where `schema` is expected.
///
/// ```
/// use schemacheck::{matcher::check_nullable, Schema};
/// use serde_json::json;
///
/// let roles = Schema::from_value(&json!(["string|nullable"])).unwrap();
/// assert!(check_nullable(&roles, Some("roles")).is_success());
///
/// let products = Schema::from_value(&json!({"nullable": false, "id": "integer"})).unwrap();
/// assert_eq!(
///     check_nullable(&products, Some("products")).errors().unwrap().to_string(),
///     "Invalid data for key \"products\": null value not allowed"
/// );
/// ```
pub fn check_nullable(schema: &Schema, key: Option<&str>) -> Outcome {
    if schema.allows_empty() {
        Validation::success(())
    } else {
        fail(Violation::null_not_allowed(key))
    }
}

fn fail(violation: Violation) -> Outcome {
    Validation::failure(Violations::from(violation))
}

fn compare(token: &TypeToken, key: Option<&str>, value: &Value) -> Result<Outcome, CheckError> {
    let key = key.ok_or(SchemaError::UngovernedLeaf)?;
    Ok(token.check(key, TypeTag::of(value)))
}

struct Matcher<'c> {
    config: &'c CheckerConfig,
}

impl Matcher<'_> {
    fn node(
        &self,
        data: &Value,
        schema: &Schema,
        key: Option<&str>,
        depth: usize,
    ) -> Result<Outcome, CheckError> {
        if depth > self.config.max_depth() {
            return Err(CheckError::DepthExceeded {
                limit: self.config.max_depth(),
            });
        }

        if let Schema::Object(object) = schema {
            if object.is_empty() {
                return Err(SchemaError::Empty.into());
            }
        }

        if is_empty_container(data) {
            return Ok(check_nullable(schema, key));
        }

        let Some(items) = elements(data) else {
            return self.item(data, schema, key, depth);
        };

        let take = match self.config.list_policy() {
            ListPolicy::FirstElement => 1,
            ListPolicy::EveryElement => items.len(),
        };
        let outcomes = items
            .into_iter()
            .take(take)
            .map(|item| self.item(item, schema, key, depth))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Validation::all(outcomes))
    }

    fn item(
        &self,
        item: &Value,
        schema: &Schema,
        key: Option<&str>,
        depth: usize,
    ) -> Result<Outcome, CheckError> {
        match schema {
            Schema::List(element) if is_plain(item, schema) => match element.as_ref() {
                Schema::Leaf(token) => compare(token, key, item),
                _ => Ok(fail(Violation::not_a_container(key, TypeTag::of(item)))),
            },
            Schema::Leaf(token) => compare(token, key, item),
            Schema::List(element) => match element.as_ref() {
                Schema::Leaf(token) => compare(token, key, item),
                nested => self.descend(item, nested, key, depth),
            },
            Schema::Object(object) => {
                if !is_container(item) {
                    return Ok(fail(Violation::not_a_container(key, TypeTag::of(item))));
                }
                self.fields(item, object, depth)
            }
        }
    }

    fn fields(
        &self,
        item: &Value,
        object: &ObjectSchema,
        depth: usize,
    ) -> Result<Outcome, CheckError> {
        let map = item.as_object();
        let mut outcomes = Vec::with_capacity(object.len());

        for (name, expected) in object.fields() {
            let Some(value) = map.and_then(|m| m.get(name)) else {
                outcomes.push(fail(Violation::missing_key(name)));
                continue;
            };

            let outcome = match expected {
                Schema::Leaf(token) => token.check(name, TypeTag::of(value)),
                _ if !is_container(value) => fail(Violation::type_mismatch(
                    name,
                    TypeTag::of(value),
                    "array",
                )),
                nested => self.descend(value, nested, Some(name), depth)?,
            };
            outcomes.push(outcome);
        }

        Ok(Validation::all(outcomes))
    }

    fn descend(
        &self,
        data: &Value,
        schema: &Schema,
        key: Option<&str>,
        depth: usize,
    ) -> Result<Outcome, CheckError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(key, depth = depth + 1, "descending into nested schema");
        self.node(data, schema, key, depth + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(value: Value) -> Schema {
        Schema::from_value(&value).unwrap()
    }

    fn messages(outcome: &Outcome) -> Vec<String> {
        outcome
            .errors()
            .map(|v| v.iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_flat_object_passes() {
        let s = schema(json!({"id": "integer", "name": "string"}));
        assert!(check(&json!({"id": 1, "name": "x"}), &s).unwrap().is_success());
    }

    #[test]
    fn test_extra_data_keys_are_ignored() {
        let s = schema(json!({"id": "integer"}));
        assert!(check(&json!({"id": 1, "other": [1, 2]}), &s).unwrap().is_success());
    }

    #[test]
    fn test_all_sibling_violations_reported() {
        let s = schema(json!({"a": "integer", "b": "string", "c": "boolean"}));
        let outcome = check(&json!({"a": "x", "c": 1}), &s).unwrap();
        assert_eq!(
            messages(&outcome),
            vec![
                "Unexpected type of key: \"a\". Expected: \"integer\", got: \"string\"",
                "Key \"b\" not found",
                "Unexpected type of key: \"c\". Expected: \"boolean\", got: \"integer\"",
            ]
        );
    }

    #[test]
    fn test_nested_violation_fails_whole_check() {
        let s = schema(json!({"id": "integer", "owner": {"name": "string"}}));
        let outcome = check(&json!({"id": 1, "owner": {"name": 5}}), &s).unwrap();
        assert_eq!(
            messages(&outcome),
            vec!["Unexpected type of key: \"name\". Expected: \"string\", got: \"integer\""]
        );
    }

    #[test]
    fn test_scalar_under_nested_schema_is_type_mismatch() {
        let s = schema(json!({"owner": {"name": "string"}}));
        let outcome = check(&json!({"owner": "bob"}), &s).unwrap();
        assert_eq!(
            messages(&outcome),
            vec!["Unexpected type of key: \"owner\". Expected: \"array\", got: \"string\""]
        );
    }

    #[test]
    fn test_null_under_nested_schema_is_type_mismatch() {
        let s = schema(json!({"owner": {"nullable": true, "name": "string"}}));
        let outcome = check(&json!({"owner": null}), &s).unwrap();
        assert_eq!(
            messages(&outcome),
            vec!["Unexpected type of key: \"owner\". Expected: \"array\", got: \"null\""]
        );
    }

    #[test]
    fn test_empty_schema_is_error_for_any_data() {
        let empty = Schema::from(ObjectSchema::new());
        for data in [json!({}), json!([]), json!({"id": 1}), json!([1])] {
            assert_eq!(check(&data, &empty), Err(CheckError::Schema(SchemaError::Empty)));
        }
    }

    #[test]
    fn test_nested_empty_schema_is_error_when_reached() {
        let s = Schema::from(ObjectSchema::new().field("inner", Schema::from(ObjectSchema::new())));
        assert_eq!(
            check(&json!({"inner": {"a": 1}}), &s),
            Err(CheckError::Schema(SchemaError::Empty))
        );
    }

    #[test]
    fn test_marker_only_schema_accepts_any_object() {
        for marker in [json!(false), json!("yes")] {
            let s = schema(json!({"meta": {"nullable": marker}}));
            assert_eq!(check(&json!({"meta": {"a": 1}}), &s), Ok(Validation::success(())));
        }
        let s = schema(json!({"meta": {"nullable": false}}));
        assert_eq!(
            messages(&check(&json!({"meta": {}}), &s).unwrap()),
            vec!["Invalid data for key \"meta\": null value not allowed"]
        );
    }

    #[test]
    fn test_empty_object_allowed_by_flag() {
        let s = schema(json!({"products": {"nullable": true, "id": "integer"}}));
        assert!(check(&json!({"products": []}), &s).unwrap().is_success());
        assert!(check(&json!({"products": {}}), &s).unwrap().is_success());
    }

    #[test]
    fn test_empty_object_rejected_without_flag() {
        let s = schema(json!({"products": {"id": "integer"}}));
        let outcome = check(&json!({"products": []}), &s).unwrap();
        assert_eq!(
            messages(&outcome),
            vec!["Invalid data for key \"products\": null value not allowed"]
        );
    }

    #[test]
    fn test_empty_list_allowed_by_nullable_token() {
        let s = schema(json!({"roles": ["string|nullable"]}));
        assert!(check(&json!({"roles": []}), &s).unwrap().is_success());

        let strict = schema(json!({"roles": ["string"]}));
        assert!(check(&json!({"roles": []}), &strict).unwrap().is_failure());
    }

    #[test]
    fn test_empty_root_data() {
        let s = schema(json!({"id": "integer"}));
        assert_eq!(
            messages(&check(&json!({}), &s).unwrap()),
            vec!["Invalid data: null value not allowed"]
        );
    }

    #[test]
    fn test_list_of_scalars_checks_first_element_only() {
        let s = schema(json!({"ids": ["integer"]}));
        assert!(check(&json!({"ids": [1, "two", null]}), &s).unwrap().is_success());

        let outcome = check(&json!({"ids": ["one", 2]}), &s).unwrap();
        assert_eq!(
            messages(&outcome),
            vec!["Unexpected type of key: \"ids\". Expected: \"integer\", got: \"string\""]
        );
    }

    #[test]
    fn test_every_element_policy_checks_all() {
        let s = schema(json!({"ids": ["integer"]}));
        let config = CheckerConfig::default().with_list_policy(ListPolicy::EveryElement);
        let outcome = check_with(&json!({"ids": [1, "two", null]}), &s, &config).unwrap();
        assert_eq!(
            messages(&outcome),
            vec![
                "Unexpected type of key: \"ids\". Expected: \"integer\", got: \"string\"",
                "Unexpected type of key: \"ids\". Expected: \"integer\", got: \"null\"",
            ]
        );
    }

    #[test]
    fn test_list_of_objects_via_object_schema() {
        let s = schema(json!({"products": {"id": "integer", "name": "string"}}));
        let data = json!({"products": [{"id": 1, "name": "a"}, {"id": "bad"}]});
        assert!(check(&data, &s).unwrap().is_success());

        let data = json!({"products": [{"id": 1}]});
        assert_eq!(
            messages(&check(&data, &s).unwrap()),
            vec!["Key \"name\" not found"]
        );
    }

    #[test]
    fn test_list_of_objects_via_list_schema() {
        let s = schema(json!({"products": [{"id": "integer"}]}));
        assert!(check(&json!({"products": [{"id": 1}]}), &s).unwrap().is_success());
        assert!(check(&json!({"products": [{"id": "x"}]}), &s).unwrap().is_failure());
    }

    #[test]
    fn test_scalar_item_under_object_element_schema() {
        let s = schema(json!({"products": [{"id": "integer"}]}));
        assert_eq!(
            messages(&check(&json!({"products": [7]}), &s).unwrap()),
            vec!["Invalid data for key \"products\": expected a container, got \"integer\""]
        );

        let s = schema(json!({"products": {"id": "integer"}}));
        assert_eq!(
            messages(&check(&json!({"products": [7]}), &s).unwrap()),
            vec!["Invalid data for key \"products\": expected a container, got \"integer\""]
        );
    }

    #[test]
    fn test_list_of_lists() {
        let s = schema(json!({"matrix": [["integer"]]}));
        assert!(check(&json!({"matrix": [[1, 2], [3]]}), &s).unwrap().is_success());
        assert!(check(&json!({"matrix": [["a"]]}), &s).unwrap().is_failure());
    }

    #[test]
    fn test_leaf_element_against_container_item() {
        let s = schema(json!({"rows": ["array"]}));
        assert!(check(&json!({"rows": [[1], [2]]}), &s).unwrap().is_success());

        let s = schema(json!({"rows": ["string"]}));
        assert_eq!(
            messages(&check(&json!({"rows": [{"a": 1}]}), &s).unwrap()),
            vec!["Unexpected type of key: \"rows\". Expected: \"string\", got: \"object\""]
        );
    }

    #[test]
    fn test_numbered_map_is_treated_as_list() {
        let s = schema(json!({"tags": ["string"]}));
        assert!(check(&json!({"tags": {"0": "a", "1": "b"}}), &s).unwrap().is_success());
    }

    #[test]
    fn test_list_data_has_no_string_keys() {
        let s = schema(json!({"id": "integer"}));
        let outcome = check(&json!([[1, 2]]), &s).unwrap();
        assert_eq!(messages(&outcome), vec!["Key \"id\" not found"]);
    }

    #[test]
    fn test_root_list_schema_has_no_governing_key() {
        let s = schema(json!(["integer"]));
        assert_eq!(
            check(&json!([1, 2]), &s),
            Err(CheckError::Schema(SchemaError::UngovernedLeaf))
        );
    }

    #[test]
    fn test_root_list_schema_with_object_elements() {
        let s = schema(json!([{"id": "integer"}]));
        assert!(check(&json!([{"id": 1}]), &s).unwrap().is_success());
    }

    #[test]
    fn test_wildcard_accepts_anything() {
        let s = schema(json!({"meta": "*"}));
        for value in [json!(null), json!(1), json!("x"), json!({"k": 1}), json!([1])] {
            assert!(check(&json!({"meta": value}), &s).unwrap().is_success());
        }
    }

    #[test]
    fn test_depth_limit() {
        let s = schema(json!({"a": {"b": {"c": "integer"}}}));
        let data = json!({"a": {"b": {"c": 1}}});

        let tight = CheckerConfig::default().with_max_depth(1);
        assert_eq!(
            check_with(&data, &s, &tight),
            Err(CheckError::DepthExceeded { limit: 1 })
        );

        let enough = CheckerConfig::default().with_max_depth(2);
        assert!(check_with(&data, &s, &enough).unwrap().is_success());
    }

    #[test]
    fn test_check_nullable() {
        assert!(check_nullable(&schema(json!(["string|nullable"])), None).is_success());
        assert!(check_nullable(&schema(json!({"nullable": true})), None).is_success());
        let products = schema(json!({"nullable": false, "a": "string"}));
        assert!(check_nullable(&products, None).is_failure());
    }
}
