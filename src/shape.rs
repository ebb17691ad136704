//! Shape classification: list-like versus map-like containers
//!
//! A container is *indexed* when its keys are exactly `0, 1, 2, ...` in order.
//! JSON arrays always are. A JSON object whose keys happen to be `"0"`, `"1"`, ...
//! in order is treated the same way, so data produced by serializers that write
//! lists as numbered maps is still understood as a list.

use serde_json::Value;

use crate::Schema;

/// Whether `value` holds other values.
#[inline]
pub fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Whether `value` is empty as a container. Scalars are never empty.
#[inline]
pub fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Whether `value` is a list-like container.
///
/// ```
/// use schemacheck::shape::is_indexed;
/// use serde_json::json;
///
/// assert!(is_indexed(&json!(["foo", "bar"])));
/// assert!(is_indexed(&json!({"0": "foo", "1": "bar"})));
/// assert!(!is_indexed(&json!({"foo": "bar"})));
/// assert!(!is_indexed(&json!({"1": "foo", "0": "bar"})));
/// assert!(!is_indexed(&json!("foo")));
/// ```
pub fn is_indexed(value: &Value) -> bool {
    match value {
        Value::Array(_) => true,
        Value::Object(map) => map
            .keys()
            .enumerate()
            .all(|(position, key)| *key == position.to_string()),
        _ => false,
    }
}

/// The items of an indexed container, in position order.
///
/// Returns `None` for map-like containers and scalars.
pub fn elements(value: &Value) -> Option<Vec<&Value>> {
    match value {
        Value::Array(items) => Some(items.iter().collect()),
        Value::Object(map) if is_indexed(value) => Some(map.values().collect()),
        _ => None,
    }
}

/// Whether `data` is a single scalar to be compared against the sole entry of a
/// list schema.
///
/// ```
/// use schemacheck::Schema;
/// use schemacheck::shape::is_plain;
/// use serde_json::json;
///
/// let list = Schema::from_value(&json!(["string"])).unwrap();
/// let object = Schema::from_value(&json!({"foo": "string"})).unwrap();
///
/// assert!(is_plain(&json!("test"), &list));
/// assert!(!is_plain(&json!("test"), &object));
/// assert!(!is_plain(&json!(["test"]), &list));
/// ```
pub fn is_plain(data: &Value, schema: &Schema) -> bool {
    !is_container(data) && schema.is_list()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_containers_are_indexed() {
        assert!(is_indexed(&json!([])));
        assert!(is_indexed(&json!({})));
    }

    #[test]
    fn test_gapped_keys_are_not_indexed() {
        assert!(!is_indexed(&json!({"0": "a", "2": "b"})));
        assert!(!is_indexed(&json!({"00": "a"})));
        assert!(!is_indexed(&json!({"1": "a"})));
    }

    #[test]
    fn test_elements() {
        let list = json!([1, 2]);
        assert_eq!(elements(&list), Some(vec![&json!(1), &json!(2)]));

        let numbered = json!({"0": "a", "1": "b"});
        assert_eq!(elements(&numbered), Some(vec![&json!("a"), &json!("b")]));

        assert_eq!(elements(&json!({"id": 1})), None);
        assert_eq!(elements(&json!(1)), None);
    }

    #[test]
    fn test_is_empty_container() {
        assert!(is_empty_container(&json!([])));
        assert!(is_empty_container(&json!({})));
        assert!(!is_empty_container(&json!([null])));
        assert!(!is_empty_container(&json!("")));
        assert!(!is_empty_container(&Value::Null));
    }
}
