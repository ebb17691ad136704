//! Shared fixtures: a shop catalogue and a user record.

#![allow(dead_code)]

use schemacheck::Schema;
use serde_json::{json, Value};

pub fn schema(value: Value) -> Schema {
    Schema::from_value(&value).expect("fixture schema is valid")
}

pub fn product_schema() -> Schema {
    schema(json!({
        "id": "integer",
        "name": "string"
    }))
}

pub fn category_with_products_schema() -> Schema {
    schema(json!({
        "id": "integer",
        "name": "string",
        "products": {
            "id": "integer",
            "name": "string",
            "images": {
                "id": "integer",
                "filename": "string"
            }
        }
    }))
}

pub fn category_schema() -> Schema {
    schema(json!({
        "id": "integer",
        "name": "string",
        "products": {
            "nullable": true,
            "id": "integer",
            "name": "string"
        }
    }))
}

pub fn user_schema() -> Schema {
    schema(json!({
        "id": "integer",
        "username": "string",
        "avatar": "string|nullable",
        "roles": ["string|nullable"],
        "enabled": "boolean"
    }))
}

pub fn product() -> Value {
    json!({"id": 1, "name": "test product"})
}

pub fn invalid_type_product() -> Value {
    json!({"id": "abc", "name": "test product"})
}

pub fn missing_key_product() -> Value {
    json!({"id": 1})
}

pub fn category() -> Value {
    json!({"id": 1, "name": "test category", "products": []})
}

pub fn category_with_products() -> Value {
    json!({
        "id": 1,
        "name": "test category",
        "products": [
            {
                "id": 1,
                "name": "test product",
                "images": [
                    {"id": 1, "filename": "test.png"}
                ]
            }
        ]
    })
}

pub fn user() -> Value {
    json!({
        "id": 1,
        "username": "test",
        "avatar": "pic.jpg",
        "roles": ["ROLE_ADMIN"],
        "enabled": true
    })
}

pub fn user_without_roles() -> Value {
    json!({
        "id": 1,
        "username": "test",
        "avatar": "pic.jpg",
        "roles": [],
        "enabled": true
    })
}
