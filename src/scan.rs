//! Attribute-name scan over the raw options model.
//!
//! Maintainer aid only: when the vendor revises the dump schema, the scan
//! surfaces any field names the record shape doesn't know about yet. Nothing
//! in the filtering pipeline consumes its output.

use serde_json::Value;

/// Collect every structural field name in `model`, at any nesting depth,
/// in first-seen order and deduplicated.
pub fn list_attribute_names(model: &Value) -> Vec<String> {
    let mut names = Vec::new();
    walk(model, &mut names);
    names
}

fn walk(value: &Value, names: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if !names.iter().any(|n| n == key) {
                    names.push(key.clone());
                }
                walk(child, names);
            }
        }
        Value::Array(arr) => {
            for item in arr {
                walk(item, names);
            }
        }
        _ => {}
    }
}
