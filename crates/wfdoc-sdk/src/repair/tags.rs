use crate::documents::fields::TAGS;
use crate::documents::Tag;
use serde_json::{Map, Value};

use super::record;

pub(super) fn repair_tags(workflow: &mut Map<String, Value>, changes: &mut Vec<String>) {
    let Some(tags) = workflow.get_mut(TAGS) else {
        workflow.insert(TAGS.to_string(), Value::Array(Vec::new()));
        record(changes, format!("Added missing {TAGS} field"));
        return;
    };

    let Value::Array(items) = tags else {
        *tags = Value::Array(Vec::new());
        record(changes, "Replaced non-array tags field with an empty list".to_string());
        return;
    };

    let coerced: Vec<Value> = items
        .iter()
        .filter_map(|item| Tag::from_value(item).into_name())
        .map(Value::String)
        .collect();
    if coerced != *items {
        *items = coerced;
        record(changes, "Fixed tags field - converted objects to strings".to_string());
    }
}
