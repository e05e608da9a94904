mod connections;
mod tags;

use crate::documents::fields::{
    ACTIVE, CONNECTIONS, CREATED_AT, IS_ARCHIVED, META, NODES, PIN_DATA, SETTINGS, STATIC_DATA,
    TRIGGER_COUNT, UPDATED_AT, VERSION_ID,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use tracing::debug;
use uuid::Uuid;

/// Marks version ids minted by the repairer.
pub const VERSION_ID_PREFIX: &str = "fixed-";

/// Clock and identifier used for every default filled in by one repair run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairContext {
    pub now: DateTime<Utc>,
    pub version_id: String,
}

impl RepairContext {
    pub fn current() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            version_id: format!("{VERSION_ID_PREFIX}{}", Uuid::new_v4()),
        }
    }

    pub fn timestamp(&self) -> String {
        self.now.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepairOutcome {
    pub document: Value,
    pub changes: Vec<String>,
}

impl RepairOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepairError {
    #[error("Invalid document: root must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// Fills missing fields with defaults and coerces known-malformed shapes.
/// Running it on its own output yields no further changes.
pub fn repair_workflow(document: Value, context: &RepairContext) -> Result<RepairOutcome, RepairError> {
    let mut workflow = match document {
        Value::Object(workflow) => workflow,
        other => {
            return Err(RepairError::NotAnObject {
                found: json_type_name(&other),
            })
        }
    };
    let mut changes = Vec::new();

    for field in [PIN_DATA, SETTINGS, META] {
        if workflow.get(field).map_or(true, Value::is_null) {
            workflow.insert(field.to_string(), Value::Object(Map::new()));
            record(&mut changes, format!("Added missing {field} field"));
        }
    }

    if !workflow.contains_key(STATIC_DATA) {
        workflow.insert(STATIC_DATA.to_string(), Value::Null);
        record(&mut changes, format!("Added missing {STATIC_DATA} field"));
    }

    tags::repair_tags(&mut workflow, &mut changes);

    let timestamp = context.timestamp();
    let defaults = [
        (TRIGGER_COUNT, json!(0)),
        (VERSION_ID, Value::String(context.version_id.clone())),
        (CREATED_AT, Value::String(timestamp.clone())),
        (UPDATED_AT, Value::String(timestamp)),
        (ACTIVE, Value::Bool(false)),
        (IS_ARCHIVED, Value::Bool(false)),
    ];
    for (field, value) in defaults {
        if !workflow.contains_key(field) {
            workflow.insert(field.to_string(), value);
            record(&mut changes, format!("Added missing {field} field"));
        }
    }

    if !matches!(workflow.get(NODES), Some(Value::Array(_))) {
        workflow.insert(NODES.to_string(), Value::Array(Vec::new()));
        record(&mut changes, "Fixed invalid nodes field".to_string());
    }

    if !matches!(workflow.get(CONNECTIONS), Some(Value::Object(_))) {
        workflow.insert(CONNECTIONS.to_string(), Value::Object(Map::new()));
        record(&mut changes, "Fixed invalid connections field".to_string());
    }

    connections::prune_null_groups(&mut workflow, &mut changes);

    Ok(RepairOutcome {
        document: Value::Object(workflow),
        changes,
    })
}

fn record(changes: &mut Vec<String>, change: String) {
    debug!(change = change.as_str(), "repaired workflow");
    changes.push(change);
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
