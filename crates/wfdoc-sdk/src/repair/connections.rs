use crate::documents::fields::CONNECTIONS;
use serde_json::{Map, Value};

use super::record;

/// Drops null elements from every `connections.<source>.<type>` list,
/// keeping the order of what remains.
pub(super) fn prune_null_groups(workflow: &mut Map<String, Value>, changes: &mut Vec<String>) {
    let Some(Value::Object(connections)) = workflow.get_mut(CONNECTIONS) else {
        return;
    };

    for (source, outputs) in connections.iter_mut() {
        let Value::Object(outputs) = outputs else {
            continue;
        };
        for (connection_type, groups) in outputs.iter_mut() {
            let Value::Array(groups) = groups else {
                continue;
            };
            let before = groups.len();
            groups.retain(|group| !group.is_null());
            if groups.len() != before {
                record(
                    changes,
                    format!("Removed null values from {source}.{connection_type} connections"),
                );
            }
        }
    }
}
