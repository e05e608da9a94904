use crate::documents::fields::{CONNECTIONS, ID, NAME, NODE, NODES, TYPE};
use crate::documents::NodeTypeCatalog;
use serde_json::Value;
use std::collections::HashSet;
use tracing::warn;
use wfdoc_core::{FieldPath, IssueKind, StructuredIssue};

/// Cross-reference checks over an already parsed document. Nulls and
/// unexpected shapes at any nesting level are skipped; the structural layer
/// reports those.
pub fn validate_integrity(document: &Value, catalog: &NodeTypeCatalog) -> Vec<StructuredIssue> {
    let mut issues = Vec::new();
    let nodes = document
        .get(NODES)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let node_names: HashSet<&str> = nodes.iter().filter_map(|node| string_field(node, NAME)).collect();

    check_connection_references(document, &node_names, &mut issues);

    if has_duplicates(nodes, ID) {
        issues.push(integrity_error(
            FieldPath::key(NODES),
            "Duplicate node IDs found",
            "integrity.node.duplicate_id",
        ));
    }
    if has_duplicates(nodes, NAME) {
        issues.push(integrity_error(
            FieldPath::key(NODES),
            "Duplicate node names found",
            "integrity.node.duplicate_name",
        ));
    }

    for (index, node) in nodes.iter().enumerate() {
        let Some(node_type) = string_field(node, TYPE) else {
            continue;
        };
        if node_type.is_empty() || catalog.is_known(node_type) {
            continue;
        }
        let node_name = string_field(node, NAME).unwrap_or("Unknown");
        warn!(node_type, node = node_name, "unknown node type");
        issues.push(StructuredIssue::warning(
            IssueKind::IntegrityError,
            FieldPath::key(NODES).child_index(index).child_key(TYPE),
            format!("Unknown node type '{node_type}' in node '{node_name}'"),
            "integrity.node.unknown_type",
        ));
    }

    issues
}

fn check_connection_references(
    document: &Value,
    node_names: &HashSet<&str>,
    issues: &mut Vec<StructuredIssue>,
) {
    let Some(connections) = document.get(CONNECTIONS).and_then(Value::as_object) else {
        return;
    };

    for (source, outputs) in connections {
        let source_path = FieldPath::key(CONNECTIONS).child_key(source.as_str());
        if !node_names.contains(source.as_str()) {
            issues.push(integrity_error(
                source_path.clone(),
                format!("Connection references non-existent node: {source}"),
                "integrity.connection.unknown_source",
            ));
        }

        let Some(outputs) = outputs.as_object() else {
            continue;
        };
        for (connection_type, groups) in outputs {
            let Some(groups) = groups.as_array() else {
                continue;
            };
            for (group_index, group) in groups.iter().enumerate() {
                let Some(group) = group.as_array() else {
                    continue;
                };
                for (entry_index, entry) in group.iter().enumerate() {
                    let Some(target) = string_field(entry, NODE) else {
                        continue;
                    };
                    if target.is_empty() || node_names.contains(target) {
                        continue;
                    }
                    issues.push(integrity_error(
                        source_path
                            .child_key(connection_type.as_str())
                            .child_index(group_index)
                            .child_index(entry_index)
                            .child_key(NODE),
                        format!("Connection references non-existent target node: {target}"),
                        "integrity.connection.unknown_target",
                    ));
                }
            }
        }
    }
}

/// Compares any JSON value, so `1` and `1` collide while `1` and `"1"` do not.
fn has_duplicates(nodes: &[Value], field: &str) -> bool {
    let mut seen = HashSet::new();
    nodes
        .iter()
        .filter_map(|node| node.as_object()?.get(field))
        .any(|value| !seen.insert(value.to_string()))
}

fn string_field<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value.as_object()?.get(field)?.as_str()
}

fn integrity_error(path: FieldPath, message: impl Into<String>, reference: &str) -> StructuredIssue {
    StructuredIssue::error(IssueKind::IntegrityError, path, message, reference)
}

#[cfg(test)]
#[path = "integrity_test.rs"]
mod tests;
