use jsonschema::error::ValidationErrorKind;
use jsonschema::{JSONSchema, ValidationError};
use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;
use wfdoc_core::{FieldPath, FieldPathSegment, IssueKind, StructuredIssue};

use crate::registry::get_json_schema;

/// Evaluates `instance` against a registered schema and returns one issue
/// per violation, in the order the validator reports them.
pub fn validate_schema_instance(schema_id: &str, instance: &Value) -> Vec<StructuredIssue> {
    let Some(schema) = get_json_schema(schema_id) else {
        return vec![registry_issue(
            format!("unknown schema id: {schema_id}"),
            "schema_registry.unknown_schema",
        )];
    };

    let schema_json: Value = match serde_json::from_str(schema.json) {
        Ok(value) => value,
        Err(err) => {
            return vec![registry_issue(
                format!("embedded schema json parse failed: {err}"),
                "schema_registry.invalid_embedded_schema",
            )];
        }
    };

    let compiled = match JSONSchema::options()
        .with_format("uuid", is_uuid)
        .with_format("iso-date-time", is_iso_date_time)
        .compile(&schema_json)
    {
        Ok(compiled) => compiled,
        Err(err) => {
            return vec![registry_issue(
                format!("schema compile failed for {schema_id}: {err}"),
                "schema_registry.compile_failed",
            )];
        }
    };

    let mut issues = Vec::new();
    if let Err(errors) = compiled.validate(instance) {
        for error in errors {
            issues.push(describe_violation(&schema_json, &error));
        }
    }
    issues
}

fn describe_violation(schema: &Value, error: &ValidationError<'_>) -> StructuredIssue {
    let path = FieldPath::from_json_pointer(error.instance_path.to_string().as_str());
    match &error.kind {
        ValidationErrorKind::Required { property } => {
            let field = match property {
                Value::String(name) => name.clone(),
                other => other.to_string(),
            };
            let path = path.child_key(field);
            StructuredIssue::error(
                IssueKind::SchemaError,
                path.clone(),
                format!("Schema validation error: Missing required field at path '{path}'"),
                "json_schema.required",
            )
        }
        ValidationErrorKind::Type { .. }
            if error.instance.is_null() && is_required_field(schema, &path) =>
        {
            StructuredIssue::error(
                IssueKind::SchemaError,
                path.clone(),
                format!("Schema validation error: Missing or null required field at path '{path}'"),
                "json_schema.null",
            )
        }
        ValidationErrorKind::Type { .. } if error.instance.is_null() => StructuredIssue::error(
            IssueKind::SchemaError,
            path.clone(),
            format!("Schema validation error: null is not allowed at path '{path}'"),
            "json_schema.null_not_allowed",
        ),
        ValidationErrorKind::Format { format } => StructuredIssue::error(
            IssueKind::SchemaError,
            path.clone(),
            format!(
                "Schema validation error: Invalid {format} value at path '{path}': {}",
                error.instance
            ),
            "json_schema.format",
        ),
        _ => StructuredIssue::error(
            IssueKind::SchemaError,
            path.clone(),
            format!("Schema validation error: {error} at path '{path}'"),
            "json_schema.validation",
        ),
    }
}

/// Walks the schema along `path` (following local `$ref`s) and reports
/// whether its last key is listed in the enclosing object's `required`.
fn is_required_field(schema: &Value, path: &FieldPath) -> bool {
    let Some((FieldPathSegment::Key(field), parents)) = path.segments().split_last() else {
        return false;
    };

    let mut current = resolve_local_ref(schema, schema);
    for segment in parents {
        let next = match segment {
            FieldPathSegment::Key(key) => current
                .get("properties")
                .and_then(|properties| properties.get(key))
                .or_else(|| current.get("additionalProperties")),
            FieldPathSegment::Index(_) => current.get("items"),
        };
        let Some(next) = next else {
            return false;
        };
        current = resolve_local_ref(schema, next);
    }

    current
        .get("required")
        .and_then(Value::as_array)
        .is_some_and(|required| required.iter().any(|name| name.as_str() == Some(field.as_str())))
}

fn resolve_local_ref<'a>(root: &'a Value, node: &'a Value) -> &'a Value {
    node.get("$ref")
        .and_then(Value::as_str)
        .and_then(|reference| reference.strip_prefix('#'))
        .and_then(|pointer| root.pointer(pointer))
        .unwrap_or(node)
}

fn is_uuid(value: &str) -> bool {
    uuid::Uuid::parse_str(value).is_ok()
}

/// RFC 3339, or an ISO-8601 local date-time without offset.
fn is_iso_date_time(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
}

fn registry_issue(message: String, reference: &str) -> StructuredIssue {
    StructuredIssue::error(IssueKind::SchemaError, FieldPath::root(), message, reference)
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
