use serde_json::Value;
use wfdoc_core::{FieldPath, IssueKind, StructuredIssue};

/// Parses workflow text. Both malformed JSON and a non-object root are fatal
/// for the file.
pub fn parse_workflow_json(input: &str) -> Result<Value, Vec<StructuredIssue>> {
    let value = serde_json::from_str::<Value>(input).map_err(|err| {
        vec![StructuredIssue::error(
            IssueKind::ParseError,
            FieldPath::root(),
            format!("Invalid JSON: {err}"),
            "json.parse_error",
        )]
    })?;
    if !value.is_object() {
        return Err(vec![StructuredIssue::error(
            IssueKind::ParseError,
            FieldPath::root(),
            "Invalid document: root must be a JSON object",
            "json.root_not_object",
        )]);
    }
    Ok(value)
}

/// Two-space indented, non-ASCII left unescaped, newline terminated.
pub fn render_workflow_json(value: &Value) -> serde_json::Result<String> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    Ok(rendered)
}
