use super::{parse_workflow_json, render_workflow_json};
use serde_json::json;

#[test]
fn parses_object_documents() {
    let value = parse_workflow_json(r#"{"id":"wf","name":"n","nodes":[],"connections":{}}"#)
        .expect("must parse");
    assert_eq!(value["id"], json!("wf"));
}

#[test]
fn malformed_json_reports_position() {
    let issues = parse_workflow_json("{\n  \"id\": \"wf\",\n").expect_err("must reject");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].reference, "json.parse_error");
    assert!(issues[0].message.starts_with("Invalid JSON: "));
    assert!(issues[0].message.contains("line"));
}

#[test]
fn non_object_root_is_rejected() {
    let issues = parse_workflow_json("[1, 2]").expect_err("must reject");
    assert_eq!(issues[0].reference, "json.root_not_object");
}

#[test]
fn rendering_keeps_key_order_and_unicode() {
    let value = parse_workflow_json(r#"{"name":"Résumé 📬","id":"wf","nodes":[]}"#)
        .expect("must parse");
    let rendered = render_workflow_json(&value).expect("must render");
    assert_eq!(
        rendered,
        "{\n  \"name\": \"Résumé 📬\",\n  \"id\": \"wf\",\n  \"nodes\": []\n}\n"
    );
}

#[test]
fn rendering_is_stable_across_round_trips() {
    let value = json!({ "b": { "z": 1, "a": [1, 2] }, "a": null });
    let first = render_workflow_json(&value).expect("must render");
    let reparsed = parse_workflow_json(&first).expect("must parse");
    assert_eq!(render_workflow_json(&reparsed).expect("must render"), first);
}
