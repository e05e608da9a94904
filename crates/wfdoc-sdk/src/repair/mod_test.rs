use super::{repair_workflow, RepairContext, RepairError, VERSION_ID_PREFIX};
use crate::documents::NodeTypeCatalog;
use crate::parse::render_workflow_json;
use crate::validate::validate_workflow;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

fn context() -> RepairContext {
    RepairContext {
        now: Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap(),
        version_id: "fixed-test-version".to_string(),
    }
}

fn complete_workflow() -> Value {
    json!({
        "id": "wf-1",
        "name": "Complete",
        "active": true,
        "isArchived": false,
        "createdAt": "2023-01-01T00:00:00.000Z",
        "updatedAt": "2023-01-02T00:00:00.000Z",
        "versionId": "1a2b",
        "triggerCount": 3,
        "tags": ["prod"],
        "pinData": {},
        "settings": { "executionOrder": "v1" },
        "meta": {},
        "staticData": null,
        "nodes": [],
        "connections": {}
    })
}

#[test]
fn bare_document_gets_every_default_in_rule_order() {
    let outcome = repair_workflow(json!({ "id": "wf", "name": "Bare" }), &context())
        .expect("repair must succeed");

    assert_eq!(
        outcome.changes,
        vec![
            "Added missing pinData field",
            "Added missing settings field",
            "Added missing meta field",
            "Added missing staticData field",
            "Added missing tags field",
            "Added missing triggerCount field",
            "Added missing versionId field",
            "Added missing createdAt field",
            "Added missing updatedAt field",
            "Added missing active field",
            "Added missing isArchived field",
            "Fixed invalid nodes field",
            "Fixed invalid connections field",
        ]
    );
    assert_eq!(
        outcome.document,
        json!({
            "id": "wf",
            "name": "Bare",
            "pinData": {},
            "settings": {},
            "meta": {},
            "staticData": null,
            "tags": [],
            "triggerCount": 0,
            "versionId": "fixed-test-version",
            "createdAt": "2024-05-01T10:30:00.000Z",
            "updatedAt": "2024-05-01T10:30:00.000Z",
            "active": false,
            "isArchived": false,
            "nodes": [],
            "connections": {}
        })
    );
}

#[test]
fn complete_document_is_untouched() {
    let outcome = repair_workflow(complete_workflow(), &context()).expect("repair must succeed");
    assert!(outcome.is_unchanged());
    assert_eq!(outcome.document, complete_workflow());
}

#[test]
fn null_object_fields_are_replaced_but_null_static_data_is_kept() {
    let mut document = complete_workflow();
    document["settings"] = Value::Null;
    document["meta"] = Value::Null;

    let outcome = repair_workflow(document, &context()).expect("repair must succeed");
    assert_eq!(
        outcome.changes,
        vec!["Added missing settings field", "Added missing meta field"]
    );
    assert_eq!(outcome.document["settings"], json!({}));
    assert_eq!(outcome.document["staticData"], Value::Null);
}

#[test]
fn tags_are_coerced_to_strings_with_a_single_change() {
    let mut document = complete_workflow();
    document["tags"] = json!([{ "name": "prod" }, "staging", 42, null]);

    let outcome = repair_workflow(document, &context()).expect("repair must succeed");
    assert_eq!(outcome.document["tags"], json!(["prod", "staging"]));
    assert_eq!(
        outcome.changes,
        vec!["Fixed tags field - converted objects to strings"]
    );
}

#[test]
fn non_array_tags_are_reset() {
    let mut document = complete_workflow();
    document["tags"] = json!("prod");

    let outcome = repair_workflow(document, &context()).expect("repair must succeed");
    assert_eq!(outcome.document["tags"], json!([]));
    assert_eq!(
        outcome.changes,
        vec!["Replaced non-array tags field with an empty list"]
    );
}

#[test]
fn null_connection_groups_are_pruned_in_order() {
    let mut document = complete_workflow();
    document["connections"] = json!({
        "Trigger": {
            "main": [
                { "node": "A", "type": "main", "index": 0 },
                null,
                { "node": "B", "type": "main", "index": 1 }
            ],
            "ai_tool": [[{ "node": "A", "type": "ai_tool", "index": 0 }]]
        }
    });

    let outcome = repair_workflow(document, &context()).expect("repair must succeed");
    assert_eq!(
        outcome.document["connections"]["Trigger"]["main"],
        json!([
            { "node": "A", "type": "main", "index": 0 },
            { "node": "B", "type": "main", "index": 1 }
        ])
    );
    assert_eq!(
        outcome.changes,
        vec!["Removed null values from Trigger.main connections"]
    );
}

#[test]
fn dangling_references_are_left_for_validation() {
    let mut document = complete_workflow();
    document["nodes"] = json!([{
        "id": "0b6f4c8e-3c1a-4a59-9d55-4f7d2f7f3b11",
        "name": "Trigger",
        "type": "n8n-nodes-base.gmailTrigger",
        "position": [0, 0]
    }]);
    document["connections"] =
        json!({ "Trigger": { "main": [[{ "node": "Ghost", "type": "main", "index": 0 }]] } });

    let outcome = repair_workflow(document.clone(), &context()).expect("repair must succeed");
    assert!(outcome.is_unchanged());
    assert_eq!(outcome.document["connections"], document["connections"]);

    let report = validate_workflow(&outcome.document, &NodeTypeCatalog::new());
    assert!(report
        .messages()
        .iter()
        .any(|message| message.contains("Ghost")));
}

#[test]
fn non_object_root_fails_fast() {
    let err = repair_workflow(json!([1, 2]), &context()).expect_err("must reject");
    assert_eq!(err, RepairError::NotAnObject { found: "array" });
}

#[test]
fn second_repair_is_a_no_op() {
    let document = json!({
        "id": "wf",
        "name": "Messy",
        "settings": null,
        "tags": [{ "name": "prod" }, "staging", 42, null, ["x"]],
        "nodes": { "not": "a list" },
        "connections": { "A": { "main": [null, [], null] }, "B": null }
    });

    let first = repair_workflow(document, &RepairContext::current()).expect("first repair");
    assert!(!first.is_unchanged());
    let second =
        repair_workflow(first.document.clone(), &RepairContext::current()).expect("second repair");

    assert!(second.is_unchanged(), "changes: {:?}", second.changes);
    assert_eq!(
        render_workflow_json(&second.document).expect("render"),
        render_workflow_json(&first.document).expect("render")
    );
}

#[test]
fn repaired_fields_pass_structural_validation() {
    let document = json!({
        "id": "wf",
        "name": "Converges",
        "tags": [{ "name": "prod" }, 7],
        "nodes": [{
            "id": "7e1c2b9a-5d4f-4e3b-8a2c-1f0e9d8c7b6a",
            "name": "If",
            "type": "n8n-nodes-base.if",
            "position": [0, 0]
        }],
        "connections": "broken"
    });

    let repaired = repair_workflow(document, &RepairContext::current()).expect("repair");
    let report = validate_workflow(&repaired.document, &NodeTypeCatalog::new());
    assert!(report.is_valid(), "errors: {:?}", report.messages());
}

#[test]
fn generated_version_ids_carry_the_repair_prefix() {
    let context = RepairContext::current();
    assert!(context.version_id.starts_with(VERSION_ID_PREFIX));
    assert!(context.timestamp().ends_with('Z'));
}
