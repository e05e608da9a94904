use crate::embedded::EmbeddedSchema;
use crate::versions::SCHEMA_WORKFLOW_1;

const WORKFLOW_SCHEMA: &str = include_str!("../schemas/workflow.schema.json");

pub fn get_json_schema(schema_id: &str) -> Option<EmbeddedSchema> {
    match schema_id {
        SCHEMA_WORKFLOW_1 => Some(EmbeddedSchema {
            id: SCHEMA_WORKFLOW_1,
            json: WORKFLOW_SCHEMA,
        }),
        _ => None,
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
