mod integrity;
mod workflow;

pub use integrity::validate_integrity;
pub use workflow::{validate_workflow, validate_workflow_text, ValidationReport};
