pub mod documents;
pub mod parse;
pub mod repair;
pub mod validate;

pub use documents::{NodeTypeCatalog, Tag, KNOWN_NODE_TYPES};
pub use parse::{parse_workflow_json, render_workflow_json};
pub use repair::{repair_workflow, RepairContext, RepairError, RepairOutcome, VERSION_ID_PREFIX};
pub use validate::{validate_integrity, validate_workflow, validate_workflow_text, ValidationReport};
