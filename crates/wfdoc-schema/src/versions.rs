pub const SCHEMA_WORKFLOW_1: &str = "wfdoc-workflow/1";
