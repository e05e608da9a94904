use crate::documents::NodeTypeCatalog;
use crate::parse::parse_workflow_json;
use crate::validate::integrity::validate_integrity;
use serde::Serialize;
use serde_json::Value;
use wfdoc_core::StructuredIssue;
use wfdoc_schema::{validate_schema_instance, SCHEMA_WORKFLOW_1};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<StructuredIssue>,
    pub warnings: Vec<StructuredIssue>,
}

impl ValidationReport {
    fn from_issues(issues: Vec<StructuredIssue>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            issues.into_iter().partition(StructuredIssue::is_error);
        Self { errors, warnings }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages in emission order: structural first, then integrity.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|issue| issue.message.clone()).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|issue| issue.message.clone()).collect()
    }
}

pub fn validate_workflow(document: &Value, catalog: &NodeTypeCatalog) -> ValidationReport {
    let mut issues = validate_schema_instance(SCHEMA_WORKFLOW_1, document);
    issues.extend(validate_integrity(document, catalog));
    ValidationReport::from_issues(issues)
}

pub fn validate_workflow_text(input: &str, catalog: &NodeTypeCatalog) -> ValidationReport {
    match parse_workflow_json(input) {
        Ok(document) => validate_workflow(&document, catalog),
        Err(issues) => ValidationReport::from_issues(issues),
    }
}

#[cfg(test)]
#[path = "workflow_test.rs"]
mod tests;
