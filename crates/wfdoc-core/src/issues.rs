use crate::field_path::FieldPath;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    ParseError,
    SchemaError,
    IntegrityError,
    ConfigError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredIssue {
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    pub field_path: FieldPath,
    pub message: String,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl StructuredIssue {
    pub fn error(
        kind: IssueKind,
        field_path: FieldPath,
        message: impl Into<String>,
        reference: &str,
    ) -> Self {
        Self {
            kind,
            severity: IssueSeverity::Error,
            field_path,
            message: message.into(),
            reference: reference.to_string(),
            file: None,
        }
    }

    pub fn warning(
        kind: IssueKind,
        field_path: FieldPath,
        message: impl Into<String>,
        reference: &str,
    ) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            ..Self::error(kind, field_path, message, reference)
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

#[cfg(test)]
#[path = "issues_test.rs"]
mod tests;
