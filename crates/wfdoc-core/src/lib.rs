pub mod field_path;
pub mod issues;

pub use field_path::{FieldPath, FieldPathSegment};
pub use issues::{IssueKind, IssueSeverity, StructuredIssue};
