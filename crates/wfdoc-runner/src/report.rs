use crate::cli::OutputFormat;
use crate::io::DirectoryNotice;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    Validate,
    Fix,
}

/// Ordered messages for one file. For `validate` the messages are errors;
/// for `fix` they are the change log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub messages: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub failed: bool,
}

impl FileReport {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
            warnings: Vec::new(),
            failed: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub kind: RunKind,
    pub directory: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<DirectoryNotice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_dir: Option<PathBuf>,
    pub files: BTreeMap<String, FileReport>,
}

impl RunReport {
    pub fn new(kind: RunKind, directory: PathBuf) -> Self {
        Self {
            kind,
            directory,
            notice: None,
            backup_dir: None,
            files: BTreeMap::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.notice.as_ref().is_some_and(DirectoryNotice::is_error)
            || self.files.values().any(|file| file.failed)
    }

    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_errors())
    }
}

pub fn render_report(report: &RunReport, format: &OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

fn render_text(report: &RunReport) -> String {
    let mut out = String::new();
    let verb = match report.kind {
        RunKind::Validate => "validate",
        RunKind::Fix => "fix",
    };
    let _ = writeln!(out, "{verb}: {}", report.directory.display());

    if let Some(notice) = &report.notice {
        let level = if notice.is_error() { "error" } else { "warning" };
        let _ = write!(out, "{level}: {}", notice.message());
        return out;
    }

    for (name, file) in &report.files {
        let headline = match (report.kind, file.failed, file.messages.len()) {
            (_, true, _) => format!("✗ {name}"),
            (RunKind::Validate, false, _) => format!("✓ {name} is valid"),
            (RunKind::Fix, false, 0) => format!("✓ {name} no fixes needed"),
            (RunKind::Fix, false, count) => format!("✓ {name} fixed with {count} changes"),
        };
        let _ = writeln!(out, "{headline}");
        for message in &file.messages {
            let _ = writeln!(out, "  - {message}");
        }
        for warning in &file.warnings {
            let _ = writeln!(out, "  ! {warning}");
        }
    }

    let failed = report.files.values().filter(|file| file.failed).count();
    let _ = write!(out, "summary: {} files, {failed} failed", report.files.len());
    if let Some(backup_dir) = &report.backup_dir {
        let _ = write!(out, "\nbackups: {}", backup_dir.display());
    }
    out
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
