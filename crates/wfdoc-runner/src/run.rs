use crate::cli::{FixCommand, OutputFormat, ValidateCommand};
use crate::config::{load_runner_config, RunnerConfig, RunnerConfigError};
use crate::io::{list_workflow_files, write_workflow_document, BackupStore};
use crate::report::{render_report, FileReport, RunKind, RunReport};
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use wfdoc_sdk::{
    parse_workflow_json, repair_workflow, validate_workflow_text, NodeTypeCatalog, RepairContext,
};

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("runner config load failed: {0}")]
    Config(#[from] RunnerConfigError),
    #[error("report encode failed: {0}")]
    ReportEncode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub rendered: String,
    pub exit_code: i32,
}

pub fn execute_validate(command: &ValidateCommand) -> Result<RunOutput, RunnerError> {
    let config = read_config(command.config.as_deref())?;
    let directory = config.resolve_workflow_dir(command.workflow_dir.as_deref());
    let report = validate_directory(&directory, &config.node_type_catalog());
    finish(&report, &command.format)
}

pub fn execute_fix(command: &FixCommand) -> Result<RunOutput, RunnerError> {
    let config = read_config(command.config.as_deref())?;
    let directory = config.resolve_workflow_dir(command.workflow_dir.as_deref());
    let store = BackupStore::new(config.resolve_backup_dir(command.backup_dir.as_deref()));
    let report = fix_directory(&directory, &store, command.dry_run);
    finish(&report, &command.format)
}

pub fn validate_directory(directory: &Path, catalog: &NodeTypeCatalog) -> RunReport {
    let mut report = RunReport::new(RunKind::Validate, directory.to_path_buf());
    let files = match list_workflow_files(directory) {
        Ok(files) => files,
        Err(notice) => {
            warn!(directory = %directory.display(), notice = notice.message(), "skipping directory");
            report.notice = Some(notice);
            return report;
        }
    };

    for path in files {
        info!(file = %path.display(), "validating");
        report
            .files
            .insert(file_name(&path), validate_file(&path, catalog));
    }
    report
}

pub fn validate_file(path: &Path, catalog: &NodeTypeCatalog) -> FileReport {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => return FileReport::failure(format!("Error reading file: {error}")),
    };
    let validation = validate_workflow_text(&text, catalog);
    FileReport {
        failed: !validation.is_valid(),
        messages: validation.messages(),
        warnings: validation.warning_messages(),
    }
}

pub fn fix_directory(directory: &Path, store: &BackupStore, dry_run: bool) -> RunReport {
    let mut report = RunReport::new(RunKind::Fix, directory.to_path_buf());
    let files = match list_workflow_files(directory) {
        Ok(files) => files,
        Err(notice) => {
            warn!(directory = %directory.display(), notice = notice.message(), "skipping directory");
            report.notice = Some(notice);
            return report;
        }
    };

    if !dry_run {
        report.backup_dir = Some(store.dir().to_path_buf());
    }
    for path in files {
        info!(file = %path.display(), dry_run, "fixing");
        let file_report = fix_file(&path, store, &RepairContext::current(), dry_run);
        report.files.insert(file_name(&path), file_report);
    }
    report
}

/// Snapshot, then mutate: nothing is backed up or written unless the file
/// parses and repair produced changes.
pub fn fix_file(
    path: &Path,
    store: &BackupStore,
    context: &RepairContext,
    dry_run: bool,
) -> FileReport {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => return FileReport::failure(format!("Error reading file: {error}")),
    };
    let document = match parse_workflow_json(&text) {
        Ok(document) => document,
        Err(issues) => {
            return FileReport {
                messages: issues.into_iter().map(|issue| issue.message).collect(),
                warnings: Vec::new(),
                failed: true,
            }
        }
    };
    let outcome = match repair_workflow(document, context) {
        Ok(outcome) => outcome,
        Err(error) => return FileReport::failure(error.to_string()),
    };
    if outcome.is_unchanged() || dry_run {
        return FileReport {
            messages: outcome.changes,
            ..FileReport::default()
        };
    }

    let backup = match store.backup(path, context.now) {
        Ok(backup) => backup,
        Err(error) => return FileReport::failure(format!("Error creating backup: {error}")),
    };
    let mut messages = vec![format!("Backup created: {}", backup.display())];
    messages.extend(outcome.changes);

    let failed = match write_workflow_document(path, &outcome.document) {
        Ok(()) => {
            messages.push("Workflow file updated successfully".to_string());
            false
        }
        Err(error) => {
            messages.push(format!("Error writing fixed file: {error}"));
            true
        }
    };
    FileReport {
        messages,
        warnings: Vec::new(),
        failed,
    }
}

fn read_config(path: Option<&Path>) -> Result<RunnerConfig, RunnerError> {
    match path {
        Some(path) => Ok(load_runner_config(path)?),
        None => Ok(RunnerConfig::default()),
    }
}

fn finish(report: &RunReport, format: &OutputFormat) -> Result<RunOutput, RunnerError> {
    Ok(RunOutput {
        rendered: render_report(report, format)?,
        exit_code: report.exit_code(),
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
