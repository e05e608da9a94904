use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wfdoc_core::{FieldPath, IssueKind, StructuredIssue};
use wfdoc_sdk::NodeTypeCatalog;

pub const DEFAULT_WORKFLOW_DIR: &str = "./workflow";
pub const DEFAULT_BACKUP_DIR: &str = "workflow_backups";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    #[serde(default = "default_runner_schema")]
    pub schema: String,
    #[serde(default)]
    pub workflow_dir: Option<PathBuf>,
    #[serde(default)]
    pub backup_dir: Option<PathBuf>,
    #[serde(default)]
    pub known_node_types: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            schema: default_runner_schema(),
            workflow_dir: None,
            backup_dir: None,
            known_node_types: Vec::new(),
        }
    }
}

impl RunnerConfig {
    pub fn resolve_workflow_dir(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.workflow_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKFLOW_DIR))
    }

    pub fn resolve_backup_dir(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.backup_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BACKUP_DIR))
    }

    pub fn node_type_catalog(&self) -> NodeTypeCatalog {
        NodeTypeCatalog::new().with_extra_types(self.known_node_types.iter().cloned())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunnerConfigError {
    #[error("read runner config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("runner config parse failed: {0}")]
    Parse(String),
    #[error("runner config validation failed: {}", render_issues(.0))]
    Validation(Vec<StructuredIssue>),
}

/// Loads `path` as YAML or JSON (by extension, YAML first when unknown) after
/// expanding `${VAR}` placeholders from the environment.
pub fn load_runner_config(path: &Path) -> Result<RunnerConfig, RunnerConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| RunnerConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let expanded = expand_env_placeholders(raw.as_str()).map_err(RunnerConfigError::Parse)?;
    let config: RunnerConfig = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(expanded.as_str()).map_err(|error| {
            RunnerConfigError::Parse(format!("json decode error: {error}"))
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(expanded.as_str()).map_err(|error| {
            RunnerConfigError::Parse(format!("yaml decode error: {error}"))
        })?,
        _ => serde_yaml::from_str(expanded.as_str())
            .or_else(|_| serde_json::from_str(expanded.as_str()))
            .map_err(|error| RunnerConfigError::Parse(error.to_string()))?,
    };

    let file = path.display().to_string();
    let issues: Vec<StructuredIssue> = validate_runner_config(&config)
        .into_iter()
        .map(|issue| issue.with_file(file.as_str()))
        .collect();
    if !issues.is_empty() {
        return Err(RunnerConfigError::Validation(issues));
    }
    Ok(config)
}

pub fn validate_runner_config(config: &RunnerConfig) -> Vec<StructuredIssue> {
    let mut issues = Vec::new();
    if config.schema != default_runner_schema() {
        issues.push(config_issue(
            FieldPath::key("schema"),
            format!(
                "unsupported runner config schema `{}` (expected `{}`)",
                config.schema,
                default_runner_schema()
            ),
            "runner.config.schema",
        ));
    }
    for (field, dir) in [
        ("workflow_dir", &config.workflow_dir),
        ("backup_dir", &config.backup_dir),
    ] {
        if dir.as_ref().is_some_and(|dir| dir.as_os_str().is_empty()) {
            issues.push(config_issue(
                FieldPath::key(field),
                format!("{field} must not be empty"),
                "runner.config.dir_empty",
            ));
        }
    }
    for (index, node_type) in config.known_node_types.iter().enumerate() {
        if node_type.trim().is_empty() {
            issues.push(config_issue(
                FieldPath::key("known_node_types").child_index(index),
                "known node type must be a non-empty string".to_string(),
                "runner.config.known_node_types.empty",
            ));
        }
    }
    issues
}

fn config_issue(path: FieldPath, message: String, reference: &str) -> StructuredIssue {
    StructuredIssue::error(IssueKind::ConfigError, path, message, reference)
}

fn render_issues(issues: &[StructuredIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field_path, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

fn default_runner_schema() -> String {
    "wfdoc-runner/1".to_string()
}

fn expand_env_placeholders(input: &str) -> Result<String, String> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find('}') else {
            return Err("unterminated env placeholder `${...`".to_string());
        };
        let key = &after_open[..end];
        if key.is_empty() {
            return Err("empty env placeholder `${}`".to_string());
        }
        let value = std::env::var(key)
            .map_err(|_| format!("missing env var for placeholder `${{{key}}}`"))?;
        out.push_str(value.as_str());
        rest = &after_open[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
