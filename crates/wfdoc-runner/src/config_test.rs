use super::{load_runner_config, validate_runner_config, RunnerConfig, RunnerConfigError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("must write config fixture");
    path
}

#[test]
fn load_yaml_config_with_extra_node_types() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        "wfdoc.yaml",
        r#"
schema: wfdoc-runner/1
backup_dir: backups
known_node_types:
  - n8n-nodes-base.httpRequest
"#,
    );

    let config = load_runner_config(&path).expect("config must load");
    assert_eq!(config.backup_dir.as_deref(), Some(Path::new("backups")));
    assert!(config
        .node_type_catalog()
        .is_known("n8n-nodes-base.httpRequest"));
}

#[test]
fn load_json_config_expands_env_placeholders() {
    std::env::set_var("WFDOC_TEST_BACKUP_DIR", "/var/backups/wf");
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        "wfdoc.json",
        r#"{"schema":"wfdoc-runner/1","backup_dir":"${WFDOC_TEST_BACKUP_DIR}"}"#,
    );

    let config = load_runner_config(&path).expect("config must load");
    assert_eq!(
        config.backup_dir.as_deref(),
        Some(Path::new("/var/backups/wf"))
    );
}

#[test]
fn missing_env_var_is_a_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(
        &dir,
        "wfdoc.yaml",
        "backup_dir: ${WFDOC_TEST_DEFINITELY_UNSET_VAR}\n",
    );

    let err = load_runner_config(&path).expect_err("must fail");
    match err {
        RunnerConfigError::Parse(message) => {
            assert!(message.contains("WFDOC_TEST_DEFINITELY_UNSET_VAR"))
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn wrong_schema_is_rejected_with_file_attached() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "wfdoc.yaml", "schema: wfdoc-runner/9\n");

    let err = load_runner_config(&path).expect_err("must fail");
    match err {
        RunnerConfigError::Validation(issues) => {
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].reference, "runner.config.schema");
            assert_eq!(issues[0].file.as_deref(), Some(path.display().to_string().as_str()));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "wfdoc.yaml", "backup_directory: x\n");
    assert!(matches!(
        load_runner_config(&path),
        Err(RunnerConfigError::Parse(_))
    ));
}

#[test]
fn empty_node_type_entries_are_flagged() {
    let config = RunnerConfig {
        known_node_types: vec!["ok".to_string(), " ".to_string()],
        ..RunnerConfig::default()
    };
    let issues = validate_runner_config(&config);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field_path.to_string(), "$.known_node_types[1]");
}

#[test]
fn cli_values_override_config_and_defaults_apply_last() {
    let config = RunnerConfig {
        backup_dir: Some(PathBuf::from("from-config")),
        ..RunnerConfig::default()
    };
    assert_eq!(
        config.resolve_backup_dir(Some(Path::new("from-cli"))),
        PathBuf::from("from-cli")
    );
    assert_eq!(config.resolve_backup_dir(None), PathBuf::from("from-config"));
    assert_eq!(
        RunnerConfig::default().resolve_workflow_dir(None),
        PathBuf::from("./workflow")
    );
}
