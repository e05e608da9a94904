use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory-level outcome that replaces per-file processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum DirectoryNotice {
    Error(String),
    Warning(String),
}

impl DirectoryNotice {
    pub fn is_error(&self) -> bool {
        matches!(self, DirectoryNotice::Error(_))
    }

    pub fn message(&self) -> &str {
        match self {
            DirectoryNotice::Error(message) | DirectoryNotice::Warning(message) => message,
        }
    }
}

/// `.json` files directly inside `dir`, sorted by file name.
pub fn list_workflow_files(dir: &Path) -> Result<Vec<PathBuf>, DirectoryNotice> {
    if !dir.is_dir() {
        return Err(DirectoryNotice::Error(format!(
            "Directory {} does not exist",
            dir.display()
        )));
    }

    let entries = fs::read_dir(dir).map_err(|error| {
        DirectoryNotice::Error(format!("Failed to read directory {}: {error}", dir.display()))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|error| {
            DirectoryNotice::Error(format!("Failed to read directory {}: {error}", dir.display()))
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(DirectoryNotice::Warning(
            "No JSON files found in directory".to_string(),
        ));
    }
    files.sort_by(|left, right| left.file_name().cmp(&right.file_name()));
    Ok(files)
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
