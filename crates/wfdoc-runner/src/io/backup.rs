use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Destination for untouched copies of files about to be rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupStore {
    dir: PathBuf,
}

impl BackupStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Copies `source` to `<dir>/<stem>_<YYYYmmdd_HHMMSS>.json`. Two backups
    /// of the same file within one second share a name.
    pub fn backup(&self, source: &Path, at: DateTime<Utc>) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let stem = source
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "workflow".to_string());
        let target = self
            .dir
            .join(format!("{stem}_{}.json", at.format("%Y%m%d_%H%M%S")));
        fs::copy(source, &target)?;
        Ok(target)
    }
}

#[cfg(test)]
#[path = "backup_test.rs"]
mod tests;
