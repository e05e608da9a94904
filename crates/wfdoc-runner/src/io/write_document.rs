use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use wfdoc_sdk::render_workflow_json;

/// Writes next to `path` first and renames over it, so a failed write never
/// leaves a truncated workflow behind.
pub fn write_workflow_document(path: &Path, document: &Value) -> io::Result<()> {
    let rendered = render_workflow_json(document).map_err(io::Error::other)?;
    let tmp_path = path.with_extension(format!("json.tmp.{}", std::process::id()));
    fs::write(&tmp_path, rendered)?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
#[path = "write_document_test.rs"]
mod tests;
