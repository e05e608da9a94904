mod backup;
mod directory;
mod write_document;

pub use backup::BackupStore;
pub use directory::{list_workflow_files, DirectoryNotice};
pub use write_document::write_workflow_document;
