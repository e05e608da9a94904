mod cli;
mod config;
mod io;
mod report;
mod run;

pub use cli::{Cli, Commands, FixCommand, OutputFormat, ValidateCommand};
pub use config::{
    load_runner_config, validate_runner_config, RunnerConfig, RunnerConfigError,
    DEFAULT_BACKUP_DIR, DEFAULT_WORKFLOW_DIR,
};
pub use io::{list_workflow_files, write_workflow_document, BackupStore, DirectoryNotice};
pub use report::{render_report, FileReport, RunKind, RunReport};
pub use run::{
    execute_fix, execute_validate, fix_directory, fix_file, validate_directory, validate_file,
    RunOutput, RunnerError,
};
