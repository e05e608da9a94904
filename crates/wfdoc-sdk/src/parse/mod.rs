mod json;

pub use json::{parse_workflow_json, render_workflow_json};

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
