//! Project-local task configuration.
//!
//! A `runbook.toml` at the project root may restate built-in tasks or add
//! new ones. The file is read once per invocation; a missing file means
//! the built-in table is used as-is.
//!
//! ```toml
//! [[task]]
//! name = "fmt"
//! program = "black"
//! args = ["app", "tests"]
//! description = "Format sources"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::task::{Task, TaskSource, TaskTable};

pub const CONFIG_FILE: &str = "runbook.toml";

#[derive(Debug, Default, Deserialize)]
pub struct RunbookConfig {
    #[serde(default, rename = "task")]
    pub tasks: Vec<TaskEntry>,
}

/// One `[[task]]` entry as declared in the file.
#[derive(Debug, Deserialize)]
pub struct TaskEntry {
    pub name: String,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TaskEntry {
    fn into_task(self) -> Result<Task> {
        if self.name.trim().is_empty() {
            return Err(Error::config_invalid_value(
                "task.name",
                None,
                "Task name must not be empty",
            ));
        }
        if self.program.trim().is_empty() {
            return Err(Error::config_invalid_value(
                "task.program",
                Some(self.name.clone()),
                "Task program must not be empty",
            ));
        }

        Ok(Task {
            name: self.name,
            program: self.program,
            args: self.args,
            description: self.description,
            source: TaskSource::Config,
        })
    }
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Parse the config file under `dir`. A missing file yields the default
/// (empty) config; a malformed file is an error.
pub fn load_from(dir: &Path) -> Result<RunbookConfig> {
    let path = config_path(dir);
    if !path.exists() {
        return Ok(RunbookConfig::default());
    }

    let raw = std::fs::read_to_string(&path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    toml::from_str(&raw).map_err(|e| Error::config_invalid_toml(path.display().to_string(), e.to_string()))
}

/// Resolve the task table for `dir`: built-ins with the file's entries
/// applied on top.
pub fn load_table_from(dir: &Path) -> Result<TaskTable> {
    let config = load_from(dir)?;

    let mut overrides = Vec::with_capacity(config.tasks.len());
    for entry in config.tasks {
        overrides.push(entry.into_task()?);
    }

    if !overrides.is_empty() {
        crate::log_status!("config", "Loaded {} task override(s) from {}", overrides.len(), CONFIG_FILE);
    }

    Ok(TaskTable::with_overrides(overrides))
}

/// Resolve the task table for the current working directory.
pub fn load_table() -> Result<TaskTable> {
    let cwd = std::env::current_dir()
        .map_err(|e| Error::internal_io(e.to_string(), Some("resolve working directory".to_string())))?;
    load_table_from(&cwd)
}
