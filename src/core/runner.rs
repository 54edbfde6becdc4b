//! Task dispatch: spawn the task's program directly (no shell) and
//! propagate its exit status.

use std::process::{Command, Stdio};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::task::Task;

/// Captured output from a dispatched command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOutput {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stdout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr: String,
    pub success: bool,
    pub exit_code: i32,
}

/// Run a task with inherited stdio and return the tool's exit code.
///
/// This is the Makefile-style path: the tool owns the terminal for its
/// lifetime (needed for `start`, which runs a reloading dev server) and
/// its exit status becomes ours.
pub fn dispatch(task: &Task) -> Result<i32> {
    let status = Command::new(task.resolved_program())
        .args(&task.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| Error::task_spawn_failed(&task.name, &task.program, e.to_string()))?;

    Ok(status.code().unwrap_or(-1))
}

/// Run a task capturing stdout/stderr instead of inheriting them.
pub fn dispatch_captured(task: &Task) -> Result<CommandOutput> {
    let out = Command::new(task.resolved_program())
        .args(&task.args)
        .output()
        .map_err(|e| Error::task_spawn_failed(&task.name, &task.program, e.to_string()))?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&out.stdout).to_string(),
        stderr: String::from_utf8_lossy(&out.stderr).to_string(),
        success: out.status.success(),
        exit_code: out.status.code().unwrap_or(-1),
    })
}
