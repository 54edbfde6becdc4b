//! The task table: named tasks mapped to fixed external commands.
//!
//! Built-in entries cover the web-service project profile. A project's
//! `runbook.toml` may restate an entry or add new ones; resolution never
//! mutates the table.

use serde::Serialize;

use crate::error::Result;
use crate::shell;

/// Where a resolved task definition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskSource {
    Builtin,
    Config,
}

/// One named task: a program and its fixed argument list.
///
/// There is no argument substitution and no branching; dispatching a task
/// runs exactly this command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: TaskSource,
}

impl Task {
    fn builtin(name: &str, program: &str, args: &[&str], description: &str) -> Self {
        Self {
            name: name.to_string(),
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            description: Some(description.to_string()),
            source: TaskSource::Builtin,
        }
    }

    /// Program path with `~` expanded, for configured tasks pointing at
    /// tools under the user's home directory.
    pub fn resolved_program(&self) -> String {
        shellexpand::tilde(&self.program).to_string()
    }

    /// Copy-pasteable rendering of the command this task dispatches.
    pub fn command_line(&self) -> String {
        let mut parts = vec![shell::quote_arg(&self.program)];
        if !self.args.is_empty() {
            parts.push(shell::quote_args(&self.args));
        }
        parts.join(" ")
    }
}

/// The five built-in targets, in their documented order.
pub fn builtin_tasks() -> Vec<Task> {
    vec![
        Task::builtin(
            "start",
            "uvicorn",
            &["app.main:app", "--reload"],
            "Launch the development web server with reload-on-change",
        ),
        Task::builtin(
            "spellcheck",
            "codespell",
            &["app", "tests"],
            "Spell-check the source and test directories",
        ),
        Task::builtin(
            "test",
            "pytest",
            &["--cov=app", "--cov-report=xml"],
            "Run the test suite with an XML coverage report for the app package",
        ),
        Task::builtin(
            "build",
            "docker",
            &["build", "-t", "fastapi-azure-demo", "."],
            "Build the container image from the local build context",
        ),
        Task::builtin(
            "requirements",
            "poetry",
            &[
                "export",
                "-f",
                "requirements.txt",
                "--output",
                "requirements.txt",
                "--without-hashes",
            ],
            "Export the locked dependency set without integrity hashes",
        ),
    ]
}

/// Resolved task table for one invocation. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct TaskTable {
    tasks: Vec<Task>,
}

impl TaskTable {
    /// Table containing only the built-in targets.
    pub fn builtin() -> Self {
        Self {
            tasks: builtin_tasks(),
        }
    }

    /// Built-ins with configured tasks applied: a configured task with a
    /// built-in's name replaces it in place; new names are appended in
    /// the order the config declares them.
    pub fn with_overrides(overrides: Vec<Task>) -> Self {
        let mut tasks = builtin_tasks();
        for over in overrides {
            match tasks.iter_mut().find(|t| t.name == over.name) {
                Some(existing) => *existing = over,
                None => tasks.push(over),
            }
        }
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn names(&self) -> Vec<String> {
        self.tasks.iter().map(|t| t.name.clone()).collect()
    }

    pub fn resolve(&self, name: &str) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| crate::Error::task_not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn builtin_table_has_the_five_targets_in_order() {
        let table = TaskTable::builtin();
        assert_eq!(
            table.names(),
            vec!["start", "spellcheck", "test", "build", "requirements"]
        );
    }

    #[test]
    fn builtin_commands_match_their_documented_invocations() {
        let table = TaskTable::builtin();
        assert_eq!(
            table.resolve("start").unwrap().command_line(),
            "uvicorn app.main:app --reload"
        );
        assert_eq!(
            table.resolve("spellcheck").unwrap().command_line(),
            "codespell app tests"
        );
        assert_eq!(
            table.resolve("test").unwrap().command_line(),
            "pytest --cov=app --cov-report=xml"
        );
        assert_eq!(
            table.resolve("build").unwrap().command_line(),
            "docker build -t fastapi-azure-demo ."
        );
        assert_eq!(
            table.resolve("requirements").unwrap().command_line(),
            "poetry export -f requirements.txt --output requirements.txt --without-hashes"
        );
    }

    #[test]
    fn resolve_unknown_name_is_task_not_found() {
        let table = TaskTable::builtin();
        let err = table.resolve("deploy").unwrap_err();
        assert_eq!(err.code, ErrorCode::TaskNotFound);
    }

    #[test]
    fn override_replaces_builtin_in_place() {
        let over = Task {
            name: "test".to_string(),
            program: "cargo".to_string(),
            args: vec!["test".to_string()],
            description: None,
            source: TaskSource::Config,
        };
        let table = TaskTable::with_overrides(vec![over]);

        let task = table.resolve("test").unwrap();
        assert_eq!(task.program, "cargo");
        assert_eq!(task.source, TaskSource::Config);
        // Position is preserved
        assert_eq!(table.names()[2], "test");
    }

    #[test]
    fn new_configured_task_is_appended() {
        let over = Task {
            name: "fmt".to_string(),
            program: "black".to_string(),
            args: vec!["app".to_string()],
            description: None,
            source: TaskSource::Config,
        };
        let table = TaskTable::with_overrides(vec![over]);
        assert_eq!(table.tasks().len(), 6);
        assert_eq!(table.names()[5], "fmt");
    }

    #[test]
    fn resolved_program_expands_tilde() {
        let task = Task {
            name: "fmt".to_string(),
            program: "~/bin/black".to_string(),
            args: vec![],
            description: None,
            source: TaskSource::Config,
        };
        assert!(!task.resolved_program().starts_with('~'));
    }
}
