use clap::{Args, Subcommand};
use serde::Serialize;

use runbook::config;
use runbook::task::{Task, TaskSource};

use super::CmdResult;

#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List the resolved task table
    List,
    /// Show one task, including the command line it dispatches
    Show {
        /// Task name
        name: String,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: TaskSource,
    pub command_line: String,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            program: task.program.clone(),
            args: task.args.clone(),
            description: task.description.clone(),
            source: task.source,
            command_line: task.command_line(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListOutput {
    pub tasks: Vec<TaskView>,
}

pub fn run(args: TaskArgs, _global: &super::GlobalArgs) -> CmdResult<serde_json::Value> {
    let table = config::load_table()?;

    let data = match args.command {
        TaskCommands::List => {
            let output = TaskListOutput {
                tasks: table.tasks().iter().map(TaskView::from).collect(),
            };
            serde_json::to_value(output)
        }
        TaskCommands::Show { name } => {
            let task = table.resolve(&name)?;
            serde_json::to_value(TaskView::from(task))
        }
    }
    .map_err(|e| runbook::Error::internal_json(e.to_string(), Some("serialize task view".to_string())))?;

    Ok((data, 0))
}
