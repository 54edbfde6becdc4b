use clap::Args;

use runbook::{config, log_status, runner};

#[derive(Args)]
pub struct RunArgs {
    /// Task name to dispatch (built-in or from runbook.toml)
    pub name: String,
}

pub fn run(args: RunArgs, global: &super::GlobalArgs) -> runbook::Result<i32> {
    dispatch_named(&args.name, global)
}

/// Resolve `name` against the task table and dispatch it, returning the
/// tool's exit code.
pub fn dispatch_named(name: &str, _global: &super::GlobalArgs) -> runbook::Result<i32> {
    let table = config::load_table()?;
    let task = table.resolve(name)?;

    log_status!("run", "{} -> {}", task.name, task.command_line());

    runner::dispatch(task)
}
