pub type CmdResult<T> = runbook::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod run;
pub mod task;

/// Handle a JSON-mode command and map its result for envelope printing.
pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (runbook::Result<serde_json::Value>, i32) {
    crate::tty::status("runbook is working...");

    match command {
        crate::Commands::Task(args) => runbook::output::map_cmd_result_to_json(task::run(args, global)),
        _ => {
            let err = runbook::Error::internal_unexpected(
                "Command uses passthrough output mode",
            );
            runbook::output::map_cmd_result_to_json::<serde_json::Value>(Err(err))
        }
    }
}

/// Handle a dispatch command: the external tool inherits our stdio and
/// its exit code becomes ours.
pub(crate) fn run_passthrough(
    command: crate::Commands,
    global: &GlobalArgs,
) -> runbook::Result<i32> {
    match command {
        crate::Commands::Start => run::dispatch_named("start", global),
        crate::Commands::Spellcheck => run::dispatch_named("spellcheck", global),
        crate::Commands::Test => run::dispatch_named("test", global),
        crate::Commands::Build => run::dispatch_named("build", global),
        crate::Commands::Requirements => run::dispatch_named("requirements", global),
        crate::Commands::Run(args) => run::run(args, global),
        crate::Commands::Task(_) => Err(runbook::Error::internal_unexpected(
            "Command uses JSON output mode",
        )),
    }
}
