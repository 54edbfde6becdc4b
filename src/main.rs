use clap::{Parser, Subcommand};

mod commands;
mod tty;

use commands::{run, task, GlobalArgs};
use runbook::output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Passthrough,
}

#[derive(Parser)]
#[command(name = "runbook")]
#[command(version = VERSION)]
#[command(about = "Task runner for web-service project workflows")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the development web server with reload-on-change
    Start,
    /// Spell-check the source and test directories
    Spellcheck,
    /// Run the test suite with coverage reporting
    Test,
    /// Build the container image
    Build,
    /// Export the locked dependency set
    Requirements,
    /// Dispatch any task by name
    Run(run::RunArgs),
    /// Inspect the resolved task table
    Task(task::TaskArgs),
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Task(_) => ResponseMode::Json,
        _ => ResponseMode::Passthrough,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    match response_mode(&cli.command) {
        ResponseMode::Passthrough => {
            // The dispatched tool owns stdio; we only surface resolution
            // failures through the JSON envelope.
            match commands::run_passthrough(cli.command, &global) {
                Ok(exit_code) => std::process::ExitCode::from(exit_code_to_u8(exit_code)),
                Err(err) => {
                    let (json_result, exit_code) =
                        output::map_cmd_result_to_json::<serde_json::Value>(Err(err));
                    output::print_json_result(json_result).ok();
                    std::process::ExitCode::from(exit_code_to_u8(exit_code))
                }
            }
        }
        ResponseMode::Json => {
            let (json_result, exit_code) = commands::run_json(cli.command, &global);
            output::print_json_result(json_result).ok();
            std::process::ExitCode::from(exit_code_to_u8(exit_code))
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code == 0 {
        0
    } else if code < 0 {
        // Tool died without an exit code (signal)
        1
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
