//! Terminal I/O utilities for the CLI.

use std::io::{self, IsTerminal};

/// Print a status message to stderr if running in a terminal.
pub fn status(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}", message);
    }
}
