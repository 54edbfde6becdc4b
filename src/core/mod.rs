// Public modules
pub mod config;
pub mod error;
pub mod output;
pub mod runner;
pub mod service;
pub mod shell;
pub mod task;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use runner::CommandOutput;
pub use task::{Task, TaskSource, TaskTable};
