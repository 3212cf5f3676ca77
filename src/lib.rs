pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod language;
pub mod logging;
pub mod output;
pub mod process;

pub use error::{CommitGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_REJECTED: i32 = 1;
pub const EXIT_TOOL_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
