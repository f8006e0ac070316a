//! Utility functions module
//!
//! Input sources feeding the controller: POSIX signals and stdin commands.

pub mod commands;
pub mod signals;

// Re-export main functions
pub use commands::{stdin_commands, Command};
pub use signals::{restart_signals, shutdown_signal};
