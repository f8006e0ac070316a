//! Ring Countdown - a single-screen countdown timer
//!
//! A progress ring drains over a fixed duration in step with a numeric label
//! counting down once per second. When the ring runs out a two-choice prompt
//! is presented, exactly once per run. Restarting at any time supersedes the
//! run in flight.

pub mod config;
pub mod controller;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, TimerSettings};
pub use controller::TimerController;
pub use state::{RunId, RunPhase, TimerSnapshot};
pub use utils::signals::shutdown_signal;
