//! Configuration and CLI argument handling

use std::time::Duration;

use anyhow::ensure;
use clap::Parser;

use crate::{
    state::{FRACTION_OF_CIRCLE, TOTAL_SECONDS},
    tasks::AnimationSpec,
};

/// Default redraw rate of the ring animation
pub const DEFAULT_FPS: u32 = 30;

/// Longest run accepted on the command line (one day)
pub const MAX_SECONDS: u64 = 24 * 60 * 60;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "ring-countdown")]
#[command(about = "A countdown timer that drains a progress ring in step with a per-second label")]
#[command(version)]
pub struct Config {
    /// Length of a run in seconds
    #[arg(short, long, default_value_t = TOTAL_SECONDS)]
    pub seconds: u64,

    /// Initial fill of the progress ring (1.0 is the full circle)
    #[arg(short, long, default_value_t = FRACTION_OF_CIRCLE)]
    pub fraction: f64,

    /// Ring redraws per second
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Reject values the timer cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.seconds >= 1, "--seconds must be at least 1, got {}", self.seconds);
        ensure!(
            self.seconds <= MAX_SECONDS,
            "--seconds must be at most {}, got {}",
            MAX_SECONDS,
            self.seconds
        );
        ensure!(
            self.fraction > 0.0 && self.fraction <= 1.0,
            "--fraction must be in (0.0, 1.0], got {}",
            self.fraction
        );
        ensure!(self.fps >= 1, "--fps must be at least 1");
        Ok(())
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Settings handed to the controller
    pub fn timer_settings(&self) -> TimerSettings {
        TimerSettings {
            total_seconds: self.seconds,
            duration: Duration::from_secs(self.seconds),
            fraction_of_circle: self.fraction,
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1))),
        }
    }
}

/// Fixed parameters of every run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerSettings {
    pub total_seconds: u64,
    pub duration: Duration,
    pub fraction_of_circle: f64,
    pub frame_interval: Duration,
}

impl TimerSettings {
    /// Animation draining the ring from its initial fill down to nothing
    pub fn animation_spec(&self) -> AnimationSpec {
        AnimationSpec {
            duration: self.duration,
            from_fraction: self.fraction_of_circle,
            to_fraction: 0.0,
            frame_interval: self.frame_interval,
        }
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            total_seconds: TOTAL_SECONDS,
            duration: Duration::from_secs(TOTAL_SECONDS),
            fraction_of_circle: FRACTION_OF_CIRCLE,
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(DEFAULT_FPS)),
        }
    }
}
