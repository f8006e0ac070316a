//! Ring Countdown - a single-screen countdown timer
//!
//! This is the main entry point for the ring-countdown application.

use futures::stream::{self, StreamExt};
use tracing::{debug, error, info};

use ring_countdown::{
    config::Config,
    controller::TimerController,
    services::{TerminalControl, TerminalModal, TerminalSurface},
    utils::{restart_signals, shutdown_signal, stdin_commands},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level; stdout belongs to the ring
    tracing_subscriber::fmt()
        .with_env_filter(format!("ring_countdown={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    config.validate()?;

    info!("Starting ring-countdown v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: seconds={}, fraction={}, fps={}",
        config.seconds, config.fraction, config.fps
    );

    let restarts = match restart_signals() {
        Ok(restarts) => restarts,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    };
    let commands = stream::select(stdin_commands(), restarts).boxed();

    // Initial load starts the first run
    let mut controller = TimerController::launch(
        config.timer_settings(),
        TerminalSurface::new(),
        TerminalControl::new(),
        TerminalModal::new(),
    );
    debug!("Initial state: {}", serde_json::to_string(&controller.snapshot())?);

    controller
        .run(commands, async {
            if let Err(e) = shutdown_signal().await {
                error!("{:#}", e);
                // Still reachable through the quit command
                futures::future::pending::<()>().await;
            }
        })
        .await;

    println!();
    debug!("Final state: {}", serde_json::to_string(&controller.snapshot())?);
    info!("Shutdown complete");
    Ok(())
}
