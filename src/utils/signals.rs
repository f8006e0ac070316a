//! Signal handling: graceful shutdown and the restart trigger

use anyhow::Context;
use futures::stream::{Stream, StreamExt};
use signal_hook_tokio::Signals;
use tracing::info;

use super::commands::Command;

/// Wait for shutdown signals (SIGTERM, SIGINT)
pub async fn shutdown_signal() -> anyhow::Result<()> {
    let mut signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ])
    .context("Failed to create shutdown signal handler")?;

    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
    Ok(())
}

/// Stream yielding a restart command for every SIGUSR1
pub fn restart_signals() -> anyhow::Result<impl Stream<Item = Command>> {
    let signals = Signals::new([signal_hook::consts::SIGUSR1])
        .context("Failed to create restart signal handler")?;

    Ok(signals.map(|signal| {
        info!("Received signal {}, replaying", signal);
        Command::Restart
    }))
}
