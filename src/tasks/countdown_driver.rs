//! Countdown driver: a repeating one-second tick source feeding the label

use std::time::Duration;

use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant},
};
use tracing::{debug, info};

use super::events::{EventSender, TimerEvent};
use crate::{
    services::RenderSurface,
    state::{CountdownState, RunId},
};

/// Interval between two countdown ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Owns the per-second counter and its recurring tick schedule
#[derive(Debug)]
pub struct CountdownDriver {
    state: CountdownState,
    period: Duration,
    run: Option<RunId>,
    started: Option<Instant>,
    ticker: Option<JoinHandle<()>>,
    events: EventSender,
}

impl CountdownDriver {
    pub fn new(total_seconds: u64, events: EventSender) -> Self {
        Self {
            state: CountdownState::new(total_seconds),
            period: TICK_PERIOD,
            run: None,
            started: None,
            ticker: None,
            events,
        }
    }

    /// Reset the counter, render it and schedule a tick every period until stopped.
    ///
    /// Any schedule from a previous start is cancelled first.
    pub fn start<S>(&mut self, run: RunId, total_seconds: u64, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        self.stop();

        self.state = CountdownState::new(total_seconds);
        surface.render_label(&self.state.label());

        let start = Instant::now();
        let period = self.period;
        let events = self.events.clone();
        let ticker = tokio::spawn(async move {
            let mut ticks = interval_at(start + period, period);
            loop {
                ticks.tick().await;
                if events.send(TimerEvent::Tick(run)).is_err() {
                    break;
                }
            }
        });

        self.run = Some(run);
        self.started = Some(start);
        self.ticker = Some(ticker);
        info!("Countdown started for {} from {}s", run, total_seconds);
    }

    /// Handle a tick. Returns false (and does nothing) for ticks that do not
    /// belong to the running schedule.
    pub fn on_tick<S>(&mut self, run: RunId, surface: &mut S) -> bool
    where
        S: RenderSurface + ?Sized,
    {
        if self.run != Some(run) {
            debug!("Ignoring tick from {} (current: {:?})", run, self.run);
            return false;
        }

        let remaining = self.state.decrement();
        surface.render_label(&self.state.label());
        debug!("Tick for {}: {}s remaining", run, remaining);
        true
    }

    /// Bring the label to the value implied by whole seconds elapsed since start
    pub fn settle<S>(&mut self, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        let Some(started) = self.started else {
            return;
        };
        if self.run.is_none() {
            return;
        }

        let elapsed = started.elapsed().as_secs();
        let before = self.state.seconds_remaining;
        if self.state.settle(elapsed) != before {
            surface.render_label(&self.state.label());
        }
    }

    /// Cancel the recurring schedule. Safe to call when not running.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        if let Some(run) = self.run.take() {
            info!(
                "Countdown stopped for {} at {}s",
                run, self.state.seconds_remaining
            );
        }
        self.started = None;
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.run
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.state.seconds_remaining
    }

    pub fn label(&self) -> String {
        self.state.label()
    }
}

impl Drop for CountdownDriver {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}
