//! Timer controller
//!
//! Owns every piece of mutable state and runs the single event loop the
//! countdown ticks and animation frames are dispatched on.

mod completion;

use std::future::Future;

use futures::stream::{Stream, StreamExt};
use tracing::{debug, info, warn};

pub use completion::CompletionHandler;

use crate::{
    config::TimerSettings,
    services::{ModalPresenter, PromptChoice, PromptOutcome, RenderSurface, RestartControl},
    state::{RingGeometry, RunId, RunPhase, TimerSnapshot},
    tasks::{event_channel, CountdownDriver, EventReceiver, RingAnimator, TimerEvent},
    utils::Command,
};

/// Keeps the per-second countdown and the ring drain in step and reports
/// completion exactly once per run
pub struct TimerController<S, C, M> {
    settings: TimerSettings,
    animator: RingAnimator,
    completion: CompletionHandler<S, C, M>,
    events: EventReceiver,
}

impl<S, C, M> TimerController<S, C, M>
where
    S: RenderSurface,
    C: RestartControl,
    M: ModalPresenter,
{
    /// Lay out the rings and label. No run is started yet.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(settings: TimerSettings, mut surface: S, mut control: C, modal: M) -> Self {
        let (events_tx, events) = event_channel();

        surface.draw_rings(&RingGeometry::new(settings.fraction_of_circle));
        surface.render_label(&settings.total_seconds.to_string());
        surface.render_stroke(0.0);
        control.set_enabled(true);

        let driver = CountdownDriver::new(settings.total_seconds, events_tx.clone());
        Self {
            settings,
            animator: RingAnimator::new(events_tx),
            completion: CompletionHandler::new(driver, surface, control, modal),
            events,
        }
    }

    /// Set up the screen and start the first run, as on initial load
    pub fn launch(settings: TimerSettings, surface: S, control: C, modal: M) -> Self {
        let mut controller = Self::new(settings, surface, control, modal);
        controller.restart();
        controller
    }

    /// Start a new run, superseding whatever is in flight.
    ///
    /// The old animation is removed (its stop hook stops the old countdown)
    /// before the new countdown and animation are installed, all within this
    /// call.
    pub fn restart(&mut self) -> RunId {
        self.animator.cancel(&mut self.completion);
        self.completion.close_prompt(PromptOutcome::Superseded);

        let run = self.completion.lifecycle.begin();
        info!("Starting {}", run);

        self.completion.start_countdown(run, self.settings.total_seconds);
        self.animator
            .start(run, self.settings.animation_spec(), &mut self.completion);
        run
    }

    /// Pick an action on the open completion prompt
    pub fn select(&mut self, choice: PromptChoice) -> Option<PromptOutcome> {
        let outcome = self.completion.select(choice);
        if outcome.is_none() {
            debug!("No prompt open for {:?}", choice);
        }
        outcome
    }

    /// Dispatch one scheduled callback
    pub fn handle_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Tick(run) => {
                self.completion.on_tick(run);
            }
            TimerEvent::AnimationFrame(run) => {
                self.animator.on_frame(run, &mut self.completion);
            }
            TimerEvent::AnimationFinished(run) => {
                self.animator.on_finished(run, &mut self.completion);
            }
        }
    }

    /// Wait for the next scheduled callback
    pub async fn next_event(&mut self) -> Option<TimerEvent> {
        self.events.recv().await
    }

    /// Handle a user command. Returns false when the loop should stop.
    pub fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Restart => {
                self.restart();
            }
            Command::Select(choice) => {
                self.select(choice);
            }
            Command::Quit => {
                info!("Quit requested");
                return false;
            }
        }
        true
    }

    /// Event loop: scheduled callbacks and user commands until shutdown
    pub async fn run<R, F>(&mut self, commands: R, shutdown: F)
    where
        R: Stream<Item = Command> + Unpin,
        F: Future<Output = ()>,
    {
        let mut commands = commands.fuse();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutting down");
                    break;
                }
                Some(command) = commands.next() => {
                    if !self.handle_command(command) {
                        break;
                    }
                }
                event = self.events.recv() => match event {
                    Some(event) => self.handle_event(event),
                    None => {
                        warn!("Event channel closed");
                        break;
                    }
                },
            }
        }
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        let lifecycle = &self.completion.lifecycle;
        TimerSnapshot {
            phase: lifecycle.phase(),
            run: lifecycle.current(),
            seconds_remaining: self.completion.driver.seconds_remaining(),
            label: self.completion.driver.label(),
            stroke_fraction: self.completion.stroke_fraction,
            restart_enabled: self.completion.restart_enabled,
            prompts_presented: self.completion.prompts_presented,
            completed_runs: lifecycle.completed_runs(),
            cancelled_runs: lifecycle.cancelled_runs(),
            started_at: lifecycle.started_at(),
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.completion.lifecycle.phase()
    }

    pub fn is_restart_enabled(&self) -> bool {
        self.completion.restart_enabled
    }

    pub fn is_prompt_open(&self) -> bool {
        self.completion.prompt.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.completion.surface
    }

    pub fn control(&self) -> &C {
        &self.completion.control
    }

    pub fn modal(&self) -> &M {
        &self.completion.modal
    }
}
