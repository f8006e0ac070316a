//! Events posted by scheduled tasks to the controller's event loop

use tokio::sync::mpsc;

use crate::state::RunId;

/// Callback scheduled on the event loop, tagged with the run that scheduled it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One-second countdown tick
    Tick(RunId),
    /// The ring animation wants a redraw
    AnimationFrame(RunId),
    /// The ring animation reached its full duration
    AnimationFinished(RunId),
}

impl TimerEvent {
    pub fn run(&self) -> RunId {
        match self {
            TimerEvent::Tick(run)
            | TimerEvent::AnimationFrame(run)
            | TimerEvent::AnimationFinished(run) => *run,
        }
    }
}

pub type EventSender = mpsc::UnboundedSender<TimerEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<TimerEvent>;

/// Create the channel connecting scheduled tasks to the event loop
pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
