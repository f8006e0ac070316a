//! Recording collaborators and clock helpers shared by the integration tests

#![allow(dead_code)]

use std::time::Duration;

use ring_countdown::{
    services::{CompletionPrompt, ModalPresenter, PromptOutcome, RenderSurface, RestartControl},
    state::{RingGeometry, RunId},
    tasks::TimerEvent,
    TimerController, TimerSettings,
};
use tokio::{
    sync::mpsc::UnboundedReceiver,
    time::{sleep_until, Instant},
};

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub geometry: Option<RingGeometry>,
    pub labels: Vec<String>,
    pub strokes: Vec<f64>,
}

impl RecordingSurface {
    pub fn label(&self) -> &str {
        self.labels.last().map(String::as_str).unwrap_or("")
    }

    pub fn stroke(&self) -> f64 {
        self.strokes.last().copied().unwrap_or(f64::NAN)
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_rings(&mut self, geometry: &RingGeometry) {
        self.geometry = Some(geometry.clone());
    }

    fn render_label(&mut self, text: &str) {
        self.labels.push(text.to_string());
    }

    fn render_stroke(&mut self, fraction: f64) {
        self.strokes.push(fraction);
    }
}

#[derive(Debug, Default)]
pub struct RecordingControl {
    pub history: Vec<bool>,
}

impl RecordingControl {
    pub fn enabled(&self) -> bool {
        self.history.last().copied().unwrap_or(false)
    }
}

impl RestartControl for RecordingControl {
    fn set_enabled(&mut self, enabled: bool) {
        self.history.push(enabled);
    }
}

#[derive(Debug, Default)]
pub struct RecordingModal {
    pub presented: Vec<CompletionPrompt>,
    pub dismissed: Vec<(RunId, PromptOutcome)>,
}

impl ModalPresenter for RecordingModal {
    fn present(&mut self, prompt: &CompletionPrompt) {
        self.presented.push(prompt.clone());
    }

    fn dismiss(&mut self, prompt: &CompletionPrompt, outcome: PromptOutcome) {
        self.dismissed.push((prompt.run, outcome));
    }
}

pub type TestController = TimerController<RecordingSurface, RecordingControl, RecordingModal>;

pub fn controller(settings: TimerSettings) -> TestController {
    TimerController::new(
        settings,
        RecordingSurface::default(),
        RecordingControl::default(),
        RecordingModal::default(),
    )
}

pub fn settings(seconds: u64) -> TimerSettings {
    TimerSettings {
        total_seconds: seconds,
        duration: Duration::from_secs(seconds),
        ..TimerSettings::default()
    }
}

pub fn secs(seconds: f64) -> Duration {
    Duration::from_secs_f64(seconds)
}

/// Dispatch scheduled callbacks until `deadline`
pub async fn pump_until(controller: &mut TestController, deadline: Instant) {
    loop {
        tokio::select! {
            biased;
            event = controller.next_event() => match event {
                Some(event) => controller.handle_event(event),
                None => break,
            },
            _ = sleep_until(deadline) => break,
        }
    }
}

/// Collect raw events from a scheduler channel until `deadline`
pub async fn collect_until(
    events: &mut UnboundedReceiver<TimerEvent>,
    deadline: Instant,
) -> Vec<TimerEvent> {
    let mut received = Vec::new();
    loop {
        tokio::select! {
            biased;
            event = events.recv() => match event {
                Some(event) => received.push(event),
                None => break,
            },
            _ = sleep_until(deadline) => break,
        }
    }
    received
}
