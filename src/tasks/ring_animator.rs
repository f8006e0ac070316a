//! Ring animator: a continuous, linear stroke drain over a fixed duration

use std::time::Duration;

use tokio::{
    task::JoinHandle,
    time::{interval_at, sleep_until, Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use super::events::{EventSender, TimerEvent};

/// Longest animation the clock will schedule; longer durations are capped.
pub const MAX_ANIMATION_DURATION: Duration = Duration::from_secs(365 * 24 * 60 * 60);
use crate::state::{RingState, RunId};

/// Parameters of one stroke animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub from_fraction: f64,
    pub to_fraction: f64,
    pub frame_interval: Duration,
}

/// Hooks the animator calls into
pub trait AnimationDelegate {
    /// The animation for `run` became active
    fn on_animation_start(&mut self, run: RunId);

    /// The animation for `run` ended, either by reaching its duration or by removal
    fn on_animation_stop(&mut self, run: RunId, completed_naturally: bool);

    /// Draw the stroke proportion computed by the animator
    fn draw_stroke(&mut self, fraction: f64);
}

#[derive(Debug)]
struct InFlight {
    run: RunId,
    ring: RingState,
    started: Instant,
    clock: JoinHandle<()>,
}

/// Runs at most one stroke animation at a time
#[derive(Debug)]
pub struct RingAnimator {
    in_flight: Option<InFlight>,
    // Value left on the layer once no animation is attached.
    model_fraction: f64,
    events: EventSender,
}

impl RingAnimator {
    pub fn new(events: EventSender) -> Self {
        Self {
            in_flight: None,
            model_fraction: 0.0,
            events,
        }
    }

    /// Start a new animation, removing any animation still in flight first
    pub fn start<D>(&mut self, run: RunId, spec: AnimationSpec, delegate: &mut D)
    where
        D: AnimationDelegate + ?Sized,
    {
        self.cancel(delegate);

        let started = Instant::now();
        let duration = spec.duration.min(MAX_ANIMATION_DURATION);
        if duration < spec.duration {
            warn!("Animation duration {:?} capped to {:?}", spec.duration, duration);
        }
        let events = self.events.clone();
        let clock = tokio::spawn(async move {
            let deadline = sleep_until(started + duration);
            tokio::pin!(deadline);

            let frame_interval = spec.frame_interval.max(Duration::from_millis(1));
            let mut frames = interval_at(started + frame_interval, frame_interval);
            frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = &mut deadline => {
                        let _ = events.send(TimerEvent::AnimationFinished(run));
                        break;
                    }
                    _ = frames.tick() => {
                        if events.send(TimerEvent::AnimationFrame(run)).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        self.in_flight = Some(InFlight {
            run,
            ring: RingState::new(spec.from_fraction, spec.to_fraction, duration),
            started,
            clock,
        });
        self.model_fraction = spec.to_fraction;

        info!(
            "Ring animation started for {}: {} -> {} over {:?}",
            run, spec.from_fraction, spec.to_fraction, spec.duration
        );
        delegate.draw_stroke(spec.from_fraction);
        delegate.on_animation_start(run);
    }

    /// Remove the animation in flight, if any
    pub fn cancel<D>(&mut self, delegate: &mut D)
    where
        D: AnimationDelegate + ?Sized,
    {
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };

        in_flight.clock.abort();
        info!("Ring animation removed for {}", in_flight.run);
        delegate.draw_stroke(self.model_fraction);
        delegate.on_animation_stop(in_flight.run, false);
    }

    /// Redraw the stroke for the current instant
    pub fn on_frame<D>(&mut self, run: RunId, delegate: &mut D) -> bool
    where
        D: AnimationDelegate + ?Sized,
    {
        let Some(in_flight) = self.in_flight.as_ref().filter(|f| f.run == run) else {
            debug!("Ignoring frame from {}", run);
            return false;
        };

        let fraction = in_flight.ring.fraction_at(in_flight.started.elapsed());
        delegate.draw_stroke(fraction);
        true
    }

    /// Complete the animation for `run` after its full duration
    pub fn on_finished<D>(&mut self, run: RunId, delegate: &mut D) -> bool
    where
        D: AnimationDelegate + ?Sized,
    {
        if self.current_run() != Some(run) {
            debug!("Ignoring completion from {}", run);
            return false;
        }
        let Some(in_flight) = self.in_flight.take() else {
            return false;
        };

        info!(
            "Ring animation for {} completed after {:?}",
            run,
            in_flight.started.elapsed()
        );
        delegate.draw_stroke(in_flight.ring.to_fraction);
        delegate.on_animation_stop(run, true);
        true
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.in_flight.as_ref().map(|f| f.run)
    }

    /// Stroke proportion currently presented
    pub fn presented_fraction(&self) -> f64 {
        match &self.in_flight {
            Some(in_flight) => in_flight.ring.fraction_at(in_flight.started.elapsed()),
            None => self.model_fraction,
        }
    }
}

impl Drop for RingAnimator {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.clock.abort();
        }
    }
}
