//! End-to-end behaviour of the timer on a paused clock

mod common;

use std::time::Duration;

use common::{controller, pump_until, secs, settings};
use ring_countdown::{
    services::{PromptChoice, PromptOutcome},
    tasks::TimerEvent,
    RunPhase, TimerSettings,
};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn new_controller_lays_out_screen_without_running() {
    let ctl = controller(TimerSettings::default());

    assert_eq!(ctl.phase(), RunPhase::Idle);
    assert!(ctl.surface().geometry.is_some());
    assert_eq!(ctl.surface().label(), "60");
    assert_eq!(ctl.surface().stroke(), 0.0);
    assert!(ctl.control().enabled());
    assert!(ctl.is_restart_enabled());
    assert!(ctl.modal().presented.is_empty());
}

#[tokio::test(start_paused = true)]
async fn full_run_counts_down_and_prompts_once() {
    let t0 = Instant::now();
    let mut ctl = controller(TimerSettings::default());

    let run = ctl.restart();
    assert_eq!(ctl.phase(), RunPhase::Running);
    assert!(!ctl.control().enabled());
    assert_eq!(ctl.surface().label(), "60");
    assert_eq!(ctl.surface().stroke(), 1.0);

    pump_until(&mut ctl, t0 + secs(1.5)).await;
    assert_eq!(ctl.surface().label(), "59");
    assert!(!ctl.control().enabled());

    pump_until(&mut ctl, t0 + secs(30.5)).await;
    assert_eq!(ctl.surface().label(), "30");
    let stroke = ctl.snapshot().stroke_fraction;
    assert!((stroke - 0.4917).abs() < 0.02, "stroke was {}", stroke);

    pump_until(&mut ctl, t0 + secs(59.5)).await;
    assert_eq!(ctl.surface().label(), "1");
    assert!(ctl.modal().presented.is_empty());

    pump_until(&mut ctl, t0 + secs(60.5)).await;
    assert_eq!(ctl.surface().label(), "0");
    assert_eq!(ctl.surface().stroke(), 0.0);
    assert_eq!(ctl.phase(), RunPhase::Completed);
    assert!(ctl.control().enabled());
    assert_eq!(ctl.modal().presented.len(), 1);
    assert_eq!(ctl.modal().presented[0].run, run);
    assert!(ctl.is_prompt_open());

    // Nothing more happens once the run is over
    pump_until(&mut ctl, t0 + secs(70.0)).await;
    assert_eq!(ctl.surface().label(), "0");
    assert_eq!(ctl.modal().presented.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn replay_mid_run_moves_completion_to_new_run() {
    let t0 = Instant::now();
    let mut ctl = controller(TimerSettings::default());

    let first = ctl.restart();
    pump_until(&mut ctl, t0 + secs(30.25)).await;
    assert_eq!(ctl.surface().label(), "30");

    let second = ctl.restart();
    assert_ne!(first, second);
    assert_eq!(ctl.surface().label(), "60");
    assert_eq!(ctl.surface().stroke(), 1.0);
    assert!(!ctl.control().enabled());

    // The first run's natural completion window passes quietly
    pump_until(&mut ctl, t0 + secs(60.5)).await;
    assert!(ctl.modal().presented.is_empty());
    assert_eq!(ctl.phase(), RunPhase::Running);
    assert_eq!(ctl.surface().label(), "30");
    assert!(!ctl.control().enabled());

    pump_until(&mut ctl, t0 + secs(90.5)).await;
    assert_eq!(ctl.modal().presented.len(), 1);
    assert_eq!(ctl.modal().presented[0].run, second);
    assert_eq!(ctl.surface().label(), "0");
    assert!(ctl.control().enabled());

    let snapshot = ctl.snapshot();
    assert_eq!(snapshot.completed_runs, 1);
    assert_eq!(snapshot.cancelled_runs, 1);
}

#[tokio::test(start_paused = true)]
async fn final_tick_before_completion_shows_zero_once() {
    let mut ctl = controller(TimerSettings::default());

    let run = ctl.restart();
    tokio::time::advance(Duration::from_secs(60)).await;

    for _ in 0..60 {
        ctl.handle_event(TimerEvent::Tick(run));
    }
    assert_eq!(ctl.surface().label(), "0");

    ctl.handle_event(TimerEvent::AnimationFinished(run));
    assert_eq!(ctl.phase(), RunPhase::Completed);
    assert_eq!(ctl.surface().label(), "0");
    let zeros = ctl.surface().labels.iter().filter(|l| *l == "0").count();
    assert_eq!(zeros, 1);
    assert_eq!(ctl.modal().presented.len(), 1);
    assert!(ctl.control().enabled());
}

#[tokio::test(start_paused = true)]
async fn control_is_disabled_exactly_while_animating() {
    let t0 = Instant::now();
    let mut ctl = controller(settings(5));

    ctl.restart();
    pump_until(&mut ctl, t0 + secs(2.5)).await;
    ctl.restart();
    pump_until(&mut ctl, t0 + secs(8.0)).await;

    // initial, start, cancel, start, natural stop
    assert_eq!(ctl.control().history, vec![true, false, true, false, true]);
}

#[tokio::test(start_paused = true)]
async fn label_tracks_ticks_since_last_start() {
    let t0 = Instant::now();
    let mut ctl = controller(settings(5));

    ctl.restart();
    for k in 1..=4u64 {
        pump_until(&mut ctl, t0 + secs(k as f64 + 0.5)).await;
        assert_eq!(ctl.surface().label(), (5 - k).to_string());
        assert_eq!(ctl.snapshot().seconds_remaining, 5 - k);
    }

    pump_until(&mut ctl, t0 + secs(5.5)).await;
    assert_eq!(ctl.surface().label(), "0");

    let labels: Vec<&str> = ctl.surface().labels.iter().map(String::as_str).collect();
    assert_eq!(labels, ["5", "5", "4", "3", "2", "1", "0"]);
}

#[tokio::test(start_paused = true)]
async fn only_the_most_recent_of_many_restarts_completes() {
    let t0 = Instant::now();
    let mut ctl = controller(settings(10));

    let mut last = ctl.restart();
    for offset in [0.0, 0.2, 3.7, 3.7, 9.9] {
        pump_until(&mut ctl, t0 + secs(offset)).await;
        let next = ctl.restart();
        assert!(next > last);
        last = next;
    }

    pump_until(&mut ctl, t0 + secs(30.0)).await;
    assert_eq!(ctl.modal().presented.len(), 1);
    assert_eq!(ctl.modal().presented[0].run, last);

    let snapshot = ctl.snapshot();
    assert_eq!(snapshot.completed_runs, 1);
    assert_eq!(snapshot.cancelled_runs, 5);
    assert_eq!(snapshot.run, Some(last));
}

#[tokio::test(start_paused = true)]
async fn late_events_from_superseded_run_are_ignored() {
    let mut ctl = controller(settings(10));

    let first = ctl.restart();
    let second = ctl.restart();

    ctl.handle_event(TimerEvent::Tick(first));
    assert_eq!(ctl.surface().label(), "10");

    ctl.handle_event(TimerEvent::AnimationFinished(first));
    assert_eq!(ctl.phase(), RunPhase::Running);
    assert!(ctl.modal().presented.is_empty());
    assert!(!ctl.control().enabled());

    ctl.handle_event(TimerEvent::Tick(second));
    assert_eq!(ctl.surface().label(), "9");
}

#[tokio::test(start_paused = true)]
async fn selecting_an_action_closes_the_prompt() {
    let t0 = Instant::now();
    let mut ctl = controller(settings(3));

    assert_eq!(ctl.select(PromptChoice::Proceed), None);

    let run = ctl.restart();
    pump_until(&mut ctl, t0 + secs(3.5)).await;
    assert!(ctl.is_prompt_open());

    assert_eq!(
        ctl.select(PromptChoice::Proceed),
        Some(PromptOutcome::Selected(PromptChoice::Proceed))
    );
    assert!(!ctl.is_prompt_open());
    assert_eq!(
        ctl.modal().dismissed,
        vec![(run, PromptOutcome::Selected(PromptChoice::Proceed))]
    );
    assert_eq!(ctl.select(PromptChoice::Dismiss), None);
    assert_eq!(ctl.phase(), RunPhase::Completed);
}

#[tokio::test(start_paused = true)]
async fn replay_after_completion_supersedes_open_prompt() {
    let t0 = Instant::now();
    let mut ctl = controller(settings(3));

    let first = ctl.restart();
    pump_until(&mut ctl, t0 + secs(3.5)).await;
    assert_eq!(ctl.phase(), RunPhase::Completed);

    let second = ctl.restart();
    assert_eq!(ctl.phase(), RunPhase::Running);
    assert!(!ctl.is_prompt_open());
    assert_eq!(ctl.modal().dismissed, vec![(first, PromptOutcome::Superseded)]);
    assert_eq!(ctl.surface().label(), "3");

    pump_until(&mut ctl, t0 + secs(7.0)).await;
    let runs: Vec<_> = ctl.modal().presented.iter().map(|p| p.run).collect();
    assert_eq!(runs, vec![first, second]);
}

#[tokio::test(start_paused = true)]
async fn partial_circle_starts_from_configured_fraction() {
    let t0 = Instant::now();
    let mut ctl = controller(TimerSettings {
        fraction_of_circle: 0.5,
        ..settings(10)
    });

    assert_eq!(ctl.surface().geometry.as_ref().unwrap().fraction_of_circle, 0.5);

    ctl.restart();
    assert_eq!(ctl.surface().stroke(), 0.5);

    pump_until(&mut ctl, t0 + secs(5.0)).await;
    let stroke = ctl.snapshot().stroke_fraction;
    assert!((stroke - 0.25).abs() < 0.01, "stroke was {}", stroke);

    pump_until(&mut ctl, t0 + secs(10.5)).await;
    assert_eq!(ctl.surface().stroke(), 0.0);
    assert!(ctl.surface().strokes.iter().all(|s| (0.0..=0.5).contains(s)));
}

#[tokio::test(start_paused = true)]
async fn snapshot_serializes_to_json() {
    let mut ctl = controller(settings(10));
    ctl.restart();

    let json = serde_json::to_value(ctl.snapshot()).unwrap();
    assert_eq!(json["phase"], "running");
    assert_eq!(json["seconds_remaining"], 10);
    assert_eq!(json["label"], "10");
    assert_eq!(json["restart_enabled"], false);
    assert!(json["started_at"].is_string());
}
