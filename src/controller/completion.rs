//! Completion handler: reacts to the animator's start and stop hooks

use tracing::{debug, info};

use crate::{
    services::{
        CompletionPrompt, ModalPresenter, PromptChoice, PromptOutcome, RenderSurface,
        RestartControl,
    },
    state::{RunId, RunLifecycle},
    tasks::{AnimationDelegate, CountdownDriver},
};

/// Everything the animation hooks touch: the lifecycle, the countdown driver
/// and the host collaborators
pub struct CompletionHandler<S, C, M> {
    pub(super) lifecycle: RunLifecycle,
    pub(super) driver: CountdownDriver,
    pub(super) surface: S,
    pub(super) control: C,
    pub(super) modal: M,
    pub(super) restart_enabled: bool,
    pub(super) stroke_fraction: f64,
    pub(super) prompt: Option<CompletionPrompt>,
    pub(super) prompts_presented: u64,
}

impl<S, C, M> CompletionHandler<S, C, M>
where
    S: RenderSurface,
    C: RestartControl,
    M: ModalPresenter,
{
    pub(super) fn new(driver: CountdownDriver, surface: S, control: C, modal: M) -> Self {
        Self {
            lifecycle: RunLifecycle::new(),
            driver,
            surface,
            control,
            modal,
            restart_enabled: true,
            stroke_fraction: 0.0,
            prompt: None,
            prompts_presented: 0,
        }
    }

    pub(super) fn set_restart_enabled(&mut self, enabled: bool) {
        self.restart_enabled = enabled;
        self.control.set_enabled(enabled);
    }

    pub(super) fn start_countdown(&mut self, run: RunId, total_seconds: u64) {
        self.driver.start(run, total_seconds, &mut self.surface);
    }

    pub(super) fn on_tick(&mut self, run: RunId) -> bool {
        self.driver.on_tick(run, &mut self.surface)
    }

    /// Close the open prompt, if any
    pub(super) fn close_prompt(&mut self, outcome: PromptOutcome) -> Option<CompletionPrompt> {
        let prompt = self.prompt.take()?;
        self.modal.dismiss(&prompt, outcome);
        Some(prompt)
    }

    pub(super) fn select(&mut self, choice: PromptChoice) -> Option<PromptOutcome> {
        let outcome = self.prompt.as_ref()?.select(choice);
        self.close_prompt(outcome);
        Some(outcome)
    }

    fn present_prompt(&mut self, run: RunId) {
        let prompt = CompletionPrompt::license_reminder(run);
        info!("Presenting completion prompt for {}", run);
        self.modal.present(&prompt);
        self.prompt = Some(prompt);
        self.prompts_presented += 1;
    }
}

impl<S, C, M> AnimationDelegate for CompletionHandler<S, C, M>
where
    S: RenderSurface,
    C: RestartControl,
    M: ModalPresenter,
{
    fn on_animation_start(&mut self, run: RunId) {
        debug!("Animation started for {}, disabling replay", run);
        self.set_restart_enabled(false);
    }

    fn on_animation_stop(&mut self, run: RunId, completed_naturally: bool) {
        self.set_restart_enabled(true);

        if completed_naturally {
            self.driver.settle(&mut self.surface);
        }
        self.driver.stop();

        if !self.lifecycle.finish(run, completed_naturally) {
            debug!("Stop for {} does not match the current run", run);
            return;
        }

        if completed_naturally {
            info!("{} completed", run);
            self.present_prompt(run);
        } else {
            info!("{} cancelled", run);
        }
    }

    fn draw_stroke(&mut self, fraction: f64) {
        self.stroke_fraction = fraction;
        self.surface.render_stroke(fraction);
    }
}
