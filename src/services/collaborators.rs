//! Seams to the host environment: rendering, the restart control and the modal

use crate::state::RingGeometry;

use super::prompt::{CompletionPrompt, PromptOutcome};

/// Draws the two concentric rings and the centred label
pub trait RenderSurface {
    /// Lay out the static outline ring and the progress ring
    fn draw_rings(&mut self, geometry: &RingGeometry);

    /// Show the countdown text
    fn render_label(&mut self, text: &str);

    /// Show the stroke proportion of the progress ring
    fn render_stroke(&mut self, fraction: f64);
}

/// The user-facing affordance that triggers a restart
pub trait RestartControl {
    fn set_enabled(&mut self, enabled: bool);
}

/// Presents the two-choice completion prompt
pub trait ModalPresenter {
    fn present(&mut self, prompt: &CompletionPrompt);

    fn dismiss(&mut self, prompt: &CompletionPrompt, outcome: PromptOutcome);
}

impl<T: RenderSurface + ?Sized> RenderSurface for Box<T> {
    fn draw_rings(&mut self, geometry: &RingGeometry) {
        (**self).draw_rings(geometry)
    }

    fn render_label(&mut self, text: &str) {
        (**self).render_label(text)
    }

    fn render_stroke(&mut self, fraction: f64) {
        (**self).render_stroke(fraction)
    }
}

impl<T: RestartControl + ?Sized> RestartControl for Box<T> {
    fn set_enabled(&mut self, enabled: bool) {
        (**self).set_enabled(enabled)
    }
}

impl<T: ModalPresenter + ?Sized> ModalPresenter for Box<T> {
    fn present(&mut self, prompt: &CompletionPrompt) {
        (**self).present(prompt)
    }

    fn dismiss(&mut self, prompt: &CompletionPrompt, outcome: PromptOutcome) {
        (**self).dismiss(prompt, outcome)
    }
}
