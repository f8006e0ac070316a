//! Terminal implementations of the host collaborators used by the binary

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use tracing::{info, warn};

use super::{
    collaborators::{ModalPresenter, RenderSurface, RestartControl},
    prompt::{ActionStyle, CompletionPrompt, PromptOutcome},
};
use crate::state::{RingGeometry, Rgb};

const BAR_WIDTH: usize = 40;

fn paint(text: &str, color: Rgb) -> ColoredString {
    text.truecolor(color.0, color.1, color.2)
}

fn flush_line(out: &mut impl Write, line: &str) {
    if let Err(e) = write!(out, "\r{}", line).and_then(|_| out.flush()) {
        warn!("Failed to draw to terminal: {}", e);
    }
}

/// Draws the ring as a horizontal bar followed by the label, on a single line
pub struct TerminalSurface {
    geometry: RingGeometry,
    label: String,
    fraction: f64,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            geometry: RingGeometry::default(),
            label: String::new(),
            fraction: 0.0,
        }
    }

    /// Filled and empty cell counts of the bar for a stroke fraction
    pub fn bar_cells(fraction: f64) -> (usize, usize) {
        let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
        (filled, BAR_WIDTH - filled)
    }

    fn redraw(&self) {
        let (filled, empty) = Self::bar_cells(self.fraction);
        let line = format!(
            "  {}{}  {:>4} ",
            paint(&"█".repeat(filled), self.geometry.progress_color),
            paint(&"░".repeat(empty), self.geometry.outline_color),
            paint(&self.label, self.geometry.label_color).bold(),
        );
        flush_line(&mut io::stdout().lock(), &line);
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for TerminalSurface {
    fn draw_rings(&mut self, geometry: &RingGeometry) {
        info!(
            "Drawing rings: radius={}, line_width={}, fraction_of_circle={}",
            geometry.radius, geometry.line_width, geometry.fraction_of_circle
        );
        self.geometry = geometry.clone();
        self.redraw();
    }

    fn render_label(&mut self, text: &str) {
        self.label = text.to_string();
        self.redraw();
    }

    fn render_stroke(&mut self, fraction: f64) {
        self.fraction = fraction;
        self.redraw();
    }
}

/// Restart affordance: typing `r` or sending SIGUSR1
#[derive(Debug, Default)]
pub struct TerminalControl {
    enabled: bool,
}

impl TerminalControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl RestartControl for TerminalControl {
    fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            info!("Replay control {}", if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
    }
}

/// Prints the completion prompt below the ring
#[derive(Debug, Default)]
pub struct TerminalModal;

impl TerminalModal {
    pub fn new() -> Self {
        Self
    }
}

impl ModalPresenter for TerminalModal {
    fn present(&mut self, prompt: &CompletionPrompt) {
        let mut out = io::stdout().lock();
        let mut lines = vec![String::new(), format!("  {}", prompt.title.bold())];
        if let Some(message) = &prompt.message {
            lines.push(format!("  {}", message));
        }
        for (index, action) in prompt.actions.iter().enumerate() {
            let title = match action.style {
                ActionStyle::Default => action.title.bold(),
                ActionStyle::Cancel => action.title.normal(),
            };
            lines.push(format!("    [{}] {}", index + 1, title));
        }
        lines.push("  (r to replay, q to quit)".dimmed().to_string());

        if let Err(e) = writeln!(out, "{}", lines.join("\n")).and_then(|_| out.flush()) {
            warn!("Failed to show prompt: {}", e);
        }
    }

    fn dismiss(&mut self, prompt: &CompletionPrompt, outcome: PromptOutcome) {
        info!("Prompt '{}' for {} closed: {:?}", prompt.title, prompt.run, outcome);
    }
}
