//! Progress ring state, geometry and theme

use std::time::Duration;

/// Initial fill of the progress ring, 1.0 being the full circle.
pub const FRACTION_OF_CIRCLE: f64 = 4.0 / 4.0;

/// Linear interpolation of the drawn stroke proportion over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingState {
    pub from_fraction: f64,
    pub to_fraction: f64,
    pub duration: Duration,
}

impl RingState {
    pub fn new(from_fraction: f64, to_fraction: f64, duration: Duration) -> Self {
        Self {
            from_fraction,
            to_fraction,
            duration,
        }
    }

    /// Progress through the animation in `[0.0, 1.0]`
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if elapsed >= self.duration {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Stroke proportion drawn after `elapsed` time
    pub fn fraction_at(&self, elapsed: Duration) -> f64 {
        let t = self.progress(elapsed);
        self.from_fraction + (self.to_fraction - self.from_fraction) * t
    }
}

/// RGB triple used by the render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Geometry and colours of the two concentric rings and the label.
///
/// Both rings share the centre, radius and line width. The outline ring is a
/// full circle; the progress ring starts at twelve o'clock and runs clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct RingGeometry {
    pub radius: f64,
    pub line_width: f64,
    pub fraction_of_circle: f64,
    pub label_color: Rgb,
    pub progress_color: Rgb,
    pub outline_color: Rgb,
}

impl RingGeometry {
    pub fn new(fraction_of_circle: f64) -> Self {
        Self {
            radius: 100.0,
            line_width: 10.0,
            fraction_of_circle,
            label_color: Rgb(92, 125, 160),
            progress_color: Rgb(197, 116, 0),
            outline_color: Rgb(28, 27, 27),
        }
    }
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self::new(FRACTION_OF_CIRCLE)
    }
}
