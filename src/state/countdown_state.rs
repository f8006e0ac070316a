//! Countdown state structure and management

/// Number of whole seconds a run counts down from.
pub const TOTAL_SECONDS: u64 = 60;

/// Discrete per-second counter shown in the centre label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    pub total_seconds: u64,
    pub seconds_remaining: u64,
}

impl CountdownState {
    /// Create a counter sitting at its full value
    pub fn new(total_seconds: u64) -> Self {
        Self {
            total_seconds,
            seconds_remaining: total_seconds,
        }
    }

    /// Put the counter back at its full value
    pub fn reset(&mut self) {
        self.seconds_remaining = self.total_seconds;
    }

    /// Count down one second, clamping at zero
    pub fn decrement(&mut self) -> u64 {
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        self.seconds_remaining
    }

    /// Jump to the value implied by `elapsed_seconds` whole seconds since reset
    pub fn settle(&mut self, elapsed_seconds: u64) -> u64 {
        self.seconds_remaining = self.total_seconds.saturating_sub(elapsed_seconds);
        self.seconds_remaining
    }

    /// Text rendered by the label
    pub fn label(&self) -> String {
        self.seconds_remaining.to_string()
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new(TOTAL_SECONDS)
    }
}
