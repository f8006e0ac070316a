//! State management module
//!
//! Plain data owned by the controller: the per-second counter, the ring
//! interpolation and geometry, and the run lifecycle.

pub mod countdown_state;
pub mod lifecycle;
pub mod ring_state;
pub mod snapshot;

// Re-export main types
pub use countdown_state::{CountdownState, TOTAL_SECONDS};
pub use lifecycle::{RunId, RunLifecycle, RunPhase};
pub use ring_state::{RingGeometry, RingState, Rgb, FRACTION_OF_CIRCLE};
pub use snapshot::TimerSnapshot;
