//! Scheduled tasks module
//!
//! The two independently scheduled timers: the one-second countdown tick and
//! the continuous ring animation. Both only post events to the controller.

pub mod countdown_driver;
pub mod events;
pub mod ring_animator;

// Re-export main types
pub use countdown_driver::{CountdownDriver, TICK_PERIOD};
pub use events::{event_channel, EventReceiver, EventSender, TimerEvent};
pub use ring_animator::{
    AnimationDelegate, AnimationSpec, RingAnimator, MAX_ANIMATION_DURATION,
};
