//! Host collaborator module
//!
//! Traits for the effects the timer drives (rendering, the restart control,
//! the completion modal), the prompt model, and terminal implementations.

pub mod collaborators;
pub mod prompt;
pub mod terminal;

// Re-export main types
pub use collaborators::{ModalPresenter, RenderSurface, RestartControl};
pub use prompt::{ActionStyle, CompletionPrompt, PromptAction, PromptChoice, PromptOutcome};
pub use terminal::{TerminalControl, TerminalModal, TerminalSurface};
