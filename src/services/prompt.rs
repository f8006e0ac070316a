//! Completion prompt model

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::state::RunId;

/// The two choices offered when a run completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptChoice {
    Proceed,
    Dismiss,
}

/// Visual weight of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStyle {
    Default,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptAction {
    pub title: String,
    pub style: ActionStyle,
    pub choice: PromptChoice,
}

/// How a presented prompt went away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptOutcome {
    Selected(PromptChoice),
    /// A new run started while the prompt was still up
    Superseded,
}

/// Modal shown once per naturally completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionPrompt {
    pub run: RunId,
    pub title: String,
    pub message: Option<String>,
    pub actions: Vec<PromptAction>,
}

impl CompletionPrompt {
    /// The license reminder presented when the ring drains
    pub fn license_reminder(run: RunId) -> Self {
        Self {
            run,
            title: "Please update your license".to_string(),
            message: None,
            actions: vec![
                PromptAction {
                    title: "Enter License".to_string(),
                    style: ActionStyle::Default,
                    choice: PromptChoice::Proceed,
                },
                PromptAction {
                    title: "Cancel".to_string(),
                    style: ActionStyle::Cancel,
                    choice: PromptChoice::Dismiss,
                },
            ],
        }
    }

    pub fn action(&self, choice: PromptChoice) -> Option<&PromptAction> {
        self.actions.iter().find(|action| action.choice == choice)
    }

    /// Select one of the actions. Either choice only closes the prompt for now.
    pub fn select(&self, choice: PromptChoice) -> PromptOutcome {
        match choice {
            PromptChoice::Proceed => info!("'{}' selected for {}", self.title, self.run),
            PromptChoice::Dismiss => info!("'{}' dismissed for {}", self.title, self.run),
        }
        PromptOutcome::Selected(choice)
    }
}
