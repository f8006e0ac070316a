//! User commands typed on stdin

use std::str::FromStr;

use futures::stream::{self, Stream};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::services::PromptChoice;

/// Action requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a new run, superseding the current one
    Restart,
    /// Pick an action on the completion prompt
    Select(PromptChoice),
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "r" | "replay" | "restart" => Ok(Command::Restart),
            "1" | "enter license" | "license" => Ok(Command::Select(PromptChoice::Proceed)),
            "2" | "cancel" => Ok(Command::Select(PromptChoice::Dismiss)),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command: '{}'", other)),
        }
    }
}

/// Stream of commands read line by line from stdin; ends at EOF
pub fn stdin_commands() -> impl Stream<Item = Command> {
    let lines = BufReader::new(tokio::io::stdin()).lines();

    stream::unfold(lines, |mut lines| async move {
        loop {
            match lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => match line.parse::<Command>() {
                    Ok(command) => return Some((command, lines)),
                    Err(e) => warn!("{}", e),
                },
                Ok(None) => return None,
                Err(e) => {
                    warn!("Failed to read stdin: {}", e);
                    return None;
                }
            }
        }
    })
}
