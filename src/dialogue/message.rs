//! Transcript message records

use super::option::ChatOption;
use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Bot,
    User,
}

/// One entry in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    /// Only meaningful on bot messages
    #[serde(default)]
    pub options: Vec<ChatOption>,
    /// Render a placeholder chart block under the text
    #[serde(default)]
    pub has_chart: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            options: vec![],
            has_chart: false,
        }
    }

    pub fn bot(text: impl Into<String>, options: Vec<ChatOption>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            options,
            has_chart: false,
        }
    }

    pub fn with_chart(mut self) -> Self {
        self.has_chart = true;
        self
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    /// Ids of the options offered by this message, in order
    pub fn option_ids(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.id.as_str()).collect()
    }
}
