//! Effects produced by dialogue transitions

use super::message::Message;
use serde::Serialize;

/// How the transcript changed, for presentation layers that keep the
/// newest message in view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TranscriptChange {
    Appended { count: usize },
    Reset,
}

/// Effects to be executed after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append messages to the end of the transcript, in order
    AppendMessages { messages: Vec<Message> },

    /// Replace the whole transcript with a single seed message
    ResetTranscript { seed: Message },

    /// Tell subscribers the transcript changed
    NotifyTranscriptChanged { change: TranscriptChange },
}

impl Effect {
    pub fn appended(count: usize) -> Self {
        Effect::NotifyTranscriptChanged {
            change: TranscriptChange::Appended { count },
        }
    }

    pub fn reset() -> Self {
        Effect::NotifyTranscriptChanged {
            change: TranscriptChange::Reset,
        }
    }
}
