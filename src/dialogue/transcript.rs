//! Append-only transcript with a single reset path

use super::message::Message;
use super::script;
use serde::{Serialize, Serializer};

/// Two messages appended by a non-reset selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptDelta {
    pub user: Message,
    pub bot: Message,
}

/// What a selection does to the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptUpdate {
    /// Append a user echo followed by a bot reply
    Delta(TranscriptDelta),
    /// Replace everything with a single seed message
    Reset { seed: Message },
}

/// Ordered message history of one preview session.
///
/// The seed is stored apart from the appended history, so the transcript
/// can never be empty and always starts with a bot message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    seed: Message,
    history: Vec<Message>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Fresh transcript holding the initial greeting
    pub fn new() -> Self {
        Self::from_seed(script::initial_seed())
    }

    pub(crate) fn from_seed(seed: Message) -> Self {
        debug_assert!(seed.is_bot(), "transcript seed must be a bot message");
        Self {
            seed,
            history: Vec::new(),
        }
    }

    #[allow(clippy::len_without_is_empty)] // never empty
    pub fn len(&self) -> usize {
        1 + self.history.len()
    }

    pub fn first(&self) -> &Message {
        &self.seed
    }

    pub fn last(&self) -> &Message {
        self.history.last().unwrap_or(&self.seed)
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        match index {
            0 => Some(&self.seed),
            n => self.history.get(n - 1),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        std::iter::once(&self.seed).chain(self.history.iter())
    }

    /// Append both delta messages, user echo first
    pub fn append(&mut self, delta: TranscriptDelta) {
        self.extend([delta.user, delta.bot]);
    }

    /// Append every message in order
    pub fn extend(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.history.extend(messages);
    }

    /// Drop all history and start over from `seed`
    pub fn reset(&mut self, seed: Message) {
        *self = Self::from_seed(seed);
    }

    pub fn apply(&mut self, update: TranscriptUpdate) {
        match update {
            TranscriptUpdate::Delta(delta) => self.append(delta),
            TranscriptUpdate::Reset { seed } => self.reset(seed),
        }
    }
}

impl Serialize for Transcript {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
