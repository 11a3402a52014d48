//! Scripted branching dialogue engine
//!
//! Elm-style: a pure transition function over an explicit menu state, with
//! effects applied by the caller.

mod effect;
pub mod message;
pub mod option;
pub(crate) mod script;
pub mod state;
pub mod transcript;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::{Effect, TranscriptChange};
pub use message::{Message, Sender};
pub use option::{ChatOption, OptionId, OptionVariant};
pub use state::MenuState;
pub use transcript::{Transcript, TranscriptDelta, TranscriptUpdate};
pub use transition::{select_option, transition, TransitionResult};
