//! CoreBrain widget preview
//!
//! The live preview behind the chat-widget appearance customizer: a
//! scripted branching conversation, styled by the user's widget settings,
//! served to the dashboard over HTTP.

pub mod api;
pub mod config;
pub mod dialogue;
pub mod render;
pub mod runtime;
pub mod style;
