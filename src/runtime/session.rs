//! One mounted widget preview
//!
//! Owns the transcript, menu state and style of a single session, runs
//! dialogue transitions and executes their effects.

use super::traits::StyleStore;
use super::{RuntimeError, SessionEvent, ToastKind};
use crate::dialogue::{transition, Effect, MenuState, OptionId, Transcript, TranscriptChange};
use crate::render::{self, PreviewPanel, RenderedMessage};
use crate::style::{StyleChange, StyleConfig, StyleInput};
use serde::Serialize;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;

pub const SAVE_TOAST: &str = "Configuración guardada correctamente";
pub const RESET_TOAST: &str = "Configuración restablecida a los valores predeterminados";

/// Everything a client needs to paint the preview
#[derive(Debug, Clone, Serialize)]
pub struct PreviewSnapshot {
    pub id: String,
    pub state: MenuState,
    pub transcript: Vec<RenderedMessage>,
    pub style: StyleConfig,
    pub style_is_default: bool,
    pub panel: PreviewPanel,
}

pub struct PreviewSession {
    id: String,
    state: MenuState,
    transcript: Transcript,
    style: StyleConfig,
    broadcast_tx: broadcast::Sender<SessionEvent>,
    /// Last activity timestamp (for idle eviction)
    last_active: Instant,
}

impl PreviewSession {
    pub fn new(id: impl Into<String>, event_buffer: usize) -> Self {
        let (broadcast_tx, _) = broadcast::channel(event_buffer.max(1));
        Self {
            id: id.into(),
            state: MenuState::Root,
            transcript: Transcript::new(),
            style: StyleConfig::default(),
            broadcast_tx,
            last_active: Instant::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.broadcast_tx.subscribe()
    }

    pub fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    /// Untouched for at least `timeout` and nobody is streaming it
    pub fn is_idle(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.last_active) >= timeout
            && self.broadcast_tx.receiver_count() == 0
    }

    pub fn snapshot(&self) -> PreviewSnapshot {
        PreviewSnapshot {
            id: self.id.clone(),
            state: self.state,
            transcript: render::render_transcript(&self.transcript, &self.style),
            style: self.style.clone(),
            style_is_default: self.style.is_default(),
            panel: render::preview_panel(&self.style),
        }
    }

    // ------------------------------------------------------------------
    // Dialogue
    // ------------------------------------------------------------------

    /// Handle a click on a rendered option
    pub fn select(&mut self, option_id: &str) {
        let option_id = OptionId::parse(option_id);
        let result = transition(&self.state, &option_id);

        tracing::debug!(
            session_id = %self.id,
            option_id = %option_id,
            from = self.state.name(),
            to = result.new_state.name(),
            "Dialogue transition"
        );

        self.state = result.new_state;
        for effect in result.effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::AppendMessages { messages } => {
                self.transcript.extend(messages);
            }

            Effect::ResetTranscript { seed } => {
                self.transcript.reset(seed);
            }

            Effect::NotifyTranscriptChanged { change } => {
                let appended = match change {
                    TranscriptChange::Appended { count } => count,
                    TranscriptChange::Reset => self.transcript.len(),
                };
                let messages = self
                    .transcript
                    .iter()
                    .skip(self.transcript.len().saturating_sub(appended))
                    .map(|message| render::render_message(message, &self.style))
                    .collect();
                let _ = self.broadcast_tx.send(SessionEvent::TranscriptChanged {
                    change,
                    len: self.transcript.len(),
                    state: self.state,
                    messages,
                });
            }
        }
    }

    // ------------------------------------------------------------------
    // Style
    // ------------------------------------------------------------------

    /// Apply raw control input; numeric values are clamped on the way in
    pub fn update_style(&mut self, input: StyleInput) -> Result<(), RuntimeError> {
        let change = StyleChange::try_from(input)?;
        self.apply_style(change);
        Ok(())
    }

    pub fn apply_style(&mut self, change: StyleChange) {
        tracing::debug!(session_id = %self.id, field = change.field(), "Style change");
        self.replace_style(self.style.clone().with_change(change));
    }

    pub fn reset_style(&mut self) {
        tracing::info!(session_id = %self.id, "Style reset to defaults");
        self.replace_style(StyleConfig::default());
        self.toast(ToastKind::Success, RESET_TOAST);
    }

    /// Hand the current style to `store` and confirm with a toast
    pub async fn save_style(&self, store: &dyn StyleStore) -> Result<(), RuntimeError> {
        match store.save(&self.id, &self.style).await {
            Ok(()) => {
                tracing::info!(session_id = %self.id, "Style saved");
                self.toast(ToastKind::Success, SAVE_TOAST);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(session_id = %self.id, error = %e, "Style save failed");
                self.toast(ToastKind::Error, e.clone());
                Err(RuntimeError::Store(e))
            }
        }
    }

    fn replace_style(&mut self, style: StyleConfig) {
        self.style = style;
        let _ = self.broadcast_tx.send(SessionEvent::StyleChanged {
            style: self.style.clone(),
            panel: render::preview_panel(&self.style),
        });
    }

    fn toast(&self, kind: ToastKind, message: impl Into<String>) {
        let _ = self.broadcast_tx.send(SessionEvent::Toast {
            kind,
            message: message.into(),
        });
    }
}
