//! Mock implementations for testing

use super::traits::StyleStore;
use crate::style::StyleConfig;
use async_trait::async_trait;
use std::sync::Mutex;

/// Style store that records every save and can be told to fail
#[derive(Default)]
pub struct RecordingStyleStore {
    saves: Mutex<Vec<(String, StyleConfig)>>,
    fail_with: Mutex<Option<String>>,
}

impl RecordingStyleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent saves fail with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fail_with.lock().unwrap() = Some(message.into());
    }

    /// Get recorded saves
    pub fn recorded_saves(&self) -> Vec<(String, StyleConfig)> {
        self.saves.lock().unwrap().clone()
    }
}

#[async_trait]
impl StyleStore for RecordingStyleStore {
    async fn save(&self, session_id: &str, style: &StyleConfig) -> Result<(), String> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(message);
        }
        self.saves
            .lock()
            .unwrap()
            .push((session_id.to_string(), style.clone()));
        Ok(())
    }
}
