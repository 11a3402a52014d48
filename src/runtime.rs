//! Runtime for mounted widget previews
//!
//! Each preview session is created when the appearance screen mounts and
//! dropped when it unmounts. Operations on one session run to completion
//! under that session's lock.

mod session;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use session::{PreviewSession, PreviewSnapshot, RESET_TOAST, SAVE_TOAST};
pub use traits::*;

use crate::dialogue::{MenuState, TranscriptChange};
use crate::render::{PreviewPanel, RenderedMessage};
use crate::style::{StyleConfig, StyleError, StyleInput};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::{broadcast, Mutex, OwnedMutexGuard, RwLock};

/// How often the background task looks for idle sessions
const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Errors surfaced by session operations
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Preview session not found: {0}")]
    SessionNotFound(String),
    #[error("Too many preview sessions (limit {0})")]
    TooManySessions(usize),
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error("Failed to save style: {0}")]
    Store(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

/// Events sent to subscribers of a session
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Transcript grew or was reset; clients scroll the newest message into view
    TranscriptChanged {
        change: TranscriptChange,
        len: usize,
        state: MenuState,
        /// Rendered messages added by this change (the seed, after a reset)
        messages: Vec<RenderedMessage>,
    },
    StyleChanged {
        style: StyleConfig,
        panel: PreviewPanel,
    },
    Toast {
        kind: ToastKind,
        message: String,
    },
}

/// Limits for the session registry
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    pub max_sessions: usize,
    pub event_buffer: usize,
    /// Sessions untouched this long with no open stream are evicted
    pub idle_timeout: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_sessions: 256,
            event_buffer: 64,
            idle_timeout: Duration::from_secs(30 * 60),
        }
    }
}

type SessionHandle = Arc<Mutex<PreviewSession>>;

/// Registry of all mounted preview sessions
pub struct SessionManager {
    sessions: RwLock<HashMap<String, SessionHandle>>,
    store: Arc<dyn StyleStore>,
    config: RuntimeConfig,
}

impl SessionManager {
    pub fn new(store: Arc<dyn StyleStore>, config: RuntimeConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            store,
            config,
        }
    }

    /// Start the background task that evicts idle sessions. It holds only a
    /// weak reference and exits once the manager is dropped.
    pub fn spawn_cleanup(manager: &Arc<Self>) {
        let manager_weak = Arc::downgrade(manager);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(CLEANUP_INTERVAL);
            loop {
                ticker.tick().await;
                let Some(manager) = manager_weak.upgrade() else {
                    tracing::debug!("SessionManager dropped, cleanup task exiting");
                    break;
                };
                manager.cleanup_idle_sessions().await;
            }
        });
    }

    /// Drop every idle session; returns how many were removed
    pub async fn cleanup_idle_sessions(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        self.evict_idle(&mut sessions)
    }

    fn evict_idle(&self, sessions: &mut HashMap<String, SessionHandle>) -> usize {
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|id, session| {
            // A locked session is in use right now
            let idle = session
                .try_lock()
                .is_ok_and(|session| session.is_idle(now, self.config.idle_timeout));
            if idle {
                tracing::info!(session_id = %id, "Evicting idle preview session");
            }
            !idle
        });
        before - sessions.len()
    }

    /// Mount a new preview with the seed transcript and default style.
    /// When the registry is full, idle sessions make room first.
    pub async fn create(&self) -> Result<PreviewSnapshot, RuntimeError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.config.max_sessions {
            self.evict_idle(&mut sessions);
        }
        if sessions.len() >= self.config.max_sessions {
            tracing::warn!(limit = self.config.max_sessions, "Refusing new preview session");
            return Err(RuntimeError::TooManySessions(self.config.max_sessions));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let session = PreviewSession::new(id.clone(), self.config.event_buffer);
        let snapshot = session.snapshot();
        sessions.insert(id.clone(), Arc::new(Mutex::new(session)));

        tracing::info!(session_id = %id, active = sessions.len(), "Preview session created");
        Ok(snapshot)
    }

    /// Unmount a preview. Subscribers see their stream end.
    pub async fn remove(&self, id: &str) -> Result<(), RuntimeError> {
        if self.sessions.write().await.remove(id).is_none() {
            return Err(RuntimeError::SessionNotFound(id.to_string()));
        }
        tracing::info!(session_id = %id, "Preview session removed");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Lock a session and mark it active
    async fn lock(&self, id: &str) -> Result<OwnedMutexGuard<PreviewSession>, RuntimeError> {
        let session = self
            .sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| RuntimeError::SessionNotFound(id.to_string()))?;
        let mut session = session.lock_owned().await;
        session.touch();
        Ok(session)
    }

    pub async fn snapshot(&self, id: &str) -> Result<PreviewSnapshot, RuntimeError> {
        Ok(self.lock(id).await?.snapshot())
    }

    /// Snapshot plus a receiver for everything that happens after it
    pub async fn subscribe(
        &self,
        id: &str,
    ) -> Result<(PreviewSnapshot, broadcast::Receiver<SessionEvent>), RuntimeError> {
        let session = self.lock(id).await?;
        Ok((session.snapshot(), session.subscribe()))
    }

    pub async fn select(&self, id: &str, option_id: &str) -> Result<PreviewSnapshot, RuntimeError> {
        let mut session = self.lock(id).await?;
        session.select(option_id);
        Ok(session.snapshot())
    }

    pub async fn update_style(
        &self,
        id: &str,
        input: StyleInput,
    ) -> Result<PreviewSnapshot, RuntimeError> {
        let mut session = self.lock(id).await?;
        session.update_style(input)?;
        Ok(session.snapshot())
    }

    pub async fn reset_style(&self, id: &str) -> Result<PreviewSnapshot, RuntimeError> {
        let mut session = self.lock(id).await?;
        session.reset_style();
        Ok(session.snapshot())
    }

    pub async fn save_style(&self, id: &str) -> Result<PreviewSnapshot, RuntimeError> {
        let session = self.lock(id).await?;
        session.save_style(self.store.as_ref()).await?;
        Ok(session.snapshot())
    }
}
