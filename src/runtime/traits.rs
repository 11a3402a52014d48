//! Trait abstractions for runtime I/O
//!
//! The only outbound I/O a preview performs is saving its style. These
//! traits let the session be tested with recording implementations.

use crate::style::StyleConfig;
use async_trait::async_trait;
use std::sync::Arc;

/// Persistence for a session's style configuration
#[async_trait]
pub trait StyleStore: Send + Sync {
    /// Save the style for a preview session
    async fn save(&self, session_id: &str, style: &StyleConfig) -> Result<(), String>;
}

/// Accepts every save without writing anywhere.
///
/// Real persistence belongs to the dashboard's settings API; this keeps
/// the customizer flow working without it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStyleStore;

#[async_trait]
impl StyleStore for NoopStyleStore {
    async fn save(&self, session_id: &str, style: &StyleConfig) -> Result<(), String> {
        tracing::debug!(
            session_id = %session_id,
            primary = %style.primary_color,
            "Style save accepted (no persistence configured)"
        );
        Ok(())
    }
}

// ============================================================================
// Arc implementations for trait objects
// ============================================================================

#[async_trait]
impl<T: StyleStore + ?Sized> StyleStore for Arc<T> {
    async fn save(&self, session_id: &str, style: &StyleConfig) -> Result<(), String> {
        (**self).save(session_id, style).await
    }
}
