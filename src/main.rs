//! CoreBrain widget preview server

use corebrain_widget::api::{create_router, AppState};
use corebrain_widget::config::ServerConfig;
use corebrain_widget::runtime::{NoopStyleStore, SessionManager};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "corebrain_widget=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let config = ServerConfig::from_env();

    // Style persistence belongs to the dashboard's settings API
    let sessions = Arc::new(SessionManager::new(Arc::new(NoopStyleStore), config.runtime));
    SessionManager::spawn_cleanup(&sessions);
    let state = AppState::new(sessions);

    // The dashboard is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state).layer(cors);

    let addr = config.addr();
    tracing::info!(
        max_sessions = config.runtime.max_sessions,
        idle_timeout_secs = config.runtime.idle_timeout.as_secs(),
        "Widget preview server listening on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
