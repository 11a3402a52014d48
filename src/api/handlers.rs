//! HTTP request handlers

use super::sse::sse_stream;
use super::types::{ErrorResponse, SelectRequest, SuccessResponse};
use super::AppState;
use crate::runtime::{PreviewSnapshot, RuntimeError};
use crate::style::StyleInput;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/previews", post(create_preview))
        .route(
            "/api/previews/:id",
            get(get_preview).delete(delete_preview),
        )
        .route("/api/previews/:id/stream", get(stream_preview))
        .route("/api/previews/:id/select", post(select_option))
        .route("/api/previews/:id/style", post(update_style))
        .route("/api/previews/:id/style/reset", post(reset_style))
        .route("/api/previews/:id/style/save", post(save_style))
        .route("/version", get(get_version))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================
// Session Lifecycle
// ============================================================

async fn create_preview(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<PreviewSnapshot>), AppError> {
    let snapshot = state.sessions.create().await?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

async fn get_preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PreviewSnapshot>, AppError> {
    Ok(Json(state.sessions.snapshot(&id).await?))
}

async fn delete_preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.sessions.remove(&id).await?;
    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================
// SSE Streaming
// ============================================================

async fn stream_preview(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (snapshot, broadcast_rx) = state.sessions.subscribe(&id).await?;
    Ok(sse_stream(snapshot, broadcast_rx))
}

// ============================================================
// Dialogue
// ============================================================

async fn select_option(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<SelectRequest>,
) -> Result<Json<PreviewSnapshot>, AppError> {
    Ok(Json(state.sessions.select(&id, &req.option_id).await?))
}

// ============================================================
// Style
// ============================================================

async fn update_style(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<StyleInput>,
) -> Result<Json<PreviewSnapshot>, AppError> {
    Ok(Json(state.sessions.update_style(&id, input).await?))
}

async fn reset_style(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PreviewSnapshot>, AppError> {
    Ok(Json(state.sessions.reset_style(&id).await?))
}

async fn save_style(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PreviewSnapshot>, AppError> {
    Ok(Json(state.sessions.save_style(&id).await?))
}

async fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ============================================================
// Error Handling
// ============================================================

/// `Json` extractor that rejects bad bodies with a 400 and a JSON error
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
struct ApiJson<T>(T);

enum AppError {
    BadRequest(String),
    NotFound(String),
    Unavailable(String),
    Internal(String),
}

impl From<RuntimeError> for AppError {
    fn from(err: RuntimeError) -> Self {
        let message = err.to_string();
        match err {
            RuntimeError::SessionNotFound(_) => AppError::NotFound(message),
            RuntimeError::Style(_) => AppError::BadRequest(message),
            RuntimeError::TooManySessions(_) => AppError::Unavailable(message),
            RuntimeError::Store(_) => AppError::Internal(message),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{NoopStyleStore, RuntimeConfig, SessionManager};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router() -> Router {
        create_router(AppState::new(Arc::new(SessionManager::new(
            Arc::new(NoopStyleStore),
            RuntimeConfig::default(),
        ))))
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_preview_flow_over_http() {
        let router = router();
        let (status, created) = send(&router, Method::POST, "/api/previews", None).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["transcript"].as_array().unwrap().len(), 1);
        assert_eq!(created["style"]["primary_color"], "#0284c7");

        let (status, after) = send(
            &router,
            Method::POST,
            &format!("/api/previews/{id}/select"),
            Some(json!({ "option_id": "sales" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(after["transcript"].as_array().unwrap().len(), 3);
        assert_eq!(after["state"]["type"], "sales_menu");

        let (status, styled) = send(
            &router,
            Method::POST,
            &format!("/api/previews/{id}/style"),
            Some(json!({ "field": "width", "value": 9999 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(styled["style"]["width"], 500);
        assert_eq!(styled["style_is_default"], false);

        let (status, reset) = send(
            &router,
            Method::POST,
            &format!("/api/previews/{id}/style/reset"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reset["style_is_default"], true);

        let (status, _) = send(&router, Method::DELETE, &format!("/api/previews/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(&router, Method::GET, &format!("/api/previews/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains(&id));
    }

    #[tokio::test]
    async fn test_bad_style_input_is_rejected() {
        let router = router();
        let (_, created) = send(&router, Method::POST, "/api/previews", None).await;
        let id = created["id"].as_str().unwrap();

        let (status, body) = send(
            &router,
            Method::POST,
            &format!("/api/previews/{id}/style"),
            Some(json!({ "field": "primary_color", "value": "not-a-color" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("not-a-color"));
    }

    #[tokio::test]
    async fn test_malformed_bodies_get_json_400() {
        let router = router();
        let (_, created) = send(&router, Method::POST, "/api/previews", None).await;
        let id = created["id"].as_str().unwrap();

        let (status, body) = send(
            &router,
            Method::POST,
            &format!("/api/previews/{id}/style"),
            Some(json!({ "field": "shadow", "value": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("unknown style field"));

        let (status, body) = send(
            &router,
            Method::POST,
            &format!("/api/previews/{id}/select"),
            Some(json!({ "option": "sales" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("option_id"));

        let (_, unchanged) = send(&router, Method::GET, &format!("/api/previews/{id}"), None).await;
        assert_eq!(unchanged["transcript"].as_array().unwrap().len(), 1);
        assert_eq!(unchanged["style_is_default"], true);
    }

    #[tokio::test]
    async fn test_save_is_always_confirmed() {
        let router = router();
        let (_, created) = send(&router, Method::POST, "/api/previews", None).await;
        let id = created["id"].as_str().unwrap();

        let (status, _) = send(
            &router,
            Method::POST,
            &format!("/api/previews/{id}/style/save"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}
