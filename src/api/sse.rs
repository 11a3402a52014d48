//! Server-Sent Events support

use crate::runtime::{PreviewSnapshot, SessionEvent};
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use serde_json::json;
use std::convert::Infallible;
use std::time::Duration;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// Convert a session's broadcast stream to an SSE stream, starting with
/// an `init` event carrying the full snapshot
pub fn sse_stream(
    snapshot: PreviewSnapshot,
    broadcast_rx: tokio::sync::broadcast::Receiver<SessionEvent>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let init = futures::stream::once(async move {
        let data = json!({ "type": "init", "preview": snapshot });
        Ok(Event::default().event("init").data(data.to_string()))
    });

    let broadcasts = BroadcastStream::new(broadcast_rx).filter_map(|result| match result {
        Ok(event) => Some(Ok(session_event_to_axum(event))),
        Err(_) => None, // Skip lagged messages
    });

    Sse::new(init.chain(broadcasts)).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

fn session_event_to_axum(event: SessionEvent) -> Event {
    let (event_type, data) = match event {
        SessionEvent::TranscriptChanged {
            change,
            len,
            state,
            messages,
        } => (
            "transcript_changed",
            json!({
                "type": "transcript_changed",
                "change": change,
                "len": len,
                "state": state,
                "messages": messages
            }),
        ),
        SessionEvent::StyleChanged { style, panel } => (
            "style_changed",
            json!({
                "type": "style_changed",
                "style": style,
                "panel": panel
            }),
        ),
        SessionEvent::Toast { kind, message } => (
            "toast",
            json!({
                "type": "toast",
                "kind": kind,
                "message": message
            }),
        ),
    };

    Event::default().event(event_type).data(data.to_string())
}
