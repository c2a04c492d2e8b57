use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::get;
use axum::Router;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};

use siteweaver_core::events::types::SiteEvent;

use crate::state::AppState;

/// Event stream routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/listen", get(listen))
}

/// SSE stream of site events (live previews refresh on these). Opens with
/// a welcome event; a lagged receiver gets a reconnect hint rather than a
/// silent gap.
async fn listen(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.event_bus().subscribe();
    let events = BroadcastStream::new(receiver).filter_map(|incoming| {
        let event = match incoming {
            Ok(event) => event,
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "listener lagged behind the event bus");
                SiteEvent::Reconnect
            }
        };
        sse_event(&event).map(Ok)
    });
    let welcome = tokio_stream::iter(sse_event(&SiteEvent::Welcome).map(Ok));

    Sse::new(welcome.chain(events)).keep_alive(KeepAlive::default())
}

fn sse_event(event: &SiteEvent) -> Option<Event> {
    match serde_json::to_string(event) {
        Ok(json) => Some(Event::default().data(json)),
        Err(error) => {
            tracing::warn!(%error, "failed to serialize site event");
            None
        }
    }
}
