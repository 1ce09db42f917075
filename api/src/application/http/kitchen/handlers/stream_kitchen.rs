use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::{Stream, StreamExt, wrappers::WatchStream};

use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/events",
    tag = "kitchen",
    summary = "Stream kitchen state",
    description = "Server-sent events carrying the full kitchen snapshot, starting with the current one and then after every change.",
    responses(
        (status = 200, content_type = "text/event-stream", description = "Stream of snapshot events")
    ),
)]
pub async fn stream_kitchen(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let stream = WatchStream::new(state.kitchen.subscribe())
        .map(|snapshot| Event::default().event("snapshot").json_data(snapshot));

    Sse::new(stream).keep_alive(KeepAlive::default())
}
