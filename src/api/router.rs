use axum::{
    Router,
    body::Body,
    extract::Request,
    routing::{get, post, put},
};
use std::sync::Arc;
use std::time::Duration;

use crate::api::handlers::{health, participant, room, slot};
use crate::state::AppState;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{Span, error, info, info_span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Rooms
        .route("/api/rooms", post(room::create_room))
        .route("/api/rooms/{id}", get(room::get_room))
        .route("/api/rooms/{id}/confirm", post(room::confirm_slot))

        // Participants
        .route("/api/rooms/{id}/join", post(participant::join_room))
        .route(
            "/api/rooms/{room_id}/participants/{participant_id}",
            put(participant::update_availability),
        )

        // Slot queries
        .route(
            "/api/rooms/{id}/slots/{slot_index}",
            get(slot::get_slot_detail),
        )
        .route("/api/rooms/{id}/best-slots", get(slot::get_best_slots))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!(
                        "started processing request: {} {}",
                        request.method(),
                        request.uri().path()
                    );
                })
                .on_response(
                    |response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                        info!(
                            status = response.status().as_u16(),
                            latency_ms = latency.as_millis(),
                            "finished processing request"
                        );
                    },
                )
                .on_failure(
                    |error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                        error!("request failed: {:?}", error);
                    },
                ),
        )
        .with_state(state)
}
