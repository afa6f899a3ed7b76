use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{JoinRoomRequest, UpdateAvailabilityRequest};
use crate::api::dtos::responses::{AvailabilityUpdatedResponse, JoinRoomResponse};
use crate::api::handlers::room::load_snapshot;
use crate::domain::models::participant::NewParticipant;
use crate::domain::services::availability::AvailabilityBitset;
use crate::error::AppError;
use crate::state::AppState;

pub async fn join_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<i64>,
    Json(payload): Json<JoinRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    let room = state
        .room_repo
        .find_by_id(room_id)
        .await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    if payload.name.trim().is_empty() {
        return Err(AppError::Validation(
            "Participant name must not be empty".into(),
        ));
    }
    if payload.timezone.parse::<Tz>().is_err() {
        return Err(AppError::Validation("Invalid timezone".into()));
    }

    let existing = state.participant_repo.list_by_room(room_id).await?;
    let name_taken = existing
        .iter()
        .any(|p| p.name.to_lowercase() == payload.name.to_lowercase());
    if name_taken {
        return Err(AppError::Validation(
            "A participant with this name already exists in the room".into(),
        ));
    }

    let total_slots = room.total_slots()?;
    let new_participant = NewParticipant::new(
        room_id,
        payload.name,
        payload.timezone,
        AvailabilityBitset::empty(total_slots).to_string(),
    );
    let participant = state.participant_repo.create(&new_participant).await?;

    info!("Participant {} joined room {}", participant.id, room_id);

    let room = load_snapshot(&state, room_id).await?;
    Ok(Json(JoinRoomResponse { participant, room }))
}

pub async fn update_availability(
    State(state): State<Arc<AppState>>,
    Path((room_id, participant_id)): Path<(i64, i64)>,
    Json(payload): Json<UpdateAvailabilityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let room = state
        .room_repo
        .find_by_id(room_id)
        .await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    // The wire form must always match the room's current grid exactly.
    let bitset = AvailabilityBitset::parse(&payload.availability)?;
    let total_slots = room.total_slots()?;
    if bitset.len() != total_slots {
        return Err(AppError::Validation(format!(
            "Availability must be exactly {} characters, got {}",
            total_slots,
            bitset.len()
        )));
    }

    let participant = state
        .participant_repo
        .update_availability(room_id, participant_id, &bitset.to_string())
        .await?
        .ok_or(AppError::NotFound("Participant not found".into()))?;

    info!(
        "Availability updated: room {} participant {} ({} slots selected)",
        room_id,
        participant_id,
        bitset.count_set()
    );

    let room = load_snapshot(&state, room_id).await?;
    Ok(Json(AvailabilityUpdatedResponse { participant, room }))
}
