use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{ConfirmSlotRequest, CreateRoomRequest};
use crate::api::dtos::responses::{RoomCreatedResponse, RoomSnapshot};
use crate::domain::models::{participant::NewParticipant, room::NewRoom};
use crate::domain::services::{availability::AvailabilityBitset, confirmation, heatmap, slots};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating room: {}", payload.name);

    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Room name must not be empty".into()));
    }
    if payload.host_name.trim().is_empty() {
        return Err(AppError::Validation("Host name must not be empty".into()));
    }
    if !(0..=23).contains(&payload.time_start) {
        return Err(AppError::Validation(
            "timeStart must be between 0 and 23".into(),
        ));
    }
    if !(1..=24).contains(&payload.time_end) {
        return Err(AppError::Validation(
            "timeEnd must be between 1 and 24".into(),
        ));
    }
    if payload.time_start >= payload.time_end {
        return Err(AppError::Validation(
            "timeStart must be before timeEnd".into(),
        ));
    }
    if payload.host_timezone.parse::<Tz>().is_err() {
        return Err(AppError::Validation("Invalid timezone".into()));
    }

    // Also rejects endDate < startDate.
    let total_slots = slots::total_slots(payload.start_date, payload.end_date)?;

    let new_room = NewRoom::new(
        payload.name,
        payload.start_date,
        payload.end_date,
        payload.time_start,
        payload.time_end,
    );
    let room = state.room_repo.create(&new_room).await?;

    // The host always joins as the first participant, nothing marked yet.
    let host = NewParticipant::new(
        room.id,
        payload.host_name,
        payload.host_timezone,
        AvailabilityBitset::empty(total_slots).to_string(),
    );
    state.participant_repo.create(&host).await?;

    info!("Room created: {} ({} slots)", room.id, total_slots);
    Ok(Json(RoomCreatedResponse {
        room_id: room.id,
        host_id: room.host_id,
    }))
}

pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = load_snapshot(&state, room_id).await?;
    Ok(Json(snapshot))
}

pub async fn confirm_slot(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<i64>,
    Json(payload): Json<ConfirmSlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let room = state
        .room_repo
        .find_by_id(room_id)
        .await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    confirmation::authorize(&room, payload.slot_index, &payload.host_id)?;

    state
        .room_repo
        .confirm_slot(room_id, payload.slot_index)
        .await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    info!(
        "Meeting time confirmed: room {} slot {}",
        room_id, payload.slot_index
    );

    let snapshot = load_snapshot(&state, room_id).await?;
    Ok(Json(snapshot))
}

/// Room state plus participants and the freshly computed heatmap, the shape
/// every mutating endpoint returns so clients can re-render from one response.
pub(crate) async fn load_snapshot(
    state: &AppState,
    room_id: i64,
) -> Result<RoomSnapshot, AppError> {
    let room = state
        .room_repo
        .find_by_id(room_id)
        .await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    let participants = state.participant_repo.list_by_room(room_id).await?;
    let heatmap = heatmap::compute(room.total_slots()?, &participants);

    Ok(RoomSnapshot {
        room,
        participants,
        heatmap,
    })
}
