use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::api::dtos::requests::BestSlotsQuery;
use crate::api::dtos::responses::{
    BestSlotEntry, BestSlotsResponse, SlotDetailResponse, SlotParticipant,
};
use crate::domain::services::{heatmap, ranking, slots};
use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_BEST_SLOTS: usize = 5;

pub async fn get_slot_detail(
    State(state): State<Arc<AppState>>,
    Path((room_id, slot_index)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    let room = state
        .room_repo
        .find_by_id(room_id)
        .await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    let total_slots = room.total_slots()? as i64;
    if slot_index < 0 || slot_index >= total_slots {
        return Err(AppError::Validation(format!(
            "Slot index {} out of range (room has {} slots)",
            slot_index, total_slots
        )));
    }

    let participants = state.participant_repo.list_by_room(room_id).await?;
    let available_participants: Vec<SlotParticipant> = participants
        .iter()
        .filter(|p| heatmap::is_available_at(p, slot_index as usize))
        .map(|p| SlotParticipant {
            name: p.name.clone(),
            timezone: p.timezone.clone(),
        })
        .collect();

    Ok(Json(SlotDetailResponse {
        slot_index,
        participant_count: available_participants.len(),
        available_participants,
    }))
}

pub async fn get_best_slots(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<i64>,
    Query(params): Query<BestSlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let room = state
        .room_repo
        .find_by_id(room_id)
        .await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    let participants = state.participant_repo.list_by_room(room_id).await?;
    let heatmap = heatmap::compute(room.total_slots()?, &participants);
    let ranked = ranking::rank(&heatmap, &participants);

    let limit = params.limit.unwrap_or(DEFAULT_BEST_SLOTS);
    let entries: Vec<BestSlotEntry> = ranked
        .into_iter()
        .take(limit)
        .map(|slot| BestSlotEntry {
            starts_at_utc: slots::slot_to_utc(room.start_date, slot.slot_index),
            slot_index: slot.slot_index,
            participant_count: slot.participant_count,
            available_participants: slot.available_participants,
        })
        .collect();

    Ok(Json(BestSlotsResponse {
        room_id,
        slots: entries,
    }))
}
