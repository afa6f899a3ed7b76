use crate::domain::models::{participant::Participant, room::Room};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreatedResponse {
    pub room_id: i64,
    pub host_id: String,
}

/// Room plus everything derived from its participant set. The heatmap is
/// recomputed for every snapshot, never stored.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    #[serde(flatten)]
    pub room: Room,
    pub participants: Vec<Participant>,
    pub heatmap: Vec<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomResponse {
    pub participant: Participant,
    pub room: RoomSnapshot,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityUpdatedResponse {
    pub participant: Participant,
    pub room: RoomSnapshot,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotParticipant {
    pub name: String,
    pub timezone: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDetailResponse {
    pub slot_index: i64,
    pub participant_count: usize,
    pub available_participants: Vec<SlotParticipant>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSlotEntry {
    pub slot_index: usize,
    pub participant_count: u32,
    pub available_participants: Vec<String>,
    pub starts_at_utc: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSlotsResponse {
    pub room_id: i64,
    pub slots: Vec<BestSlotEntry>,
}
