use crate::domain::models::{
    participant::{NewParticipant, Participant},
    room::{NewRoom, Room},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, room: &NewRoom) -> Result<Room, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, AppError>;
    /// Marks the room confirmed on the given slot. Overwrites any previous
    /// confirmation. Returns `None` when the room does not exist.
    async fn confirm_slot(&self, id: i64, slot_index: i64) -> Result<Option<Room>, AppError>;
}

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    async fn create(&self, participant: &NewParticipant) -> Result<Participant, AppError>;
    async fn find_by_id(&self, room_id: i64, id: i64) -> Result<Option<Participant>, AppError>;
    async fn list_by_room(&self, room_id: i64) -> Result<Vec<Participant>, AppError>;
    /// Full overwrite of the availability bitset (last write wins).
    async fn update_availability(
        &self,
        room_id: i64,
        participant_id: i64,
        availability: &str,
    ) -> Result<Option<Participant>, AppError>;
}
