use crate::domain::models::room::Room;
use crate::error::AppError;

/// Host-gated check guarding the `Open -> Confirmed` transition. The caller
/// persists the transition only after this passes. Confirming a slot nobody
/// marked is allowed, and re-confirming overwrites the previous choice.
pub fn authorize(room: &Room, slot_index: i64, requesting_host_id: &str) -> Result<(), AppError> {
    if requesting_host_id != room.host_id {
        return Err(AppError::Forbidden(
            "Only the host can confirm a meeting time".into(),
        ));
    }

    let total_slots = room.total_slots()? as i64;
    if slot_index < 0 || slot_index >= total_slots {
        return Err(AppError::Validation(format!(
            "Slot index {} out of range (room has {} slots)",
            slot_index, total_slots
        )));
    }

    Ok(())
}
