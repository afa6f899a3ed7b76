use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A person who joined a room, including the host (always participant
/// number one). `availability` is the wire/storage form of the bitset:
/// one '0'/'1' ASCII character per slot, length equal to the room's
/// total slot count.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: i64,
    pub room_id: i64,
    pub name: String,
    pub timezone: String,
    pub availability: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewParticipant {
    pub room_id: i64,
    pub name: String,
    pub timezone: String,
    pub availability: String,
    pub created_at: DateTime<Utc>,
}

impl NewParticipant {
    pub fn new(room_id: i64, name: String, timezone: String, availability: String) -> Self {
        Self {
            room_id,
            name,
            timezone,
            availability,
            created_at: Utc::now(),
        }
    }
}
