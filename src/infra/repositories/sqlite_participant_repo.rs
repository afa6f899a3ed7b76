use crate::domain::{
    models::participant::{NewParticipant, Participant},
    ports::ParticipantRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteParticipantRepo {
    pool: SqlitePool,
}

impl SqliteParticipantRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for SqliteParticipantRepo {
    async fn create(&self, participant: &NewParticipant) -> Result<Participant, AppError> {
        sqlx::query_as::<_, Participant>(
            r#"INSERT INTO participants (room_id, name, timezone, availability, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *"#,
        )
        .bind(participant.room_id)
        .bind(&participant.name)
        .bind(&participant.timezone)
        .bind(&participant.availability)
        .bind(participant.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, room_id: i64, id: i64) -> Result<Option<Participant>, AppError> {
        sqlx::query_as::<_, Participant>(
            "SELECT * FROM participants WHERE room_id = ? AND id = ?",
        )
        .bind(room_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_by_room(&self, room_id: i64) -> Result<Vec<Participant>, AppError> {
        sqlx::query_as::<_, Participant>(
            "SELECT * FROM participants WHERE room_id = ? ORDER BY id",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn update_availability(
        &self,
        room_id: i64,
        participant_id: i64,
        availability: &str,
    ) -> Result<Option<Participant>, AppError> {
        sqlx::query_as::<_, Participant>(
            "UPDATE participants SET availability = ? WHERE room_id = ? AND id = ? RETURNING *",
        )
        .bind(availability)
        .bind(room_id)
        .bind(participant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
