use crate::domain::{
    models::participant::{NewParticipant, Participant},
    ports::ParticipantRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresParticipantRepo {
    pool: PgPool,
}

impl PostgresParticipantRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for PostgresParticipantRepo {
    async fn create(&self, participant: &NewParticipant) -> Result<Participant, AppError> {
        sqlx::query_as::<_, Participant>(
            r#"INSERT INTO participants (room_id, name, timezone, availability, created_at)
            VALUES ($1, $2, $3, $4, $5)
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
            "SELECT * FROM participants WHERE room_id = $1 AND id = $2",
        )
        .bind(room_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_by_room(&self, room_id: i64) -> Result<Vec<Participant>, AppError> {
        sqlx::query_as::<_, Participant>(
            "SELECT * FROM participants WHERE room_id = $1 ORDER BY id",
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
            "UPDATE participants SET availability = $1 WHERE room_id = $2 AND id = $3 RETURNING *",
        )
        .bind(availability)
        .bind(room_id)
        .bind(participant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
