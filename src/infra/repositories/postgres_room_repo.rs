use crate::domain::{
    models::room::{NewRoom, Room},
    ports::RoomRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresRoomRepo {
    pool: PgPool,
}

impl PostgresRoomRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepo {
    async fn create(&self, room: &NewRoom) -> Result<Room, AppError> {
        sqlx::query_as::<_, Room>(
            r#"INSERT INTO rooms (
                name, host_id, start_date, end_date, time_start, time_end,
                is_confirmed, confirmed_slot, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, FALSE, NULL, $7)
            RETURNING *"#,
        )
        .bind(&room.name)
        .bind(&room.host_id)
        .bind(room.start_date)
        .bind(room.end_date)
        .bind(room.time_start)
        .bind(room.time_end)
        .bind(room.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, AppError> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn confirm_slot(&self, id: i64, slot_index: i64) -> Result<Option<Room>, AppError> {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET is_confirmed = TRUE, confirmed_slot = $1 WHERE id = $2 RETURNING *",
        )
        .bind(slot_index)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
