use crate::domain::{
    models::room::{NewRoom, Room},
    ports::RoomRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteRoomRepo {
    pool: SqlitePool,
}

impl SqliteRoomRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for SqliteRoomRepo {
    async fn create(&self, room: &NewRoom) -> Result<Room, AppError> {
        sqlx::query_as::<_, Room>(
            r#"INSERT INTO rooms (
                name, host_id, start_date, end_date, time_start, time_end,
                is_confirmed, confirmed_slot, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, 0, NULL, ?)
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
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn confirm_slot(&self, id: i64, slot_index: i64) -> Result<Option<Room>, AppError> {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET is_confirmed = 1, confirmed_slot = ? WHERE id = ? RETURNING *",
        )
        .bind(slot_index)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
