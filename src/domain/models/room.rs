use crate::domain::services::slots;
use crate::error::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use rand::{Rng, distributions::Alphanumeric};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A scheduling session spanning an inclusive date range. The hour grid
/// always covers the full 24 hours of every day; `time_start`/`time_end`
/// are advisory display bounds, not slot restrictions.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub host_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub time_start: i32,
    pub time_end: i32,
    pub is_confirmed: bool,
    pub confirmed_slot: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn total_slots(&self) -> Result<usize, AppError> {
        slots::total_slots(self.start_date, self.end_date)
    }
}

pub struct NewRoom {
    pub name: String,
    pub host_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub time_start: i32,
    pub time_end: i32,
    pub created_at: DateTime<Utc>,
}

impl NewRoom {
    pub fn new(
        name: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        time_start: i32,
        time_end: i32,
    ) -> Self {
        Self {
            name,
            host_id: generate_host_id(),
            start_date,
            end_date,
            time_start,
            time_end,
            created_at: Utc::now(),
        }
    }
}

/// Opaque token proving host identity. Generated once at room creation.
fn generate_host_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(21)
        .map(char::from)
        .collect()
}
