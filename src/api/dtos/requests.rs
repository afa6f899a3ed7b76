use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub name: String,
    pub host_name: String,
    pub host_timezone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub time_start: i32,
    pub time_end: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomRequest {
    pub name: String,
    pub timezone: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityRequest {
    pub availability: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmSlotRequest {
    pub slot_index: i64,
    pub host_id: String,
}

#[derive(Deserialize)]
pub struct BestSlotsQuery {
    pub limit: Option<usize>,
}
