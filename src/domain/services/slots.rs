use crate::error::AppError;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

pub const HOURS_PER_DAY: usize = 24;

/// Number of calendar days in the inclusive range `[start, end]`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> Result<i64, AppError> {
    if end < start {
        return Err(AppError::Validation(
            "End date must not be before start date".into(),
        ));
    }
    Ok((end - start).num_days() + 1)
}

/// Total number of hour slots in a room spanning `[start, end]`. The grid
/// always covers the full 24 hours of every day.
pub fn total_slots(start: NaiveDate, end: NaiveDate) -> Result<usize, AppError> {
    Ok(days_inclusive(start, end)? as usize * HOURS_PER_DAY)
}

/// Flat slot index for a (day offset, hour of day) pair.
pub fn to_index(day_index: usize, hour_index: usize) -> Result<usize, AppError> {
    if hour_index >= HOURS_PER_DAY {
        return Err(AppError::Validation(format!(
            "Hour index {} out of range 0-23",
            hour_index
        )));
    }
    Ok(day_index * HOURS_PER_DAY + hour_index)
}

/// Inverse of `to_index`.
pub fn from_index(slot_index: usize) -> (usize, usize) {
    (slot_index / HOURS_PER_DAY, slot_index % HOURS_PER_DAY)
}

/// Absolute UTC instant a slot stands for: `start_date + day_index` days
/// at `hour_index:00` UTC. The grid is timezone-agnostic at rest; this is
/// the anchor every per-viewer conversion starts from.
pub fn slot_to_utc(start_date: NaiveDate, slot_index: usize) -> DateTime<Utc> {
    let (day_index, hour_index) = from_index(slot_index);
    let date = start_date + Duration::days(day_index as i64);
    // hour_index < 24 by construction
    let naive = date.and_hms_opt(hour_index as u32, 0, 0).unwrap();
    Utc.from_utc_datetime(&naive)
}

/// Renders a slot's anchor instant in the viewer's timezone. The offset is
/// resolved for the slot's actual calendar date, so rooms spanning a DST
/// transition display each slot with the offset in force on that day.
pub fn slot_to_local(start_date: NaiveDate, slot_index: usize, tz: Tz) -> DateTime<Tz> {
    slot_to_utc(start_date, slot_index).with_timezone(&tz)
}
