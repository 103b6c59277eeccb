use chrono::NaiveTime;
use serde::Serialize;

pub const HOURS_PER_DAY: u32 = 24;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: u32,
    pub begin: NaiveTime,
    pub end: NaiveTime,
    pub index: u32,
    pub timeslots: u32,
}

/// Start of the hour `hour` wrapped into a single day.
pub fn hour_of_day(hour: u32) -> NaiveTime {
    NaiveTime::MIN + chrono::Duration::hours(i64::from(hour % HOURS_PER_DAY))
}

/// One slot per hour, the last ending at midnight.
pub fn hourly_time_slots() -> Vec<TimeSlot> {
    (0..HOURS_PER_DAY)
        .map(|i| TimeSlot {
            id: i,
            begin: hour_of_day(i),
            end: hour_of_day(i + 1),
            index: i,
            timeslots: HOURS_PER_DAY,
        })
        .collect()
}
