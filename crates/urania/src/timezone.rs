//! Coarse timezone estimation from longitude.
//!
//! The offset is `round(longitude / 15)` hours, looked up in a fixed table of
//! representative IANA zones. Political boundaries and daylight saving are
//! ignored.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

const TIMEZONE_TABLE: [(i32, &str); 25] = [
    (-12, "Pacific/Kwajalein"),
    (-11, "Pacific/Midway"),
    (-10, "Pacific/Honolulu"),
    (-9, "America/Anchorage"),
    (-8, "America/Los_Angeles"),
    (-7, "America/Denver"),
    (-6, "America/Chicago"),
    (-5, "America/New_York"),
    (-4, "America/Halifax"),
    (-3, "America/Sao_Paulo"),
    (-2, "Atlantic/South_Georgia"),
    (-1, "Atlantic/Azores"),
    (0, "Europe/London"),
    (1, "Europe/Paris"),
    (2, "Europe/Berlin"),
    (3, "Europe/Moscow"),
    (4, "Asia/Dubai"),
    (5, "Asia/Karachi"),
    (6, "Asia/Dhaka"),
    (7, "Asia/Bangkok"),
    (8, "Asia/Shanghai"),
    (9, "Asia/Tokyo"),
    (10, "Australia/Sydney"),
    (11, "Pacific/Norfolk"),
    (12, "Pacific/Auckland"),
];

pub const FALLBACK_ZONE: &str = "UTC";

/// Whole-hour offset estimated from longitude. Halves round toward +∞, so
/// -7.5 gives -7 and 7.5 gives 8.
pub fn estimate_offset_hours(longitude: f64) -> Option<i32> {
    if !longitude.is_finite() {
        return None;
    }
    Some((longitude / 15.0 + 0.5).floor() as i32)
}

pub fn iana_zone_for_longitude(longitude: f64) -> &'static str {
    estimate_offset_hours(longitude)
        .and_then(|offset| {
            TIMEZONE_TABLE
                .iter()
                .find(|(hours, _)| *hours == offset)
                .map(|(_, zone)| *zone)
        })
        .unwrap_or(FALLBACK_ZONE)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcBirthTime {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:mm`
    pub time: String,
}

/// Shift a local date and time by `offset_hours` into UTC. Unparseable input is
/// returned unchanged.
pub fn to_utc(date: &str, time: &str, offset_hours: i32) -> UtcBirthTime {
    let unchanged = || UtcBirthTime {
        date: date.to_string(),
        time: time.to_string(),
    };
    let Ok(local) = NaiveDateTime::parse_from_str(&format!("{}T{}", date, time), "%Y-%m-%dT%H:%M")
    else {
        return unchanged();
    };
    match local.checked_sub_signed(Duration::hours(i64::from(offset_hours))) {
        Some(utc) => UtcBirthTime {
            date: utc.format("%Y-%m-%d").to_string(),
            time: utc.format("%H:%M").to_string(),
        },
        None => unchanged(),
    }
}
