use chrono::{DateTime, Local, TimeZone};

/// Generate a chronological note ID from the current local time.
///
/// Returns a 14-digit `YYYYMMDDHHmmss` string. IDs sort chronologically,
/// but two calls within the same second return the same value: only
/// second-level ordering is guaranteed, not uniqueness.
pub fn generate_chronological_id() -> String {
    generate_chronological_id_at(&Local::now())
}

/// Format an explicit time as a chronological note ID.
pub fn generate_chronological_id_at<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%Y%m%d%H%M%S").to_string()
}
