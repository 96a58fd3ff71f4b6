use super::category::Category;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One recorded instance of time lost to a distraction.
/// Serialized one-per-line into the monthly log file; field names below
/// are the wire names of the log format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterruptEvent {
    /// Seconds since epoch, set at record-creation time.
    #[serde(rename = "epochDate")]
    pub epoch_date: i64,

    /// Whole minutes lost, truncated from the validated duration.
    #[serde(rename = "duration")]
    pub duration_minutes: i64,

    pub category: Category,

    /// Free-form origin identifier (hostname or a placeholder token).
    pub fqdn: String,
}

impl InterruptEvent {
    /// High-level constructor for events created by the `add` handler.
    /// `now` is captured once by the caller so that the timestamp and the
    /// month key of the write come from the same instant.
    pub fn new(now: DateTime<Local>, duration_minutes: i64, category: Category, fqdn: &str) -> Self {
        Self {
            epoch_date: now.timestamp(),
            duration_minutes,
            category,
            fqdn: fqdn.to_string(),
        }
    }
}
