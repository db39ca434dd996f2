use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::models::PatientId;

/// Format the schedule field is pre-filled with, e.g. `2024-01-01T10:00:00`.
pub const SCHEDULE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Body of `POST /schedule`. `scheduled_at` is forwarded untouched; the
/// backend is the one that insists on ISO-8601.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRequest {
    pub patient_id: PatientId,
    pub scheduled_at: String,
    pub notes: String,
}

pub type ScheduleAck = Value;

/// Current UTC time truncated to seconds, without an offset.
pub fn default_scheduled_at() -> String {
    Utc::now().format(SCHEDULE_TIMESTAMP_FORMAT).to_string()
}
