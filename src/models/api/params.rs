use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Initial value of the patient id field on the mobile screen.
pub const DEFAULT_PATIENT_ID: &str = "1";

fn default_patient_id() -> String {
    DEFAULT_PATIENT_ID.to_string()
}

// Form fields are text, but a client posting `"patient_id": 42` should not be refused.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Null => Ok(String::new()),
        other => Ok(other.to_string()),
    }
}

#[derive(Debug, Deserialize)]
pub struct TriageForm {
    #[serde(default = "default_patient_id", deserialize_with = "text_or_number")]
    pub patient_id: String,
    #[serde(default)]
    pub symptoms: String,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleForm {
    #[serde(default = "default_patient_id", deserialize_with = "text_or_number")]
    pub patient_id: String,
    /// Pre-filled with the current UTC time when absent.
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct PrescriptionParams {
    #[serde(default = "default_patient_id")]
    pub patient_id: String,
}

#[derive(Debug, Deserialize)]
pub struct PatientForm {
    #[serde(default)]
    pub name: String,
    pub phone: Option<String>,
}
