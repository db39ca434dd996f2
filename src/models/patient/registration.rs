use serde::Serialize;
use serde_json::Value;

/// Body of `POST /patient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPatient {
    pub name: String,
    pub phone: Option<String>,
}

/// Whatever the backend answers for a registration, usually `{id, name}`.
pub type PatientRecord = Value;
