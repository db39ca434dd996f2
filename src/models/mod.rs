// src/models/mod.rs

pub mod alert;
pub mod api;
pub mod app;
pub mod appointments;
pub mod patient;
pub mod prescription;
pub mod system;
pub mod triage;

pub use alert::Alert;
pub use api::{PatientForm, PrescriptionParams, ScheduleForm, TriageForm};
pub use app::AppState;
pub use appointments::{default_scheduled_at, ScheduleAck, ScheduleRequest};
pub use patient::{NewPatient, PatientId, PatientRecord};
pub use prescription::PrescriptionRecord;
pub use system::{HealthStatus, WorkflowAck};
pub use triage::{triage_text, TriageRequest, TriageResult};
