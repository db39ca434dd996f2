pub mod patient_id;
pub mod registration;

pub use patient_id::PatientId;
pub use registration::{NewPatient, PatientRecord};
