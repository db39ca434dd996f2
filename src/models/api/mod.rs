pub mod params;

pub use params::{PatientForm, PrescriptionParams, ScheduleForm, TriageForm, DEFAULT_PATIENT_ID};
