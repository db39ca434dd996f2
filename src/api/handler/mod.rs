pub mod handler;

pub use handler::{
    direct_triage_handler, health_handler, patient_handler, prescription_handler,
    schedule_handler, triage_handler, workflow_handler,
};
