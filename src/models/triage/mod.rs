pub mod triage;

pub use triage::{triage_text, TriageRequest, TriageResult};
