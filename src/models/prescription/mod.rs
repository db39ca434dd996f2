use serde_json::Value;

/// Latest prescription for a patient, e.g. `{medication, instructions, created_at}`
/// or `{"prescription": null}` when there is none.
pub type PrescriptionRecord = Value;
