use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::models::{
    default_scheduled_at, Alert, AppState, PatientForm, PatientId, PrescriptionParams,
    ScheduleForm, TriageForm,
};

fn compact(value: Value) -> String {
    value.to_string()
}

pub async fn triage_handler(
    State(state): State<Arc<AppState>>,
    Json(form): Json<TriageForm>,
) -> Json<Alert> {
    let patient_id = PatientId::coerce(&form.patient_id);
    let outcome = state.client.submit_triage(patient_id, &form.symptoms).await;

    let alert = Alert::from_outcome("Result", outcome, |text| text);
    state.record("triage", &alert).await;
    Json(alert)
}

pub async fn direct_triage_handler(
    State(state): State<Arc<AppState>>,
    Json(form): Json<TriageForm>,
) -> Json<Alert> {
    let patient_id = PatientId::coerce(&form.patient_id);
    let outcome = state
        .client
        .submit_direct_triage(patient_id, &form.symptoms)
        .await;

    let alert = Alert::from_outcome("Result", outcome, |text| text);
    state.record("direct_triage", &alert).await;
    Json(alert)
}

pub async fn schedule_handler(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ScheduleForm>,
) -> Json<Alert> {
    let patient_id = PatientId::coerce(&form.patient_id);
    let scheduled_at = form.scheduled_at.unwrap_or_else(default_scheduled_at);
    let outcome = state
        .client
        .submit_schedule(patient_id, &scheduled_at, &form.notes)
        .await;

    let alert = Alert::from_outcome("Scheduled", outcome, compact);
    state.record("schedule", &alert).await;
    Json(alert)
}

pub async fn prescription_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PrescriptionParams>,
) -> Json<Alert> {
    let patient_id = PatientId::coerce(&params.patient_id);
    let outcome = state.client.query_prescription(patient_id).await;

    let alert = Alert::from_outcome("Prescription", outcome, compact);
    state.record("prescription", &alert).await;
    Json(alert)
}

pub async fn patient_handler(
    State(state): State<Arc<AppState>>,
    Json(form): Json<PatientForm>,
) -> Json<Alert> {
    let outcome = state
        .client
        .register_patient(&form.name, form.phone.as_deref())
        .await;

    let alert = Alert::from_outcome("Patient", outcome, compact);
    state.record("patient", &alert).await;
    Json(alert)
}

pub async fn workflow_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Json<Alert> {
    let outcome = state.client.run_workflow(&payload).await;

    let alert = Alert::from_outcome("Workflow", outcome, compact);
    state.record("workflow", &alert).await;
    Json(alert)
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Alert> {
    let outcome = state.client.check_health().await;

    let alert = Alert::from_outcome("Backend", outcome, compact);
    state.record("health", &alert).await;
    Json(alert)
}
