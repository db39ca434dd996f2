// src/api/mod.rs

pub mod handler;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::models::AppState;

pub use handler::{
    direct_triage_handler, health_handler, patient_handler, prescription_handler,
    schedule_handler, triage_handler, workflow_handler,
};

/// Front-end routes. Each one answers with an [`Alert`](crate::models::Alert).
pub fn router(shared_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/triage", post(triage_handler))
        .route("/api/triage/direct", post(direct_triage_handler))
        .route("/api/schedule", post(schedule_handler))
        .route("/api/prescription", get(prescription_handler))
        .route("/api/patient", post(patient_handler))
        .route("/api/workflow", post(workflow_handler))
        .route("/api/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}
