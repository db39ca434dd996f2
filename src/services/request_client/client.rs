use reqwest::Method;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ConfigError, Failure};
use crate::models::{
    triage_text, HealthStatus, NewPatient, PatientId, PatientRecord, PrescriptionRecord,
    ScheduleAck, ScheduleRequest, TriageRequest, TriageResult, WorkflowAck,
};
use crate::utils::normalize_base_url;

pub const TRIAGE_CHAIN_PATH: &str = "triage_chain";
pub const TRIAGE_PATH: &str = "triage";
pub const SCHEDULE_PATH: &str = "schedule";
pub const PRESCRIPTION_PATH: &str = "prescription";
pub const PATIENT_PATH: &str = "patient";
pub const HEALTH_PATH: &str = "health";
pub const WORKFLOW_PATH: &str = "run-workflow";

/// Client for the assistant backend.
///
/// Every operation is a single request with two outcomes: the parsed
/// response or a [`Failure`]. Nothing is retried. Calls are independent and
/// may run concurrently; dropping a returned future abandons its request.
#[derive(Debug, Clone)]
pub struct RequestClient {
    pub(crate) base_url: String,
    pub(crate) auth_token: String,
    pub(crate) http: reqwest::Client,
}

impl RequestClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(&config.base_url);
        if base_url.is_empty() {
            return Err(ConfigError::Empty { name: "base_url" });
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            auth_token: config.auth_token,
            http: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /triage_chain`, resolved to the text to show.
    pub async fn submit_triage(
        &self,
        patient_id: PatientId,
        symptoms: &str,
    ) -> Result<TriageResult, Failure> {
        self.triage("submit_triage", TRIAGE_CHAIN_PATH, patient_id, symptoms)
            .await
    }

    /// `POST /triage`, the single-prompt route. Same body and result as
    /// [`submit_triage`](Self::submit_triage).
    pub async fn submit_direct_triage(
        &self,
        patient_id: PatientId,
        symptoms: &str,
    ) -> Result<TriageResult, Failure> {
        self.triage("submit_direct_triage", TRIAGE_PATH, patient_id, symptoms)
            .await
    }

    async fn triage(
        &self,
        operation: &'static str,
        path: &str,
        patient_id: PatientId,
        symptoms: &str,
    ) -> Result<TriageResult, Failure> {
        let body = TriageRequest {
            patient_id,
            symptoms: symptoms.to_string(),
        };
        let response = self
            .send_json(operation, Method::POST, path, Some(&body))
            .await?;
        // a bare `null` has no field to read the recommendation from
        if response.is_null() {
            return Err(Failure::new("triage response was null"));
        }
        Ok(triage_text(&response))
    }

    /// `POST /schedule`. Calling it twice books twice.
    pub async fn submit_schedule(
        &self,
        patient_id: PatientId,
        scheduled_at: &str,
        notes: &str,
    ) -> Result<ScheduleAck, Failure> {
        let body = ScheduleRequest {
            patient_id,
            scheduled_at: scheduled_at.to_string(),
            notes: notes.to_string(),
        };
        self.send_json("submit_schedule", Method::POST, SCHEDULE_PATH, Some(&body))
            .await
    }

    /// `GET /prescription/{patient_id}`.
    pub async fn query_prescription(
        &self,
        patient_id: PatientId,
    ) -> Result<PrescriptionRecord, Failure> {
        let path = format!("{}/{}", PRESCRIPTION_PATH, patient_id);
        self.send_json::<Value>("query_prescription", Method::GET, &path, None)
            .await
    }

    /// `POST /patient`; `phone` goes out as `null` when absent.
    pub async fn register_patient(
        &self,
        name: &str,
        phone: Option<&str>,
    ) -> Result<PatientRecord, Failure> {
        let body = NewPatient {
            name: name.to_string(),
            phone: phone.map(str::to_string),
        };
        self.send_json("register_patient", Method::POST, PATIENT_PATH, Some(&body))
            .await
    }

    pub async fn check_health(&self) -> Result<HealthStatus, Failure> {
        self.send_json::<Value>("check_health", Method::GET, HEALTH_PATH, None)
            .await
    }

    /// `POST /run-workflow` with the payload forwarded as is.
    pub async fn run_workflow(&self, payload: &Value) -> Result<WorkflowAck, Failure> {
        self.send_json("run_workflow", Method::POST, WORKFLOW_PATH, Some(payload))
            .await
    }
}
