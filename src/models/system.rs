use serde_json::Value;

/// `GET /health` answer, `{status, time}` on the reference backend.
pub type HealthStatus = Value;

/// `POST /run-workflow` answer.
pub type WorkflowAck = Value;
