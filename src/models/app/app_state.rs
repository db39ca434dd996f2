use log::warn;

use crate::models::Alert;
use crate::services::RequestClient;
use crate::utils::ActivityLog;

/// Shared by every front-end handler.
#[derive(Clone)]
pub struct AppState {
    pub client: RequestClient,
    pub activity_log: Option<ActivityLog>,
}

impl AppState {
    pub fn new(client: RequestClient, activity_log: Option<ActivityLog>) -> Self {
        Self {
            client,
            activity_log,
        }
    }

    /// Appends the alert to the activity log, if one is configured. A log
    /// that cannot be written never changes what the user sees.
    pub async fn record(&self, operation: &str, alert: &Alert) {
        if let Some(activity_log) = &self.activity_log {
            if let Err(e) = activity_log.record(operation, alert).await {
                warn!(
                    "failed to write activity log {}: {}",
                    activity_log.path().display(),
                    e
                );
            }
        }
    }
}
