use log::{debug, info, warn};
use reqwest::{header::CONTENT_TYPE, Method};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::Failure;
use crate::utils::join_url;

use super::RequestClient;

impl RequestClient {
    /// Issues one authenticated request and parses the body as JSON.
    ///
    /// The status code is only logged: a non-2xx answer with a JSON body is
    /// handed back like any other.
    pub(crate) async fn send_json<B>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, Failure>
    where
        B: Serialize + ?Sized,
    {
        let call_id = Uuid::new_v4();
        let url = join_url(&self.base_url, path);
        debug!("[{}] {} -> {} {}", call_id, operation, method, url);

        match self.fetch_json(call_id, method, &url, body).await {
            Ok(value) => {
                info!("[{}] {} completed", call_id, operation);
                Ok(value)
            }
            Err(failure) => {
                warn!("[{}] {} failed: {}", call_id, operation, failure);
                Err(failure)
            }
        }
    }

    async fn fetch_json<B>(
        &self,
        call_id: Uuid,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Value, Failure>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.auth_token);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("[{}] {} answered {}", call_id, url, status);
        }

        let raw_response = response.bytes().await?;
        let value = serde_json::from_slice::<Value>(&raw_response)?;
        Ok(value)
    }
}
