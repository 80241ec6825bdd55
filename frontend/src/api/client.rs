use reqwest::Client;

use crate::{api::types::ApiError, config};

/// Thin wrapper around the record store's HTTP surface. The base url comes
/// from the runtime config unless a test supplies one explicitly.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(crate) async fn map_json_response<R>(&self, response: reqwest::Response) -> Result<R, ApiError>
    where
        R: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            let error: ApiError = response
                .json()
                .await
                .map_err(|e| Self::map_error_payload_parse_failure(status, e))?;
            Err(error)
        }
    }

    fn map_error_payload_parse_failure(status: reqwest::StatusCode, err: reqwest::Error) -> ApiError {
        ApiError::request_failed(format!(
            "Request failed with status {}: {}",
            status.as_u16(),
            err
        ))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
