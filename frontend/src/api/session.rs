use super::{
    client::ApiClient,
    types::{ApiError, SessionResponse},
};

impl ApiClient {
    /// Identity of the current session as the store sees it. The employee
    /// name stamped onto new requests and the `mine` filter both come from
    /// here; there is no client-side identity resolution.
    pub async fn get_session(&self) -> Result<SessionResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/session/me", base_url)))
            .await?;
        self.map_json_response(response).await
    }
}
