use super::{
    client::ApiClient,
    types::{
        ApiError, CreateLeaveRequest, DecisionRequest, LeaveRequestResponse, ListFilter,
    },
};

impl ApiClient {
    /// Fetch the slice of leave requests selected by `filter`, newest first.
    /// The `mine` filter needs the session's display name to build its
    /// predicate; other filters ignore `employee`.
    pub async fn list_leave_requests(
        &self,
        filter: ListFilter,
        employee: Option<&str>,
    ) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let params = filter.query_params(employee);
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/leave-requests", base_url))
                    .query(&params),
            )
            .await?;
        self.map_json_response(response).await
    }

    /// Fetch one record by id. A missing id is surfaced as the store's
    /// `NOT_FOUND` error, never as an empty success.
    pub async fn get_leave_request(&self, id: &str) -> Result<LeaveRequestResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/leave-requests/{}", base_url, id)),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn create_leave_request(
        &self,
        request: CreateLeaveRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/leave-requests", base_url))
                    .json(&request),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn approve_leave_request(
        &self,
        id: &str,
        comment: &str,
    ) -> Result<LeaveRequestResponse, ApiError> {
        self.decide_leave_request(id, "approve", comment).await
    }

    pub async fn reject_leave_request(
        &self,
        id: &str,
        comment: &str,
    ) -> Result<LeaveRequestResponse, ApiError> {
        self.decide_leave_request(id, "reject", comment).await
    }

    async fn decide_leave_request(
        &self,
        id: &str,
        action: &str,
        comment: &str,
    ) -> Result<LeaveRequestResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/leave-requests/{}/{}", base_url, id, action))
                    .json(&DecisionRequest {
                        comment: comment.to_string(),
                    }),
            )
            .await?;
        self.map_json_response(response).await
    }
}
