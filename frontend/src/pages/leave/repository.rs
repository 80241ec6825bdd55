use crate::api::{
    ApiClient, ApiError, CreateLeaveRequest, LeaveRequestResponse, LeaveStatus, ListFilter,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRepository {
    client: Rc<ApiClient>,
}

impl LeaveRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(
        &self,
        filter: ListFilter,
        employee: Option<&str>,
    ) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        if filter == ListFilter::Mine && employee.is_none() {
            return Err(ApiError::validation(
                "Your session has not finished loading yet.",
            ));
        }
        self.client.list_leave_requests(filter, employee).await
    }

    pub async fn fetch(&self, id: &str) -> Result<LeaveRequestResponse, ApiError> {
        self.client.get_leave_request(id).await
    }

    pub async fn submit(
        &self,
        payload: CreateLeaveRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        self.client.create_leave_request(payload).await
    }

    /// Route a decision to exactly one of the approve/reject operations.
    pub async fn decide(
        &self,
        id: &str,
        status: LeaveStatus,
        comment: &str,
    ) -> Result<LeaveRequestResponse, ApiError> {
        match status {
            LeaveStatus::Approved => self.client.approve_leave_request(id, comment).await,
            LeaveStatus::Rejected => self.client.reject_leave_request(id, comment).await,
            LeaveStatus::Pending => Err(ApiError::validation(
                "A decision must be approve or reject.",
            )),
        }
    }
}
