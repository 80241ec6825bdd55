use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
    Other,
}

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "annual",
            LeaveType::Sick => "sick",
            LeaveType::Personal => "personal",
            LeaveType::Other => "other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "annual" => Some(LeaveType::Annual),
            "sick" => Some(LeaveType::Sick),
            "personal" => Some(LeaveType::Personal),
            "other" => Some(LeaveType::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(LeaveStatus::Pending),
            "approved" => Some(LeaveStatus::Approved),
            "rejected" => Some(LeaveStatus::Rejected),
            _ => None,
        }
    }
}

/// Attachment metadata as persisted by the store. Only `{name, type, size}`
/// is kept; file contents are never uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequestResponse {
    pub id: String,
    pub employee_name: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub comment: Option<String>,
    #[serde(default)]
    pub attachments: Vec<AttachmentMeta>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload. The store assigns id, status (pending) and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    pub employee_name: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    #[serde(default)]
    pub attachments: Vec<AttachmentMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: String,
    pub display_name: String,
}

/// The four slices of the leave-request collection the UI can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListFilter {
    Mine,
    Pending,
    /// Decided requests. Includes rejected records as well as approved ones,
    /// matching the observed behavior of the original view.
    Approved,
    All,
}

impl ListFilter {
    /// Query parameters for the list endpoint. Results are always requested
    /// newest-first; repeating the `status` key expresses an OR predicate.
    pub fn query_params(&self, employee: Option<&str>) -> Vec<(&'static str, String)> {
        let mut params = vec![("order", "created_at.desc".to_string())];
        match self {
            ListFilter::Mine => {
                if let Some(name) = employee {
                    params.push(("employee_name", name.to_string()));
                }
            }
            ListFilter::Pending => params.push(("status", "pending".to_string())),
            ListFilter::Approved => {
                params.push(("status", "approved".to_string()));
                params.push(("status", "rejected".to_string()));
            }
            ListFilter::All => {}
        }
        params
    }
}

use leptos::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_create_leave_request_snake_case_fields() {
        let req = CreateLeaveRequest {
            employee_name: "Alice Example".into(),
            leave_type: LeaveType::Annual,
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            reason: "family trip".into(),
            attachments: vec![],
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["employee_name"], json!("Alice Example"));
        assert_eq!(v["leave_type"], json!("annual"));
        assert_eq!(v["start_date"], json!("2024-02-01"));
        assert_eq!(v["end_date"], json!("2024-02-05"));
        assert_eq!(v["attachments"], json!([]));
    }

    #[test]
    fn attachment_meta_uses_type_key_on_the_wire() {
        let meta = AttachmentMeta {
            name: "note.pdf".into(),
            media_type: "application/pdf".into(),
            size: 2048,
        };
        let v = serde_json::to_value(&meta).unwrap();
        assert_eq!(v["type"], json!("application/pdf"));
        assert!(v.get("media_type").is_none());
    }

    #[test]
    fn deserialize_leave_request_defaults_attachments() {
        let record: LeaveRequestResponse = serde_json::from_value(json!({
            "id": "req-1",
            "employee_name": "Alice Example",
            "leave_type": "sick",
            "start_date": "2024-03-01",
            "end_date": "2024-03-02",
            "reason": "flu",
            "status": "pending",
            "comment": null,
            "created_at": "2024-02-28T08:00:00Z",
            "updated_at": "2024-02-28T08:00:00Z"
        }))
        .unwrap();
        assert_eq!(record.leave_type, LeaveType::Sick);
        assert_eq!(record.status, LeaveStatus::Pending);
        assert!(record.comment.is_none());
        assert!(record.attachments.is_empty());
    }

    #[test]
    fn status_and_type_round_trip_through_str_values() {
        for status in [
            LeaveStatus::Pending,
            LeaveStatus::Approved,
            LeaveStatus::Rejected,
        ] {
            assert_eq!(LeaveStatus::from_value(status.as_str()), Some(status));
        }
        for leave_type in [
            LeaveType::Annual,
            LeaveType::Sick,
            LeaveType::Personal,
            LeaveType::Other,
        ] {
            assert_eq!(LeaveType::from_value(leave_type.as_str()), Some(leave_type));
        }
        assert_eq!(LeaveStatus::from_value("cancelled"), None);
    }

    #[test]
    fn list_query_params_match_each_filter_predicate() {
        let mine = ListFilter::Mine.query_params(Some("Alice Example"));
        assert_eq!(
            mine,
            vec![
                ("order", "created_at.desc".to_string()),
                ("employee_name", "Alice Example".to_string()),
            ]
        );

        let pending = ListFilter::Pending.query_params(None);
        assert_eq!(
            pending,
            vec![
                ("order", "created_at.desc".to_string()),
                ("status", "pending".to_string()),
            ]
        );

        let approved = ListFilter::Approved.query_params(None);
        assert_eq!(
            approved,
            vec![
                ("order", "created_at.desc".to_string()),
                ("status", "approved".to_string()),
                ("status", "rejected".to_string()),
            ]
        );

        let all = ListFilter::All.query_params(None);
        assert_eq!(all, vec![("order", "created_at.desc".to_string())]);
    }

    #[test]
    fn list_query_params_skip_employee_when_unknown() {
        let params = ListFilter::Mine.query_params(None);
        assert_eq!(params, vec![("order", "created_at.desc".to_string())]);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.error, "invalid payload");
        assert!(validation.details.is_none());

        let unknown = ApiError::unknown("something failed");
        assert_eq!(unknown.code, "UNKNOWN");

        let request_failed = ApiError::request_failed("network error");
        assert_eq!(request_failed.code, "REQUEST_FAILED");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        crate::test_support::ssr::with_runtime(|| {
            let _: View = ApiError::request_failed("request failed").into_view();
        });
    }
}
