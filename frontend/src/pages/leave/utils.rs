use crate::api::{ApiError, AttachmentMeta, CreateLeaveRequest, LeaveStatus, LeaveType};
use chrono::NaiveDate;
use leptos::*;
use serde_json::json;

#[derive(Clone, Copy)]
pub struct ApplicationFormState {
    leave_type: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
    attachments: RwSignal<Vec<AttachmentMeta>>,
}

impl Default for ApplicationFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal("annual".to_string()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
            attachments: create_rw_signal(Vec::new()),
        }
    }
}

impl ApplicationFormState {
    pub fn leave_type_signal(&self) -> RwSignal<String> {
        self.leave_type
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn attachments_signal(&self) -> RwSignal<Vec<AttachmentMeta>> {
        self.attachments
    }

    pub fn reset(&self) {
        self.leave_type.set("annual".into());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
        self.attachments.set(Vec::new());
    }

    /// Capture metadata for the picked files. Contents are never read; only
    /// `{name, type, size}` is persisted with the request.
    pub fn set_attachments_from_files(&self, files: &web_sys::FileList) {
        let mut metas = Vec::new();
        for index in 0..files.length() {
            if let Some(file) = files.item(index) {
                metas.push(AttachmentMeta {
                    name: file.name(),
                    media_type: file.type_(),
                    size: file.size() as u64,
                });
            }
        }
        self.attachments.set(metas);
    }

    /// Validate every required field before any store call. All field errors
    /// are collected into one validation error so they can be rendered as an
    /// inline list; the entered values are left untouched.
    pub fn to_payload(&self, employee_name: &str) -> Result<CreateLeaveRequest, ApiError> {
        let mut field_errors: Vec<&'static str> = Vec::new();

        let leave_type = LeaveType::from_value(self.leave_type.get().trim());
        if leave_type.is_none() {
            field_errors.push("Select a leave type.");
        }

        let start = parse_date(&self.start_date.get());
        if start.is_none() {
            field_errors.push("Enter a start date (YYYY-MM-DD).");
        }
        let end = parse_date(&self.end_date.get());
        if end.is_none() {
            field_errors.push("Enter an end date (YYYY-MM-DD).");
        }
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                field_errors.push("The end date must not be before the start date.");
            }
        }

        let reason = self.reason.get().trim().to_string();
        if reason.is_empty() {
            field_errors.push("Enter a reason for the request.");
        }

        if !field_errors.is_empty() {
            return Err(field_validation_error(field_errors));
        }

        Ok(CreateLeaveRequest {
            employee_name: employee_name.to_string(),
            leave_type: leave_type.unwrap_or(LeaveType::Annual),
            start_date: start.unwrap_or_default(),
            end_date: end.unwrap_or_default(),
            reason,
            attachments: self.attachments.get(),
        })
    }
}

#[derive(Clone, Copy)]
pub struct DecisionFormState {
    status: RwSignal<String>,
    comment: RwSignal<String>,
}

impl Default for DecisionFormState {
    fn default() -> Self {
        Self {
            // Starts unset; submit stays disabled until a decision is picked
            // and a comment entered.
            status: create_rw_signal(String::new()),
            comment: create_rw_signal(String::new()),
        }
    }
}

impl DecisionFormState {
    pub fn status_signal(&self) -> RwSignal<String> {
        self.status
    }

    pub fn comment_signal(&self) -> RwSignal<String> {
        self.comment
    }

    pub fn reset(&self) {
        self.status.set(String::new());
        self.comment.set(String::new());
    }

    /// Reactive completeness check driving the submit button.
    pub fn is_complete(&self) -> bool {
        matches!(
            LeaveStatus::from_value(&self.status.get()),
            Some(LeaveStatus::Approved) | Some(LeaveStatus::Rejected)
        ) && !self.comment.get().trim().is_empty()
    }

    pub fn to_decision(&self) -> Result<(LeaveStatus, String), ApiError> {
        let status = match LeaveStatus::from_value(&self.status.get()) {
            Some(LeaveStatus::Approved) => LeaveStatus::Approved,
            Some(LeaveStatus::Rejected) => LeaveStatus::Rejected,
            _ => return Err(ApiError::validation("Select approve or reject.")),
        };
        let comment = self.comment.get().trim().to_string();
        if comment.is_empty() {
            return Err(ApiError::validation("Enter a decision comment."));
        }
        Ok((status, comment))
    }
}

#[derive(Clone, Default)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

fn field_validation_error(errors: Vec<&'static str>) -> ApiError {
    ApiError {
        error: "Please correct the highlighted fields.".to_string(),
        code: "VALIDATION_ERROR".to_string(),
        details: Some(json!({ "errors": errors })),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn application_form_requires_every_field() {
        with_runtime(|| {
            let state = ApplicationFormState::default();
            let err = state.to_payload("Alice Example").unwrap_err();
            assert_eq!(err.code, "VALIDATION_ERROR");
            let errors = err.details.unwrap();
            let errors = errors["errors"].as_array().unwrap();
            assert!(errors.iter().any(|e| e.as_str().unwrap().contains("start date")));
            assert!(errors.iter().any(|e| e.as_str().unwrap().contains("end date")));
            assert!(errors.iter().any(|e| e.as_str().unwrap().contains("reason")));
        });
    }

    #[test]
    fn application_form_rejects_inverted_date_range() {
        with_runtime(|| {
            let state = ApplicationFormState::default();
            state.start_signal().set("2024-02-10".into());
            state.end_signal().set("2024-02-05".into());
            state.reason_signal().set("family trip".into());
            let err = state.to_payload("Alice Example").unwrap_err();
            let details = err.details.unwrap();
            assert!(details["errors"]
                .as_array()
                .unwrap()
                .iter()
                .any(|e| e.as_str().unwrap().contains("end date must not be before")));
        });
    }

    #[test]
    fn application_form_builds_payload_with_session_identity() {
        with_runtime(|| {
            let state = ApplicationFormState::default();
            state.start_signal().set("2024-02-01".into());
            state.end_signal().set("2024-02-05".into());
            state.reason_signal().set("  family trip  ".into());
            let payload = state.to_payload("Alice Example").unwrap();
            assert_eq!(payload.employee_name, "Alice Example");
            assert_eq!(payload.leave_type, LeaveType::Annual);
            assert_eq!(payload.reason, "family trip");
            assert!(payload.attachments.is_empty());
        });
    }

    #[test]
    fn application_form_reset_clears_entries() {
        with_runtime(|| {
            let state = ApplicationFormState::default();
            state.leave_type_signal().set("sick".into());
            state.start_signal().set("2024-02-01".into());
            state.attachments_signal().set(vec![AttachmentMeta {
                name: "note.pdf".into(),
                media_type: "application/pdf".into(),
                size: 100,
            }]);
            state.reset();
            assert_eq!(state.leave_type_signal().get(), "annual");
            assert_eq!(state.start_signal().get(), "");
            assert!(state.attachments_signal().get().is_empty());
        });
    }

    #[test]
    fn decision_form_blocks_until_status_and_comment_present() {
        with_runtime(|| {
            let state = DecisionFormState::default();
            assert!(!state.is_complete());
            assert!(state.to_decision().is_err());

            state.status_signal().set("approved".into());
            assert!(!state.is_complete());
            assert!(state.to_decision().is_err());

            state.comment_signal().set("   ".into());
            assert!(!state.is_complete());

            state.comment_signal().set("looks fine".into());
            assert!(state.is_complete());
            let (status, comment) = state.to_decision().unwrap();
            assert_eq!(status, LeaveStatus::Approved);
            assert_eq!(comment, "looks fine");
        });
    }

    #[test]
    fn decision_form_never_yields_pending() {
        with_runtime(|| {
            let state = DecisionFormState::default();
            state.status_signal().set("pending".into());
            state.comment_signal().set("why not".into());
            assert!(state.to_decision().is_err());
        });
    }

    #[test]
    fn message_state_tracks_latest_outcome() {
        let mut message = MessageState::default();
        message.set_success("sent");
        assert_eq!(message.success.as_deref(), Some("sent"));
        message.set_error(ApiError::unknown("boom"));
        assert!(message.success.is_none());
        assert_eq!(message.error.as_ref().map(|e| e.error.clone()), Some("boom".into()));
        message.clear();
        assert!(message.success.is_none() && message.error.is_none());
    }
}
