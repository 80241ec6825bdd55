use crate::api::{LeaveRequestResponse, LeaveStatus, LeaveType, SessionResponse};
use crate::state::session::SessionState;
use chrono::{NaiveDate, TimeZone, Utc};
use leptos::*;

pub fn session_user() -> SessionResponse {
    SessionResponse {
        id: "emp-1".into(),
        display_name: "Alice Example".into(),
    }
}

/// Provide a resolved session context without mounting `SessionProvider`,
/// which would spawn a fetch.
pub fn provide_session(user: Option<SessionResponse>) {
    let (state, set_state) = create_signal(SessionState {
        user,
        loading: false,
    });
    provide_context((state, set_state));
}

pub fn leave_request(id: &str, status: LeaveStatus) -> LeaveRequestResponse {
    LeaveRequestResponse {
        id: id.to_string(),
        employee_name: "Alice Example".into(),
        leave_type: LeaveType::Annual,
        start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
        reason: "family trip".into(),
        status,
        comment: match status {
            LeaveStatus::Pending => None,
            _ => Some("noted".into()),
        },
        attachments: vec![],
        created_at: Utc.with_ymd_and_hms(2024, 1, 20, 9, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 20, 9, 0, 0).unwrap(),
    }
}
