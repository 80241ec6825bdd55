#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn leave_request_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_name": "Alice Example",
        "leave_type": "annual",
        "start_date": "2024-02-01",
        "end_date": "2024-02-05",
        "reason": "family trip",
        "status": status,
        "comment": null,
        "attachments": [],
        "created_at": "2024-01-20T09:00:00Z",
        "updated_at": "2024-01-20T09:00:00Z"
    })
}

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn list_pending_issues_exact_predicate() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/leave-requests")
            .query_param("order", "created_at.desc")
            .query_param("status", "pending");
        then.status(200)
            .json_body(json!([leave_request_json("req-1", "pending")]));
    });

    let records = client(&server)
        .list_leave_requests(ListFilter::Pending, None)
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, LeaveStatus::Pending);
    mock.assert();
}

#[tokio::test]
async fn list_approved_requests_both_terminal_statuses() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/leave-requests")
            .query_param("order", "created_at.desc")
            .query_param("status", "approved")
            .query_param("status", "rejected");
        then.status(200).json_body(json!([
            leave_request_json("req-1", "approved"),
            leave_request_json("req-2", "rejected")
        ]));
    });

    let records = client(&server)
        .list_leave_requests(ListFilter::Approved, None)
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
    mock.assert();
}

#[tokio::test]
async fn list_mine_filters_by_employee_name() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/leave-requests")
            .query_param("order", "created_at.desc")
            .query_param("employee_name", "Alice Example");
        then.status(200)
            .json_body(json!([leave_request_json("req-1", "pending")]));
    });

    let records = client(&server)
        .list_leave_requests(ListFilter::Mine, Some("Alice Example"))
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    mock.assert();
}

#[tokio::test]
async fn create_leave_request_posts_insert_payload() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/leave-requests")
            .json_body_partial(
                r#"{
                    "employee_name": "Alice Example",
                    "leave_type": "annual",
                    "start_date": "2024-02-01",
                    "end_date": "2024-02-05",
                    "reason": "family trip"
                }"#,
            );
        then.status(201)
            .json_body(leave_request_json("req-9", "pending"));
    });

    let record = client(&server)
        .create_leave_request(CreateLeaveRequest {
            employee_name: "Alice Example".into(),
            leave_type: LeaveType::Annual,
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            reason: "family trip".into(),
            attachments: vec![],
        })
        .await
        .unwrap();
    assert_eq!(record.id, "req-9");
    assert_eq!(record.status, LeaveStatus::Pending);
    assert!(record.comment.is_none());
    assert!(record.attachments.is_empty());
    mock.assert();
}

#[tokio::test]
async fn reject_puts_comment_to_reject_endpoint() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/leave-requests/req-1/reject")
            .json_body(json!({ "comment": "insufficient notice" }));
        then.status(200).json_body(json!({
            "id": "req-1",
            "employee_name": "Alice Example",
            "leave_type": "annual",
            "start_date": "2024-02-01",
            "end_date": "2024-02-05",
            "reason": "family trip",
            "status": "rejected",
            "comment": "insufficient notice",
            "attachments": [],
            "created_at": "2024-01-20T09:00:00Z",
            "updated_at": "2024-01-21T10:00:00Z"
        }));
    });

    let record = client(&server)
        .reject_leave_request("req-1", "insufficient notice")
        .await
        .unwrap();
    assert_eq!(record.status, LeaveStatus::Rejected);
    assert_eq!(record.comment.as_deref(), Some("insufficient notice"));
    assert!(record.updated_at > record.created_at);
    mock.assert();
}

#[tokio::test]
async fn approve_puts_comment_to_approve_endpoint() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/leave-requests/req-1/approve")
            .json_body(json!({ "comment": "enjoy" }));
        then.status(200).json_body(json!({
            "id": "req-1",
            "employee_name": "Alice Example",
            "leave_type": "annual",
            "start_date": "2024-02-01",
            "end_date": "2024-02-05",
            "reason": "family trip",
            "status": "approved",
            "comment": "enjoy",
            "attachments": [],
            "created_at": "2024-01-20T09:00:00Z",
            "updated_at": "2024-01-21T10:00:00Z"
        }));
    });

    let record = client(&server)
        .approve_leave_request("req-1", "enjoy")
        .await
        .unwrap();
    assert_eq!(record.status, LeaveStatus::Approved);
    mock.assert();
}

#[tokio::test]
async fn get_leave_request_surfaces_store_not_found() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/leave-requests/missing");
        then.status(404)
            .json_body(json!({ "error": "Leave request not found", "code": "NOT_FOUND" }));
    });

    let err = client(&server)
        .get_leave_request("missing")
        .await
        .unwrap_err();
    assert_eq!(err.code, "NOT_FOUND");
    assert_eq!(err.error, "Leave request not found");
}

#[tokio::test]
async fn non_json_error_body_maps_to_request_failed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/leave-requests");
        then.status(500).body("upstream exploded");
    });

    let err = client(&server)
        .list_leave_requests(ListFilter::All, None)
        .await
        .unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
    assert!(err.error.contains("500"));
}

#[tokio::test]
async fn get_session_returns_current_identity() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/session/me");
        then.status(200)
            .json_body(json!({ "id": "emp-1", "display_name": "Alice Example" }));
    });

    let session = client(&server).get_session().await.unwrap();
    assert_eq!(session.display_name, "Alice Example");
}
