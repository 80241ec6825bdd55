use crate::api::{LeaveStatus, LeaveType};
use leptos::*;

pub fn leave_status_label(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "Pending",
        LeaveStatus::Approved => "Approved",
        LeaveStatus::Rejected => "Rejected",
    }
}

pub fn leave_type_label(leave_type: LeaveType) -> &'static str {
    match leave_type {
        LeaveType::Annual => "Annual leave",
        LeaveType::Sick => "Sick leave",
        LeaveType::Personal => "Personal leave",
        LeaveType::Other => "Other",
    }
}

#[component]
pub fn StatusBadge(status: LeaveStatus) -> impl IntoView {
    let class = match status {
        LeaveStatus::Pending => {
            "bg-status-warning-bg text-status-warning-text border-status-warning-border"
        }
        LeaveStatus::Approved => {
            "bg-status-success-bg text-status-success-text border-status-success-border"
        }
        LeaveStatus::Rejected => {
            "bg-status-error-bg text-status-error-text border-status-error-border"
        }
    };
    view! {
        <span class=format!(
            "inline-flex items-center px-2 py-0.5 rounded border text-xs font-medium {}",
            class,
        )>{leave_status_label(status)}</span>
    }
}
