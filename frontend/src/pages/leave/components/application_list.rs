use crate::api::{ApiError, LeaveRequestResponse, LeaveStatus};
use crate::components::{
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::LoadingSpinner,
};
use crate::pages::leave::components::status_label::{leave_type_label, StatusBadge};
use crate::pages::leave::utils::MessageState;
use crate::utils::time::{format_date_range, format_timestamp};
use leptos::*;

#[component]
pub fn ApplicationList(
    records: Signal<Vec<LeaveRequestResponse>>,
    loading: Signal<bool>,
    /// Whether this view offers approve/reject row actions (pending view only).
    can_decide: Signal<bool>,
    message: RwSignal<MessageState>,
    on_view: Callback<LeaveRequestResponse>,
    on_approve: Callback<String>,
    on_reject: Callback<String>,
) -> impl IntoView {
    let error_signal: Signal<Option<ApiError>> = Signal::derive(move || message.get().error);
    view! {
        <div class="bg-surface-elevated shadow rounded-lg">
            <div class="px-6 py-4 border-b border-border">
                <h3 class="text-lg font-medium text-fg">"Leave applications"</h3>
                <Show when=move || message.get().success.is_some()>
                    <div class="mt-2 text-sm text-status-success-text bg-status-success-bg border border-status-success-border rounded px-3 py-2">
                        {message.get().success.clone().unwrap_or_default()}
                    </div>
                </Show>
                <InlineErrorMessage error=error_signal />
            </div>
            <Show when=move || loading.get()>
                <div class="px-6 py-4 flex items-center gap-2 text-sm text-fg-muted">
                    <LoadingSpinner />
                    <span>"Loading applications..."</span>
                </div>
            </Show>
            <Show when=move || !loading.get() && records.get().is_empty()>
                <div class="p-6">
                    <EmptyState
                        title="No applications to show"
                        description={"Applications matching this view will appear here.".to_string()}
                    />
                </div>
            </Show>
            <Show when=move || !records.get().is_empty()>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Employee"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Type"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Period"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Status"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Submitted"</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="bg-surface-elevated divide-y divide-border">
                            <For
                                each=move || records.get()
                                key=|record| (record.id.clone(), record.updated_at)
                                children=move |record: LeaveRequestResponse| {
                                    let record = store_value(record);
                                    let snapshot = record.get_value();
                                    let period = format_date_range(&snapshot.start_date, &snapshot.end_date);
                                    let submitted = format_timestamp(&snapshot.created_at);
                                    let is_pending = snapshot.status == LeaveStatus::Pending;
                                    let status = snapshot.status;
                                    view! {
                                        <tr class="hover:bg-surface-muted">
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                {snapshot.employee_name.clone()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                {leave_type_label(snapshot.leave_type)}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                {period}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                <StatusBadge status=status />
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                {submitted}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm">
                                                <div class="flex gap-2">
                                                    <button
                                                        class="text-action-primary-bg hover:underline"
                                                        on:click=move |_| on_view.call(record.get_value())
                                                    >
                                                        "Details"
                                                    </button>
                                                    <Show when=move || can_decide.get() && is_pending>
                                                        <button
                                                            class="text-status-success-text hover:underline"
                                                            on:click=move |_| on_approve.call(record.get_value().id)
                                                        >
                                                            "Approve"
                                                        </button>
                                                        <button
                                                            class="text-status-error-text hover:underline"
                                                            on:click=move |_| on_reject.call(record.get_value().id)
                                                        >
                                                            "Reject"
                                                        </button>
                                                    </Show>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
