use crate::api::LeaveRequestResponse;
use crate::components::error::InlineErrorMessage;
use crate::pages::leave::components::status_label::leave_type_label;
use crate::pages::leave::utils::{DecisionFormState, MessageState};
use crate::utils::time::format_date_range;
use leptos::ev::KeyboardEvent;
use leptos::*;

/// Decision form over a snapshot of one pending request. Pure input
/// collection: the enclosing view performs the write and closes the modal
/// only after it succeeded.
#[component]
pub fn ApprovalModal(
    selected: RwSignal<Option<LeaveRequestResponse>>,
    state: DecisionFormState,
    message: RwSignal<MessageState>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let status_signal = state.status_signal();
    let comment_signal = state.comment_signal();
    let error_signal = Signal::derive(move || message.get().error);
    let submit_blocked = move || !state.is_complete() || pending.get();

    let on_dialog_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.call(());
        }
    };

    view! {
        <Show when=move || selected.get().is_some()>
            {move || {
                selected
                    .get()
                    .map(|record| {
                        let period = format_date_range(&record.start_date, &record.end_date);
                        view! {
                            <div class="fixed inset-0 z-50 flex items-end sm:items-center justify-center">
                                <div
                                    class="fixed inset-0 bg-overlay-backdrop"
                                    on:click=move |_| on_close.call(())
                                ></div>
                                <div
                                    class="relative bg-surface-elevated rounded-lg shadow-xl w-full max-w-lg mx-4 p-6 space-y-4"
                                    role="dialog"
                                    aria-modal="true"
                                    tabindex="-1"
                                    on:keydown=on_dialog_keydown
                                >
                                    <div class="flex items-center justify-between">
                                        <p class="text-lg font-semibold text-fg">"Review leave request"</p>
                                        <button
                                            aria-label="Close"
                                            class="text-fg-muted hover:text-fg"
                                            on:click=move |_| on_close.call(())
                                        >
                                            {"✕"}
                                        </button>
                                    </div>
                                    <div class="grid grid-cols-1 gap-3 text-sm text-fg">
                                        <div class="bg-surface-muted rounded px-3 py-2">
                                            <div class="text-fg-muted">"Employee"</div>
                                            <div class="font-medium">{record.employee_name.clone()}</div>
                                        </div>
                                        <div class="bg-surface-muted rounded px-3 py-2">
                                            <div class="text-fg-muted">"Leave type"</div>
                                            <div class="font-medium">{leave_type_label(record.leave_type)}</div>
                                        </div>
                                        <div class="bg-surface-muted rounded px-3 py-2">
                                            <div class="text-fg-muted">"Period"</div>
                                            <div class="font-medium">{period}</div>
                                        </div>
                                        <div class="bg-surface-muted rounded px-3 py-2">
                                            <div class="text-fg-muted">"Reason"</div>
                                            <div class="font-medium">{record.reason.clone()}</div>
                                        </div>
                                    </div>
                                    <InlineErrorMessage error=error_signal />
                                    <div>
                                        <span class="block text-sm font-medium text-fg-muted mb-2">"Decision"</span>
                                        <div class="flex gap-4">
                                            <label class="flex-1 flex items-center justify-center gap-2 border rounded px-3 py-2 cursor-pointer">
                                                <input
                                                    type="radio"
                                                    name="decision"
                                                    value="approved"
                                                    prop:checked=move || status_signal.get() == "approved"
                                                    on:change=move |_| status_signal.set("approved".into())
                                                />
                                                "Approve"
                                            </label>
                                            <label class="flex-1 flex items-center justify-center gap-2 border rounded px-3 py-2 cursor-pointer">
                                                <input
                                                    type="radio"
                                                    name="decision"
                                                    value="rejected"
                                                    prop:checked=move || status_signal.get() == "rejected"
                                                    on:change=move |_| status_signal.set("rejected".into())
                                                />
                                                "Reject"
                                            </label>
                                        </div>
                                    </div>
                                    <div>
                                        <label class="block text-sm font-medium text-fg-muted">"Decision comment"</label>
                                        <textarea
                                            rows=4
                                            class="mt-1 block w-full border rounded px-2 py-1"
                                            placeholder="Enter a decision comment"
                                            prop:value=move || comment_signal.get()
                                            on:input=move |ev| comment_signal.set(event_target_value(&ev))
                                        ></textarea>
                                    </div>
                                    <div class="flex justify-end gap-4">
                                        <button
                                            class="px-4 py-2 rounded bg-surface-muted text-fg hover:bg-surface-elevated"
                                            on:click=move |_| on_close.call(())
                                        >
                                            "Cancel"
                                        </button>
                                        <button
                                            class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                            disabled=submit_blocked
                                            on:click=move |_| on_submit.call(())
                                        >
                                            {move || if pending.get() { "Saving..." } else { "Submit decision" }}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
