use crate::components::{error::InlineErrorMessage, layout::SuccessMessage};
use crate::pages::leave::utils::{ApplicationFormState, MessageState};
use crate::utils::format::format_size;
use leptos::*;

#[component]
pub fn ApplicationForm(
    state: ApplicationFormState,
    message: RwSignal<MessageState>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let leave_type = state.leave_type_signal();
    let start_signal = state.start_signal();
    let end_signal = state.end_signal();
    let reason_signal = state.reason_signal();
    let attachments = state.attachments_signal();
    let error_signal = Signal::derive(move || message.get().error);

    let on_submit_form = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    let on_files_change = move |ev: ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            state.set_attachments_from_files(&files);
        }
    };
    let on_reset = move |_| {
        state.reset();
        message.update(|msg| msg.clear());
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-lg font-medium text-fg">"Leave request"</h3>
                <p class="text-sm text-fg-muted">"Pick the leave type and period, then submit the request."</p>
            </div>
            <InlineErrorMessage error=error_signal />
            <Show when=move || message.get().success.is_some()>
                <SuccessMessage message={message.get().success.clone().unwrap_or_default()} />
            </Show>
            <form class="space-y-4" on:submit=on_submit_form>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"Leave type"</label>
                    <select
                        class="mt-1 block w-full border rounded px-2 py-1"
                        prop:value=move || leave_type.get()
                        on:change=move |ev| leave_type.set(event_target_value(&ev))
                    >
                        <option value="annual">"Annual leave"</option>
                        <option value="sick">"Sick leave"</option>
                        <option value="personal">"Personal leave"</option>
                        <option value="other">"Other"</option>
                    </select>
                </div>
                <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">"Start date"</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || start_signal.get()
                            on:input=move |ev| start_signal.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted">"End date"</label>
                        <input
                            type="date"
                            class="mt-1 block w-full border rounded px-2 py-1"
                            prop:value=move || end_signal.get()
                            on:input=move |ev| end_signal.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"Reason"</label>
                    <textarea
                        rows=4
                        class="mt-1 block w-full border rounded px-2 py-1"
                        placeholder="Explain the reason for the request"
                        prop:value=move || reason_signal.get()
                        on:input=move |ev| reason_signal.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted">"Attachments (optional)"</label>
                    <input
                        type="file"
                        multiple=true
                        accept=".pdf,.doc,.docx,.jpg,.jpeg,.png"
                        class="mt-1 block w-full text-sm"
                        on:change=on_files_change
                    />
                    <p class="mt-1 text-xs text-fg-muted">
                        "Supported formats: PDF, DOC, DOCX, JPG, JPEG, PNG. Only file details are stored."
                    </p>
                    <Show when=move || !attachments.get().is_empty()>
                        <ul class="mt-2 space-y-1 text-sm text-fg">
                            <For
                                each=move || attachments.get()
                                key=|meta| meta.name.clone()
                                children=move |meta| {
                                    let size = format_size(meta.size);
                                    view! {
                                        <li class="flex justify-between border rounded px-2 py-1">
                                            <span>{meta.name.clone()}</span>
                                            <span class="text-fg-muted">{size}</span>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </div>
                <div class="flex justify-end gap-4">
                    <button
                        type="button"
                        class="px-4 py-2 rounded bg-surface-muted text-fg hover:bg-surface-elevated"
                        on:click=on_reset
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Submitting..." } else { "Submit request" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
