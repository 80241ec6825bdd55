use crate::api::LeaveRequestResponse;
use crate::pages::leave::components::status_label::{leave_type_label, StatusBadge};
use crate::utils::{
    format::format_size,
    time::{format_date_range, format_timestamp},
};
use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Read-only detail panel for one record; purely local, no network access.
#[component]
pub fn DetailModal(selected: RwSignal<Option<LeaveRequestResponse>>) -> impl IntoView {
    let header_close_ref = create_node_ref::<html::Button>();
    let footer_close_ref = create_node_ref::<html::Button>();
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (&header_close_ref, &footer_close_ref);
    #[cfg(target_arch = "wasm32")]
    let previously_focused = create_rw_signal(None::<web_sys::HtmlElement>);

    let close = move || {
        selected.set(None);
        #[cfg(target_arch = "wasm32")]
        if let Some(element) = previously_focused.get_untracked() {
            let _ = element.focus();
            previously_focused.set(None);
        }
    };

    let on_dialog_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            close();
        }
        "Tab" => {
            #[cfg(target_arch = "wasm32")]
            {
                let active_id = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.active_element())
                    .and_then(|element| element.get_attribute("id"))
                    .unwrap_or_default();
                if ev.shift_key() && active_id == "detail-modal-header-close" {
                    ev.prevent_default();
                    if let Some(button) = footer_close_ref.get() {
                        let _ = button.focus();
                    }
                } else if !ev.shift_key() && active_id == "detail-modal-footer-close" {
                    ev.prevent_default();
                    if let Some(button) = header_close_ref.get() {
                        let _ = button.focus();
                    }
                }
            }
        }
        _ => {}
    };

    create_effect(move |_| {
        if selected.get().is_some() {
            #[cfg(target_arch = "wasm32")]
            {
                let active = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.active_element())
                    .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
                previously_focused.set(active);
                if let Some(button) = header_close_ref.get() {
                    let _ = button.focus();
                }
            }
        }
    });

    view! {
        <Show when=move || selected.get().is_some()>
            {move || {
                selected
                    .get()
                    .map(|record| {
                        let employee = record.employee_name.clone();
                        let type_label = leave_type_label(record.leave_type);
                        let status = record.status;
                        let reason = record.reason.clone();
                        let period = format_date_range(&record.start_date, &record.end_date);
                        let submitted = format_timestamp(&record.created_at);
                        let updated = format_timestamp(&record.updated_at);
                        let comment_row = record.comment.clone().map(|comment| {
                            view! {
                                <div>
                                    <span class="font-medium text-fg-muted">"Decision comment: "</span>
                                    <span>{comment}</span>
                                </div>
                            }
                        });
                        let attachment_rows = if record.attachments.is_empty() {
                            None
                        } else {
                            let rows = record
                                .attachments
                                .iter()
                                .map(|meta| {
                                    view! {
                                        <li class="flex justify-between border rounded px-2 py-1">
                                            <span>{meta.name.clone()}</span>
                                            <span class="text-fg-muted">
                                                {format!("{} · {}", meta.media_type, format_size(meta.size))}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view();
                            Some(view! {
                                <div>
                                    <span class="font-medium text-fg-muted">"Attachments:"</span>
                                    <ul class="mt-1 space-y-1">{rows}</ul>
                                </div>
                            })
                        };
                        view! {
                            <div class="fixed inset-0 z-50 flex items-end sm:items-center justify-center">
                                <div
                                    class="fixed inset-0 bg-overlay-backdrop"
                                    on:click=move |_| close()
                                ></div>
                                <div
                                    class="relative bg-surface-elevated rounded-lg shadow-xl w-full max-w-md mx-4 p-6 space-y-4 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-action-primary-focus"
                                    role="dialog"
                                    aria-modal="true"
                                    tabindex="-1"
                                    on:keydown=on_dialog_keydown
                                >
                                    <div class="flex items-center justify-between">
                                        <div>
                                            <p class="text-sm text-fg-muted">"Application details"</p>
                                            <p class="text-lg font-semibold text-fg">{employee}</p>
                                        </div>
                                        <button
                                            id="detail-modal-header-close"
                                            node_ref=header_close_ref
                                            aria-label="Close"
                                            class="text-fg-muted hover:text-fg"
                                            on:click=move |_| close()
                                        >
                                            {"✕"}
                                        </button>
                                    </div>
                                    <div class="space-y-2 text-sm text-fg">
                                        <div>
                                            <span class="font-medium text-fg-muted">"Type: "</span>
                                            <span>{type_label}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Period: "</span>
                                            <span>{period}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Status: "</span>
                                            <StatusBadge status=status />
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Reason: "</span>
                                            <span>{reason}</span>
                                        </div>
                                        {comment_row}
                                        {attachment_rows}
                                        <div>
                                            <span class="font-medium text-fg-muted">"Submitted: "</span>
                                            <span>{submitted}</span>
                                        </div>
                                        <div>
                                            <span class="font-medium text-fg-muted">"Updated: "</span>
                                            <span>{updated}</span>
                                        </div>
                                    </div>
                                    <div class="flex justify-end">
                                        <button
                                            id="detail-modal-footer-close"
                                            node_ref=footer_close_ref
                                            class="px-4 py-2 rounded bg-surface-muted text-fg hover:bg-surface-elevated"
                                            on:click=move |_| close()
                                        >
                                            "Close"
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
