use crate::pages::leave::types::ActiveView;
use leptos::*;

#[component]
pub fn Sidebar(active: ReadSignal<ActiveView>, on_select: Callback<ActiveView>) -> impl IntoView {
    view! {
        <aside class="w-64 shrink-0 bg-surface-elevated border-r border-border rounded-lg">
            <div class="p-6">
                <h2 class="text-lg font-bold text-fg">"Leave management"</h2>
                <p class="text-sm text-fg-muted mt-1">"Submit and review leave requests"</p>
            </div>
            <nav class="px-3 pb-6 space-y-1">
                <For
                    each=move || ActiveView::ALL
                    key=|view| view.sidebar_label()
                    children=move |view: ActiveView| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == view {
                                        "w-full text-left px-3 py-2 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
                                    } else {
                                        "w-full text-left px-3 py-2 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                                    }
                                }
                                on:click=move |_| on_select.call(view)
                            >
                                {view.sidebar_label()}
                            </button>
                        }
                    }
                />
            </nav>
        </aside>
    }
}
