use crate::pages::leave::{
    components::{
        application_form::ApplicationForm, application_list::ApplicationList,
        approval_modal::ApprovalModal, detail_modal::DetailModal, sidebar::Sidebar,
    },
    layout::LeaveLayout,
    types::ActiveView,
    view_model::use_leave_view_model,
};
use leptos::*;

#[component]
pub fn LeavePage() -> impl IntoView {
    let vm = use_leave_view_model();
    let active_view = vm.active_view;
    let records = Signal::derive(move || vm.records.get());
    let loading = vm.list_loading();
    let can_decide = Signal::derive(move || active_view.get().can_decide());
    let on_request_decision = vm.on_request_decision();

    view! {
        <>
            <LeaveLayout>
                <Sidebar active=active_view on_select=vm.on_select_view() />
                <section class="flex-1 space-y-6">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">{move || active_view.get().title()}</h1>
                        <p class="mt-1 text-sm text-fg-muted">{move || active_view.get().description()}</p>
                    </div>
                    <Show when=move || active_view.get() == ActiveView::Submit>
                        <ApplicationForm
                            state=vm.form_state
                            message=vm.form_message
                            pending=vm.submit_action.pending().into()
                            on_submit=vm.on_submit_application()
                        />
                    </Show>
                    <Show when=move || active_view.get() != ActiveView::Submit>
                        <ApplicationList
                            records=records
                            loading=loading
                            can_decide=can_decide
                            message=vm.list_message
                            on_view=vm.on_view_details()
                            on_approve=on_request_decision
                            on_reject=on_request_decision
                        />
                    </Show>
                </section>
            </LeaveLayout>
            <DetailModal selected=vm.detail />
            <ApprovalModal
                selected=vm.selected_for_decision
                state=vm.decision_state
                message=vm.decision_message
                pending=vm.decide_action.pending().into()
                on_submit=vm.on_submit_decision()
                on_close=vm.on_close_decision()
            />
        </>
    }
}
