use crate::api::{
    realtime, ApiClient, ApiError, CreateLeaveRequest, LeaveRequestResponse, LeaveStatus,
    ListFilter,
};
use crate::pages::leave::{
    repository::LeaveRepository,
    types::ActiveView,
    utils::{ApplicationFormState, DecisionFormState, MessageState},
};
use crate::state::session::session_display_name;
use leptos::*;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// One list fetch together with the generation counter value it was issued
/// under. An outcome whose generation no longer matches the live counter
/// belongs to a superseded filter or notification and is discarded on
/// arrival instead of overwriting the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchOutcome {
    pub generation: u32,
    pub result: Result<Vec<LeaveRequestResponse>, ApiError>,
}

#[derive(Clone)]
pub struct DecidePayload {
    pub id: String,
    pub status: LeaveStatus,
    pub comment: String,
}

impl From<(String, LeaveStatus, String)> for DecidePayload {
    fn from(value: (String, LeaveStatus, String)) -> Self {
        Self {
            id: value.0,
            status: value.1,
            comment: value.2,
        }
    }
}

type ListKey = (Option<ListFilter>, Option<String>, u32);

#[derive(Clone, Copy)]
pub struct LeaveViewModel {
    pub form_state: ApplicationFormState,
    pub decision_state: DecisionFormState,
    pub form_message: RwSignal<MessageState>,
    pub list_message: RwSignal<MessageState>,
    pub decision_message: RwSignal<MessageState>,
    pub active_view: ReadSignal<ActiveView>,
    set_active_view: WriteSignal<ActiveView>,
    /// Last successfully loaded rows. Kept across failed refetches so the
    /// list never clears itself until a reload succeeds.
    pub records: RwSignal<Vec<LeaveRequestResponse>>,
    pub detail: RwSignal<Option<LeaveRequestResponse>>,
    pub selected_for_decision: RwSignal<Option<LeaveRequestResponse>>,
    pub generation: RwSignal<u32>,
    pub list_resource: Resource<ListKey, Option<FetchOutcome>>,
    pub submit_action: Action<CreateLeaveRequest, Result<LeaveRequestResponse, ApiError>>,
    pub decide_action: Action<DecidePayload, Result<LeaveRequestResponse, ApiError>>,
    pub fetch_selected_action: Action<String, Result<LeaveRequestResponse, ApiError>>,
    subscription: StoredValue<Option<realtime::Subscription>>,
    session_employee: Signal<Option<String>>,
}

fn bump(counter: RwSignal<u32>) {
    counter.update(|value| *value = value.wrapping_add(1));
}

fn apply_fetch_outcome(
    outcome: FetchOutcome,
    generation: RwSignal<u32>,
    records: RwSignal<Vec<LeaveRequestResponse>>,
    list_message: RwSignal<MessageState>,
) {
    if outcome.generation != generation.get_untracked() {
        log::debug!(
            "discarding list response from superseded generation {}",
            outcome.generation
        );
        return;
    }
    match outcome.result {
        Ok(rows) => {
            records.set(rows);
            list_message.update(|msg| msg.error = None);
        }
        Err(err) => {
            log::warn!("failed to load leave requests: {}", err);
            list_message.update(|msg| msg.set_error(err));
        }
    }
}

fn apply_submit_result(
    result: Result<LeaveRequestResponse, ApiError>,
    form_state: ApplicationFormState,
    form_message: RwSignal<MessageState>,
    generation: RwSignal<u32>,
) {
    match result {
        Ok(_) => {
            form_message.update(|msg| msg.set_success("Leave request submitted."));
            form_state.reset();
            bump(generation);
        }
        Err(err) => {
            log::warn!("failed to submit leave request: {}", err);
            form_message.update(|msg| msg.set_error(err));
        }
    }
}

fn apply_decide_result(
    result: Result<LeaveRequestResponse, ApiError>,
    decision_state: DecisionFormState,
    decision_message: RwSignal<MessageState>,
    list_message: RwSignal<MessageState>,
    selected_for_decision: RwSignal<Option<LeaveRequestResponse>>,
    generation: RwSignal<u32>,
) {
    match result {
        Ok(record) => {
            let note = match record.status {
                LeaveStatus::Approved => "Request approved.",
                LeaveStatus::Rejected => "Request rejected.",
                LeaveStatus::Pending => "Decision recorded.",
            };
            list_message.update(|msg| msg.set_success(note));
            // The modal closes only now, after the write was confirmed.
            selected_for_decision.set(None);
            decision_state.reset();
            decision_message.update(|msg| msg.clear());
            bump(generation);
        }
        Err(err) => {
            log::warn!("failed to record decision: {}", err);
            decision_message.update(|msg| msg.set_error(err));
        }
    }
}

fn apply_fetch_selected_result(
    result: Result<LeaveRequestResponse, ApiError>,
    decision_state: DecisionFormState,
    decision_message: RwSignal<MessageState>,
    list_message: RwSignal<MessageState>,
    selected_for_decision: RwSignal<Option<LeaveRequestResponse>>,
) {
    match result {
        Ok(record) if record.status == LeaveStatus::Pending => {
            decision_state.reset();
            decision_message.update(|msg| msg.clear());
            selected_for_decision.set(Some(record));
        }
        Ok(_) => {
            list_message.update(|msg| {
                msg.set_error(ApiError::validation(
                    "This request has already been decided.",
                ))
            });
        }
        Err(err) => {
            log::warn!("failed to load leave request for decision: {}", err);
            list_message.update(|msg| msg.set_error(err));
        }
    }
}

impl LeaveViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(LeaveRepository::new(api));

        let form_state = ApplicationFormState::default();
        let decision_state = DecisionFormState::default();
        let form_message = create_rw_signal(MessageState::default());
        let list_message = create_rw_signal(MessageState::default());
        let decision_message = create_rw_signal(MessageState::default());
        let (active_view, set_active_view) = create_signal(ActiveView::Submit);
        let records = create_rw_signal(Vec::new());
        let detail = create_rw_signal(None::<LeaveRequestResponse>);
        let selected_for_decision = create_rw_signal(None::<LeaveRequestResponse>);
        let generation = create_rw_signal(0u32);
        let session_employee = session_display_name();

        let list_resource = create_resource(
            move || {
                (
                    active_view.get().filter(),
                    session_employee.get(),
                    generation.get(),
                )
            },
            move |(filter, employee, issued_generation): ListKey| {
                let repo = repository.get_value();
                async move {
                    match filter {
                        Some(filter) => {
                            let result = repo.list(filter, employee.as_deref()).await;
                            Some(FetchOutcome {
                                generation: issued_generation,
                                result,
                            })
                        }
                        None => None,
                    }
                }
            },
        );

        let submit_action = create_action(move |payload: &CreateLeaveRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.submit(payload).await }
        });

        let decide_action = create_action(move |payload: &DecidePayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.decide(&payload.id, payload.status, &payload.comment).await }
        });

        let fetch_selected_action = create_action(move |id: &String| {
            let repo = repository.get_value();
            let id = id.clone();
            async move { repo.fetch(&id).await }
        });

        let subscription = store_value(None::<realtime::Subscription>);

        // Setup effects for the resource and actions. Effects run only on
        // the client.
        {
            create_effect(move |_| {
                if let Some(Some(outcome)) = list_resource.get() {
                    apply_fetch_outcome(outcome, generation, records, list_message);
                }
            });
        }
        {
            create_effect(move |_| {
                if let Some(result) = submit_action.value().get() {
                    apply_submit_result(result, form_state, form_message, generation);
                }
            });
        }
        {
            create_effect(move |_| {
                if let Some(result) = decide_action.value().get() {
                    apply_decide_result(
                        result,
                        decision_state,
                        decision_message,
                        list_message,
                        selected_for_decision,
                        generation,
                    );
                }
            });
        }
        {
            create_effect(move |_| {
                if let Some(result) = fetch_selected_action.value().get() {
                    apply_fetch_selected_result(
                        result,
                        decision_state,
                        decision_message,
                        list_message,
                        selected_for_decision,
                    );
                }
            });
        }

        on_cleanup(move || {
            let _ = subscription.try_update_value(|handle| *handle = None);
        });

        Self {
            form_state,
            decision_state,
            form_message,
            list_message,
            decision_message,
            active_view,
            set_active_view,
            records,
            detail,
            selected_for_decision,
            generation,
            list_resource,
            submit_action,
            decide_action,
            fetch_selected_action,
            subscription,
            session_employee,
        }
    }

    /// Sidebar selection is the only view transition; it also starts a fresh
    /// fetch generation and re-establishes the change-feed subscription so no
    /// stale closure can refetch a superseded filter.
    pub fn set_view(&self, view: ActiveView) {
        if self.active_view.get_untracked() == view {
            return;
        }
        self.set_active_view.set(view);
        self.detail.set(None);
        self.list_message.update(|msg| msg.clear());
        bump(self.generation);
        self.resubscribe();
    }

    fn resubscribe(&self) {
        self.subscription.set_value(None);
        if self.active_view.get_untracked().filter().is_none() {
            return;
        }
        let generation = self.generation;
        let handle = realtime::subscribe_changes(Rc::new(move |_event| {
            // The event payload is not interpreted; any row change simply
            // invalidates the current list.
            bump(generation);
        }));
        self.subscription.set_value(Some(handle));
    }

    pub fn list_loading(&self) -> Signal<bool> {
        let resource = self.list_resource;
        Signal::derive(move || resource.loading().get())
    }

    pub fn on_select_view(&self) -> Callback<ActiveView> {
        let vm = *self;
        Callback::new(move |view: ActiveView| vm.set_view(view))
    }

    pub fn on_view_details(&self) -> Callback<LeaveRequestResponse> {
        let detail = self.detail;
        Callback::new(move |record: LeaveRequestResponse| detail.set(Some(record)))
    }

    /// Approve/reject row action: fetch a fresh snapshot by id; the modal
    /// opens only if the record exists and is still pending.
    pub fn on_request_decision(&self) -> Callback<String> {
        let list_message = self.list_message;
        let fetch_selected_action = self.fetch_selected_action;
        Callback::new(move |id: String| {
            list_message.update(|msg| msg.clear());
            fetch_selected_action.dispatch(id);
        })
    }

    pub fn on_close_decision(&self) -> Callback<()> {
        let selected = self.selected_for_decision;
        let decision_state = self.decision_state;
        let decision_message = self.decision_message;
        Callback::new(move |_| {
            selected.set(None);
            decision_state.reset();
            decision_message.update(|msg| msg.clear());
        })
    }

    pub fn on_submit_decision(&self) -> Callback<()> {
        let selected = self.selected_for_decision;
        let decision_state = self.decision_state;
        let decision_message = self.decision_message;
        let decide_action = self.decide_action;
        Callback::new(move |_| {
            let record = match selected.get_untracked() {
                Some(record) => record,
                None => return,
            };
            match decision_state.to_decision() {
                Ok((status, comment)) => {
                    decision_message.update(|msg| msg.clear());
                    decide_action.dispatch(DecidePayload {
                        id: record.id.clone(),
                        status,
                        comment,
                    });
                }
                Err(err) => decision_message.update(|msg| msg.set_error(err)),
            }
        })
    }

    pub fn on_submit_application(&self) -> Callback<()> {
        let form_state = self.form_state;
        let form_message = self.form_message;
        let submit_action = self.submit_action;
        let session_employee = self.session_employee;
        Callback::new(move |_| {
            let employee = match session_employee.get_untracked() {
                Some(employee) => employee,
                None => {
                    form_message.update(|msg| {
                        msg.set_error(ApiError::validation(
                            "Your session has not finished loading yet.",
                        ))
                    });
                    return;
                }
            };
            match form_state.to_payload(&employee) {
                Ok(payload) => {
                    form_message.update(|msg| msg.clear());
                    submit_action.dispatch(payload);
                }
                Err(err) => form_message.update(|msg| msg.set_error(err)),
            }
        })
    }
}

pub fn use_leave_view_model() -> LeaveViewModel {
    match use_context::<LeaveViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeaveViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
