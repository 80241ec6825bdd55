use crate::api::{ApiClient, SessionResponse};
use leptos::*;

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

/// Identity of the single current user, as resolved by the store. The form
/// and the `mine` filter refuse to act while `user` is `None`.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub user: Option<SessionResponse>,
    pub loading: bool,
}

fn create_session_context() -> SessionContext {
    let (session_state, set_session_state) = create_signal(SessionState::default());
    set_session_state.update(|state| state.loading = true);

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let set_session_for_fetch = set_session_state;
    spawn_local(async move {
        match api_client.get_session().await {
            Ok(user) => set_session_for_fetch.update(|state| {
                state.user = Some(user);
                state.loading = false;
            }),
            Err(err) => {
                log::warn!("failed to resolve session identity: {}", err);
                set_session_for_fetch.update(|state| {
                    state.user = None;
                    state.loading = false;
                });
            }
        }
    });

    (session_state, set_session_state)
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

/// Display name of the current user, if the session has resolved.
pub fn session_display_name() -> Signal<Option<String>> {
    let (session, _set_session) = use_session();
    Signal::derive(move || session.get().user.map(|user| user.display_name))
}
