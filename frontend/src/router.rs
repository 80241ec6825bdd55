use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::leave::LeavePage,
    state::{session::SessionProvider, theme::provide_theme},
};

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_theme();
    view! {
        <SessionProvider>
            <Title text="Leavekeeper"/>
            <Router>
                <Routes>
                    <Route path="/" view=LeavePage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}
