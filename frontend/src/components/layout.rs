use crate::state::{
    session::use_session,
    theme::{use_theme, Theme},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (session, _set_session) = use_session();
    let display_name = move || {
        session
            .get()
            .user
            .map(|user| user.display_name)
            .unwrap_or_default()
    };
    let theme = use_theme();
    let theme_label = move || match theme.current().get() {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">
                            "Leavekeeper"
                        </h1>
                    </div>
                    <div class="flex items-center gap-4">
                        <Show when=move || !display_name().is_empty()>
                            <span class="text-sm text-fg-muted">{display_name}</span>
                        </Show>
                        <button
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            on:click=move |_| theme.toggle()
                        >
                            {theme_label}
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_session, session_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_session_display_name() {
        let html = render_to_string(move || {
            provide_session(Some(session_user()));
            view! { <Header /> }
        });
        assert!(html.contains("Leavekeeper"));
        assert!(html.contains("Alice Example"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error".into() />
                    <SuccessMessage message="ok".into() />
                </div>
            }
        });
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
