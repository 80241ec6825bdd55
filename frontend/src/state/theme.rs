use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            if web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
                .flatten()
                .map(|m| m.matches())
                .unwrap_or(false)
            {
                return Theme::Dark;
            }
        }
        Theme::Light
    }
}

impl Theme {
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            theme: create_rw_signal(Theme::default()),
        }
    }

    pub fn toggle(&self) {
        let new_theme = match self.theme.get() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.theme.set(new_theme);
        self.apply_to_dom();
    }

    fn apply_to_dom(&self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(element) = document.document_element() {
                let class_list = element.class_list();
                let _ = class_list.remove_1("dark");
                let class = self.theme.get_untracked().as_class();
                if !class.is_empty() {
                    let _ = class_list.add_1(class);
                }
            }
        }
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::new();
    provide_context(state);
    state.apply_to_dom();
    state
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_else(ThemeState::new)
}
