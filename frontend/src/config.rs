use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::api::realtime;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    /// Explicit websocket endpoint for the change feed. When absent it is
    /// derived from `api_base_url`.
    pub change_feed_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static CHANGE_FEED_URL: OnceLock<String> = OnceLock::new();

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn global_string(object_key: &str, value_key: &str) -> Option<String> {
    let w = window();
    let any = js_sys::Reflect::get(&w, &object_key.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    // Try lower and upper case keys
    let val = js_sys::Reflect::get(&obj, &value_key.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| {
            js_sys::Reflect::get(&obj, &value_key.to_uppercase().as_str().into()).ok()
        });
    val.and_then(|v| v.as_string())
}

fn snapshot_from_globals(value_key: &str) -> Option<String> {
    // Expect optional globals: window.__LEAVEKEEPER_ENV (env.js) takes
    // precedence over window.__LEAVEKEEPER_CONFIG (written from config.json).
    if let Some(value) = global_string("__LEAVEKEEPER_ENV", value_key) {
        return Some(value);
    }
    global_string("__LEAVEKEEPER_CONFIG", value_key)
}

fn write_window_config(cfg: &RuntimeConfig) {
    let w = match web_sys::window() {
        Some(win) => win,
        None => return,
    };
    let obj = js_sys::Object::new();
    if let Some(url) = &cfg.api_base_url {
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
    }
    if let Some(url) = &cfg.change_feed_url {
        let _ = js_sys::Reflect::set(
            &obj,
            &"change_feed_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
    }
    let _ = js_sys::Reflect::set(&w, &"__LEAVEKEEPER_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals("api_base_url") {
        return cache(&API_BASE_URL, &existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache(&API_BASE_URL, &url);
        }
    }
    cache(&API_BASE_URL, DEFAULT_API_BASE_URL)
}

pub async fn await_change_feed_url() -> String {
    if let Some(cached) = CHANGE_FEED_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals("change_feed_url") {
        return cache(&CHANGE_FEED_URL, &existing);
    }
    let derived = realtime::change_feed_url(&await_api_base_url().await);
    cache(&CHANGE_FEED_URL, &derived)
}

fn cache(slot: &OnceLock<String>, value: &str) -> String {
    let value = value.to_string();
    let _ = slot.set(value.clone());
    value
}

pub async fn init() {
    let _ = await_api_base_url().await;
    let _ = await_change_feed_url().await;
}
