//! Change feed over the leave-request table.
//!
//! The store pushes one JSON event per row change with no payload diff, so
//! the only reaction available to a listener is a refetch. On wasm the feed
//! is a WebSocket that keeps reconnecting until the subscription is dropped;
//! on the host an in-process feed stands in so list behavior can be driven
//! from tests.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use thiserror::Error;

pub const LEAVE_REQUESTS_TABLE: &str = "leave_requests";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOp {
    Insert,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub table: String,
    pub op: ChangeOp,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Error)]
pub enum SubscribeError {
    #[error("failed to open change feed socket: {0}")]
    Connect(String),
}

/// Derive the websocket endpoint from an http(s) api base url.
pub fn change_feed_url(api_base_url: &str) -> String {
    let ws_base = if let Some(rest) = api_base_url.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = api_base_url.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        api_base_url.to_string()
    };
    format!("{}/leave-requests/changes", ws_base.trim_end_matches('/'))
}

#[cfg(target_arch = "wasm32")]
mod feed {
    use super::{ChangeEvent, SubscribeError, LEAVE_REQUESTS_TABLE};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{CloseEvent, MessageEvent, WebSocket};

    const RECONNECT_DELAY_MS: u32 = 3_000;

    pub struct Shared {
        url: RefCell<String>,
        callback: Box<dyn Fn(&ChangeEvent)>,
        closed: Cell<bool>,
        socket: RefCell<Option<WebSocket>>,
        // The browser only holds raw pointers to these; they live here.
        onmessage: RefCell<Option<Closure<dyn FnMut(MessageEvent)>>>,
        onclose: RefCell<Option<Closure<dyn FnMut(CloseEvent)>>>,
    }

    pub fn start(callback: Box<dyn Fn(&ChangeEvent)>) -> Rc<Shared> {
        let shared = Rc::new(Shared {
            url: RefCell::new(String::new()),
            callback,
            closed: Cell::new(false),
            socket: RefCell::new(None),
            onmessage: RefCell::new(None),
            onclose: RefCell::new(None),
        });
        let weak = Rc::downgrade(&shared);
        wasm_bindgen_futures::spawn_local(async move {
            let url = crate::config::await_change_feed_url().await;
            if let Some(shared) = weak.upgrade() {
                shared.url.replace(url);
                if let Err(err) = connect(&shared) {
                    log::warn!("change feed unavailable: {}", err);
                    schedule_reconnect(&shared);
                }
            }
        });
        shared
    }

    pub fn stop(shared: &Shared) {
        shared.closed.set(true);
        if let Some(socket) = shared.socket.borrow_mut().take() {
            let _ = socket.close();
        }
    }

    fn connect(shared: &Rc<Shared>) -> Result<(), SubscribeError> {
        if shared.closed.get() {
            return Ok(());
        }
        let url = shared.url.borrow().clone();
        let socket =
            WebSocket::new(&url).map_err(|err| SubscribeError::Connect(format!("{:?}", err)))?;

        let weak = Rc::downgrade(shared);
        let onmessage = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            if let Some(shared) = weak.upgrade() {
                dispatch(&shared, &event);
            }
        });
        socket.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

        let weak = Rc::downgrade(shared);
        let onclose = Closure::<dyn FnMut(CloseEvent)>::new(move |_event: CloseEvent| {
            if let Some(shared) = weak.upgrade() {
                if !shared.closed.get() {
                    log::warn!("change feed closed, scheduling reconnect");
                    schedule_reconnect(&shared);
                }
            }
        });
        socket.set_onclose(Some(onclose.as_ref().unchecked_ref()));

        shared.onmessage.replace(Some(onmessage));
        shared.onclose.replace(Some(onclose));
        shared.socket.replace(Some(socket));
        Ok(())
    }

    fn dispatch(shared: &Shared, event: &MessageEvent) {
        if let Some(text) = event.data().as_string() {
            match serde_json::from_str::<ChangeEvent>(&text) {
                Ok(change) if change.table == LEAVE_REQUESTS_TABLE => (shared.callback)(&change),
                Ok(_) => {}
                Err(err) => log::debug!("ignoring malformed change event: {}", err),
            }
        }
    }

    fn schedule_reconnect(shared: &Rc<Shared>) {
        let weak = Rc::downgrade(shared);
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(RECONNECT_DELAY_MS).await;
            if let Some(shared) = weak.upgrade() {
                if !shared.closed.get() {
                    if let Err(err) = connect(&shared) {
                        log::warn!("change feed reconnect failed: {}", err);
                        schedule_reconnect(&shared);
                    }
                }
            }
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod feed {
    use super::ChangeEvent;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    thread_local! {
        static SUBSCRIBERS: RefCell<Vec<(u64, Rc<dyn Fn(&ChangeEvent)>)>> =
            RefCell::new(Vec::new());
        static NEXT_TOKEN: Cell<u64> = Cell::new(1);
    }

    pub fn register(callback: Rc<dyn Fn(&ChangeEvent)>) -> u64 {
        let token = NEXT_TOKEN.with(|next| {
            let token = next.get();
            next.set(token + 1);
            token
        });
        SUBSCRIBERS.with(|subs| subs.borrow_mut().push((token, callback)));
        token
    }

    pub fn unregister(token: u64) {
        SUBSCRIBERS.with(|subs| subs.borrow_mut().retain(|(t, _)| *t != token));
    }

    /// Deliver an event to every live subscription, standing in for the
    /// store's push channel.
    pub fn emit(event: &ChangeEvent) {
        let callbacks: Vec<Rc<dyn Fn(&ChangeEvent)>> =
            SUBSCRIBERS.with(|subs| subs.borrow().iter().map(|(_, cb)| cb.clone()).collect());
        for callback in callbacks {
            callback(event);
        }
    }

    pub fn subscriber_count() -> usize {
        SUBSCRIBERS.with(|subs| subs.borrow().len())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use feed::{emit, subscriber_count};

/// Live handle on the change feed. Dropping the handle releases the
/// subscription; a released handle never triggers another refetch.
pub struct Subscription {
    #[cfg(target_arch = "wasm32")]
    shared: Rc<feed::Shared>,
    #[cfg(not(target_arch = "wasm32"))]
    token: u64,
}

pub fn subscribe_changes(callback: Rc<dyn Fn(&ChangeEvent)>) -> Subscription {
    #[cfg(target_arch = "wasm32")]
    {
        Subscription {
            shared: feed::start(Box::new(move |event| callback(event))),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Subscription {
            token: feed::register(callback),
        }
    }
}

impl Subscription {
    /// Explicit release; equivalent to dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        feed::stop(&self.shared);
        #[cfg(not(target_arch = "wasm32"))]
        feed::unregister(self.token);
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use std::cell::Cell;

    fn update_event() -> ChangeEvent {
        ChangeEvent {
            table: LEAVE_REQUESTS_TABLE.to_string(),
            op: ChangeOp::Update,
            id: None,
        }
    }

    #[test]
    fn subscription_receives_events_until_dropped() {
        let seen = Rc::new(Cell::new(0u32));
        let seen_in_callback = seen.clone();
        let subscription = subscribe_changes(Rc::new(move |_event| {
            seen_in_callback.set(seen_in_callback.get() + 1);
        }));
        assert_eq!(subscriber_count(), 1);

        emit(&update_event());
        assert_eq!(seen.get(), 1);

        drop(subscription);
        assert_eq!(subscriber_count(), 0);
        emit(&update_event());
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn unsubscribe_releases_the_feed() {
        let subscription = subscribe_changes(Rc::new(|_event| {}));
        assert_eq!(subscriber_count(), 1);
        subscription.unsubscribe();
        assert_eq!(subscriber_count(), 0);
    }
}
