//! Application-wide modal stack
//!
//! Lookup dialogs and confirmation gates are pushed here instead of being
//! rendered inside the page that opens them. Escape closes the topmost one.

use crate::shared::modal_frame::{ModalFrame, ModalSize};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    title: String,
    size: ModalSize,
    builder: ModalBuilder,
}

/// Lets modal content close itself.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    /// Runs `f` on the next tick. Removing a modal synchronously inside the
    /// DOM event that triggered it drops the running handler.
    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    pub fn push<F>(&self, title: impl Into<String>, size: ModalSize, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let entry = ModalEntry {
            id,
            title: title.into(),
            size,
            builder: Arc::new(builder),
        };
        log::debug!("modal #{} opened: {}", id, entry.title);
        self.stack.update(|s| s.push(entry));

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| {
            svc.stack.update(|s| {
                s.pop();
            })
        });
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the stack; mounted once at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|k| k.key() == "Escape");
        if is_escape && svc.stack.with_untracked(|s| !s.is_empty()) {
            svc.pop_deferred();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    }
    on_keydown.forget();

    view! {
        <Show when=move || svc.is_open()>
            <For
                each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(_, entry)| entry.id
                children=move |(depth, entry)| {
                    let id = entry.id;
                    let handle = ModalHandle { id, svc };
                    view! {
                        <ModalFrame
                            title=entry.title.clone()
                            size=entry.size
                            z_index=1000 + depth as i32
                            on_close=Callback::new(move |_| svc.close_deferred(id))
                        >
                            {(entry.builder)(handle)}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
