use contracts::shared::routing::AppRoute;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<AppRoute>,
    pub left_open: RwSignal<bool>,
    default_route: StoredValue<String>,
}

fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

impl AppGlobalContext {
    pub fn new(default_route: &str) -> Self {
        Self {
            route: RwSignal::new(AppRoute::resolve(&current_hash(), default_route)),
            left_open: RwSignal::new(true),
            default_route: StoredValue::new(default_route.to_string()),
        }
    }

    /// Keeps `route` in sync with `location.hash` (back/forward, manual edits).
    pub fn init_router_integration(&self) {
        let this = *self;
        let on_hash_change = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let hash = current_hash();
            let route = AppRoute::resolve(&hash, &this.default_route.get_value());
            leptos::logging::log!("hashchange: '{}' -> {:?}", hash, route);
            if this.route.with_untracked(|r| *r != route) {
                this.route.set(route);
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "hashchange",
                on_hash_change.as_ref().unchecked_ref(),
            );
        }
        // lives for the whole page
        on_hash_change.forget();
    }

    pub fn navigate(&self, route: AppRoute) {
        let hash = route.to_hash();
        leptos::logging::log!("navigate: {}", hash);
        if let Some(w) = window() {
            // fires hashchange, which is a no-op once `route` already matches
            let _ = w.location().set_hash(&hash);
        }
        self.route.set(route);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
