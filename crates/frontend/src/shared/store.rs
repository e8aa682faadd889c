//! Reactive wrapper around the in-memory [`MockStore`]
//!
//! Every page reads and mutates data through this context; one `update`
//! call is one state transition.

use contracts::shared::config::AppConfig;
use contracts::shared::store::{Fixtures, MockStore};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct StoreContext {
    pub store: RwSignal<MockStore>,
    pub config: StoredValue<AppConfig>,
}

impl StoreContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: RwSignal::new(MockStore::new(Fixtures::seed())),
            config: StoredValue::new(config),
        }
    }

    pub fn page_size(&self) -> usize {
        self.config.with_value(|c| c.ui.page_size)
    }

    /// Runs a mutating store operation and returns its result.
    pub fn mutate<T>(&self, op: impl FnOnce(&mut MockStore) -> T) -> T {
        self.store
            .try_update(op)
            .expect("StoreContext used after its owner was disposed")
    }
}

pub fn use_store() -> StoreContext {
    use_context::<StoreContext>().expect("StoreContext not found in context")
}

pub fn now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}
