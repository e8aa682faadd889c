use contracts::domain::a004_request::RequestFilter;
use contracts::domain::common::EntityKind;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestListState {
    pub filter: RequestFilter,
    /// 0-based
    pub page: usize,
    pub filters_expanded: bool,
}

/// Session storage key; each entity list keeps its own filters.
fn storage_key(entity: Option<EntityKind>) -> String {
    match entity {
        Some(e) => format!("a004_request_list_{}", e.slug()),
        None => "a004_request_list_all".to_string(),
    }
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

fn restore(entity: Option<EntityKind>) -> Option<RequestListState> {
    let raw = session_storage()?.get_item(&storage_key(entity)).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(state) => Some(state),
        Err(e) => {
            log::warn!("dropping stored list state: {}", e);
            None
        }
    }
}

// Create state within component scope so it is disposed with the page
pub fn create_state(entity: Option<EntityKind>) -> RwSignal<RequestListState> {
    RwSignal::new(restore(entity).unwrap_or_default())
}

pub fn persist_state(entity: Option<EntityKind>, state: RwSignal<RequestListState>) {
    let Some(storage) = session_storage() else {
        return;
    };
    let json = state.with_untracked(serde_json::to_string);
    match json {
        Ok(json) => {
            if storage.set_item(&storage_key(entity), &json).is_err() {
                log::warn!("session storage is not writable");
            }
        }
        Err(e) => log::warn!("list state not persisted: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_per_entity() {
        assert_eq!(storage_key(None), "a004_request_list_all");
        assert_ne!(
            storage_key(Some(EntityKind::Customer)),
            storage_key(Some(EntityKind::SpareParts))
        );
    }

    #[test]
    fn test_state_survives_json() {
        let state = RequestListState {
            filter: RequestFilter {
                search_term: "cust".into(),
                status: "Pending".into(),
                ..Default::default()
            },
            page: 2,
            filters_expanded: true,
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: RequestListState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
