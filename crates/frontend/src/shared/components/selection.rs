//! Row selection checkboxes for thaw tables (mass approve / reject)

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    None,
    Some,
    All,
}

pub fn selection_state(ids: &[String], selected: &HashSet<String>) -> SelectionState {
    let hits = ids.iter().filter(|id| selected.contains(*id)).count();
    match hits {
        0 => SelectionState::None,
        n if n == ids.len() => SelectionState::All,
        _ => SelectionState::Some,
    }
}

/// Checkbox cell; stops the click so the row handler does not fire.
#[component]
pub fn TableCellCheckbox(
    #[prop(into)] item_id: String,
    #[prop(into)] selected: Signal<HashSet<String>>,
    /// (item_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let id_for_checked = item_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.with(|s| s.contains(&id_for_checked))
                on:change=move |ev| on_change.run((item_id.clone(), event_target_checked(&ev)))
            />
        </TableCell>
    }
}

/// Select-all checkbox; indeterminate while only part of `ids` is selected.
#[component]
pub fn TableHeaderCheckbox(
    /// Ids of the rows currently shown
    #[prop(into)]
    ids: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<HashSet<String>>,
    /// `true` = select all shown rows
    on_change: Callback<bool>,
) -> impl IntoView {
    let state = Signal::derive(move || {
        let ids = ids.get();
        if ids.is_empty() {
            return SelectionState::None;
        }
        selected.with(|s| selection_state(&ids, s))
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        let partial = state.get() == SelectionState::Some;
        if let Some(input) = checkbox_ref.get() {
            if let Some(el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                el.set_indeterminate(partial);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == SelectionState::All
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_state() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let mut selected = HashSet::new();
        assert_eq!(selection_state(&ids, &selected), SelectionState::None);
        selected.insert("a".to_string());
        assert_eq!(selection_state(&ids, &selected), SelectionState::Some);
        selected.insert("b".to_string());
        // ids hidden by a filter do not count
        selected.insert("zzz".to_string());
        assert_eq!(selection_state(&ids, &selected), SelectionState::All);
    }
}
