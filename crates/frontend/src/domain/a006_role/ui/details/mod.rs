//! Role create / edit form, shown in a modal

use crate::shared::modal_frame::ModalSize;
use crate::shared::modal_stack::{ModalHandle, ModalStackService};
use crate::shared::store::use_store;
use contracts::domain::a006_role::{RoleDto, RoleId};
use contracts::shared::form::FormErrors;
use leptos::prelude::*;
use thaw::*;

/// Opens the role form; `id` None creates a role. `on_saved` gets the role id.
pub fn open_role_form(modal: ModalStackService, id: Option<RoleId>, on_saved: Callback<RoleId>) {
    let title = if id.is_some() { "Edit Role" } else { "New Role" };
    modal.push(title, ModalSize::Small, move |handle| {
        view! { <RoleDetails id=id handle=handle on_saved=on_saved /> }.into_any()
    });
}

#[component]
fn RoleDetails(id: Option<RoleId>, handle: ModalHandle, on_saved: Callback<RoleId>) -> impl IntoView {
    let store = use_store();
    let initial = id
        .and_then(|id| {
            store.store.with_untracked(|s| {
                s.roles().get(id).map(|r| RoleDto {
                    name: r.name.clone(),
                    description: r.description.clone(),
                })
            })
        })
        .unwrap_or_default();

    let name = RwSignal::new(initial.name);
    let description = RwSignal::new(initial.description);
    let errors = RwSignal::new(FormErrors::new());

    let save = move |_| {
        let dto = RoleDto {
            name: name.get_untracked(),
            description: description.get_untracked(),
        };
        let result = store.mutate(|s| match id {
            Some(id) => s.roles_mut().update(id, &dto).map(|_| id),
            None => s.roles_mut().create(&dto),
        });
        match result {
            Ok(id) => {
                on_saved.run(id);
                handle.close();
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <div class="role-form">
            <div class="form__group">
                <label class="form__label">"Name " <span class="form__required">"*"</span></label>
                <Input value=name placeholder="e.g. Data Steward" />
                {move || errors.with(|e| e.get("name").map(str::to_string)).map(|m| view! {
                    <span class="form__error">{m}</span>
                })}
            </div>
            <div class="form__group">
                <label class="form__label">"Description"</label>
                <Textarea value=description placeholder="What this role is for" />
            </div>
            <div class="confirm-dialog__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    {if id.is_some() { "Save" } else { "Create" }}
                </Button>
            </div>
        </div>
    }
}
