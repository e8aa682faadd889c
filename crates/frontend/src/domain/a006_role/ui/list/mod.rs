use crate::domain::a006_role::ui::details::open_role_form;
use crate::shared::components::confirm_dialog::open_confirm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::shared::store::use_store;
use contracts::domain::a006_role::{Permission, PermissionAction, PermissionModule, Role, RoleId};
use contracts::shared::confirm::{ConfirmAction, ConfirmKind};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RoleList() -> impl IntoView {
    let store = use_store();
    let modal = use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let roles = Memo::new(move |_| store.store.with(|s| s.roles().roles().to_vec()));
    let selected = RwSignal::new(roles.with_untracked(|r| r.first().map(|r| r.id)));

    let open_form = move |id: Option<RoleId>| {
        open_role_form(modal, id, Callback::new(move |saved: RoleId| selected.set(Some(saved))));
    };

    let confirm_delete = move |id: RoleId, name: String| {
        let action = ConfirmAction::for_kind(ConfirmKind::DeleteRole, &name, 1);
        open_confirm(
            modal,
            action,
            Callback::new(move |_| {
                if store.mutate(|s| s.roles_mut().delete(id)).is_some() {
                    log::info!("role '{}' deleted", name);
                    if selected.get_untracked() == Some(id) {
                        selected.set(roles.with_untracked(|r| r.first().map(|r| r.id)));
                    }
                }
            }),
        );
    };

    view! {
        <PageFrame page_id="a006_role--list" category=PageCategory::Admin>
            <PageHeader title="Roles & Permissions".to_string() count=Signal::derive(move || roles.with(Vec::len))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(None)>
                    {icon("plus")}
                    " New Role"
                </Button>
            </PageHeader>

            <div class="roles-layout">
                <div class="roles-layout__list">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>"Role"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Description"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Members"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || roles.get()
                                key=|r| (r.id, r.name.clone(), r.description.clone(), r.members.len())
                                children=move |role: Role| {
                                    let id = role.id;
                                    let name = role.name.clone();
                                    view! {
                                        <tr
                                            class="table__row table__row--clickable"
                                            class:table__row--selected=move || selected.get() == Some(id)
                                            on:click=move |_| selected.set(Some(id))
                                        >
                                            <td class="table__cell">{role.name.clone()}</td>
                                            <td class="table__cell">{role.description.clone()}</td>
                                            <td class="table__cell">{role.members.len().to_string()}</td>
                                            <td class="table__cell" on:click=|e| e.stop_propagation()>
                                                <button class="icon-button" title="Edit" on:click=move |_| open_form(Some(id))>
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="icon-button"
                                                    title="Delete"
                                                    on:click=move |_| confirm_delete(id, name.clone())
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || roles.with(Vec::is_empty)>
                        <div class="table__empty">"No data found"</div>
                    </Show>
                </div>

                <div class="roles-layout__detail">
                    {move || match selected.get() {
                        Some(id) => view! {
                            <PermissionMatrix id=id />
                            <Members id=id />
                        }
                        .into_any(),
                        None => view! { <div class="table__empty">"Select a role"</div> }.into_any(),
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

/// Module x action grid of permission toggles
#[component]
fn PermissionMatrix(id: RoleId) -> impl IntoView {
    let store = use_store();

    view! {
        <Card>
            <h4 class="details-section__title">"Permissions"</h4>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Module"</TableHeaderCell>
                        {PermissionAction::ALL
                            .into_iter()
                            .map(|a| view! { <TableHeaderCell>{a.label()}</TableHeaderCell> })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {PermissionModule::ALL
                        .into_iter()
                        .map(|module| view! {
                            <TableRow>
                                <TableCell>{module.label()}</TableCell>
                                {PermissionAction::ALL
                                    .into_iter()
                                    .map(|action| {
                                        let permission = Permission::new(module, action);
                                        view! {
                                            <TableCell>
                                                <input
                                                    type="checkbox"
                                                    class="table__checkbox"
                                                    prop:checked=move || store.store.with(|s| s.roles().has_permission(id, permission))
                                                    on:change=move |_| {
                                                        let state = store.mutate(|s| s.roles_mut().toggle_permission(id, permission));
                                                        log::debug!("{:?} -> {:?}", permission, state);
                                                    }
                                                />
                                            </TableCell>
                                        }
                                    })
                                    .collect_view()}
                            </TableRow>
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </Card>
    }
}

#[component]
fn Members(id: RoleId) -> impl IntoView {
    let store = use_store();
    let new_member = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let members = Memo::new(move |_| {
        store
            .store
            .with(|s| s.roles().get(id).map(|r| r.members.clone()).unwrap_or_default())
    });

    let add = move |_| {
        let member = new_member.get_untracked();
        if store.mutate(|s| s.roles_mut().add_member(id, &member)) {
            new_member.set(String::new());
            error.set(None);
        } else if member.trim().is_empty() {
            error.set(Some("Member name is required".to_string()));
        } else {
            error.set(Some(format!("{} is already a member", member.trim())));
        }
    };

    view! {
        <Card>
            <h4 class="details-section__title">"Members"</h4>
            <ul class="role-members">
                <For
                    each=move || members.get()
                    key=|m| m.clone()
                    children=move |member: String| {
                        let to_remove = member.clone();
                        view! {
                            <li class="role-members__item">
                                {icon("user")}
                                <span>{member}</span>
                                <button
                                    class="icon-button"
                                    title="Remove member"
                                    on:click=move |_| {
                                        store.mutate(|s| s.roles_mut().remove_member(id, &to_remove));
                                    }
                                >
                                    {icon("x")}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <Input value=new_member placeholder="Member name" />
                <Button appearance=ButtonAppearance::Secondary on_click=add>
                    {icon("plus")}
                    " Add"
                </Button>
            </Flex>
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </Card>
    }
}
