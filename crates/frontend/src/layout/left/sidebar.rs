//! Sidebar with collapsible menu groups

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::domain::common::EntityKind;
use contracts::shared::routing::AppRoute;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    label: &'static str,
    route: AppRoute,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

fn item(label: &'static str, route: AppRoute) -> MenuItem {
    MenuItem { label, route }
}

fn menu_groups() -> Vec<MenuGroup> {
    let requests = EntityKind::ALL
        .into_iter()
        .map(|e| item(e.label(), AppRoute::Requests { entity: Some(e) }));
    let master_data = EntityKind::ALL
        .into_iter()
        .map(|e| item(e.label(), AppRoute::MasterData { entity: e }));

    vec![
        MenuGroup {
            id: "requests",
            label: "Requests",
            icon: "requests",
            items: std::iter::once(item("All Requests", AppRoute::Requests { entity: None }))
                .chain(requests)
                .collect(),
        },
        MenuGroup {
            id: "approvals",
            label: "My Approvals",
            icon: "approvals",
            items: vec![item("Waiting for Approve", AppRoute::Approvals)],
        },
        MenuGroup {
            id: "master-data",
            label: "Master Data",
            icon: "master-data",
            items: master_data.collect(),
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "roles",
            items: vec![
                item("Workflows", AppRoute::Workflows),
                item("Roles & Permissions", AppRoute::Roles),
            ],
        },
    ]
}

/// Menu entry highlighted for `route`; detail pages light up their list.
fn menu_route(route: &AppRoute) -> AppRoute {
    match route {
        AppRoute::RequestNew { entity, .. } => AppRoute::Requests {
            entity: Some(*entity),
        },
        AppRoute::RequestView { .. } => AppRoute::Requests { entity: None },
        AppRoute::WorkflowEdit { .. } => AppRoute::Workflows,
        other => other.clone(),
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let active = Memo::new(move |_| ctx.route.with(menu_route));
    let expanded_groups = RwSignal::new(vec!["requests", "approvals"]);

    view! {
        <div class="app-sidebar__content">
            {menu_groups()
                .into_iter()
                .map(|group| {
                    let gid = group.id;
                    let is_expanded = move || expanded_groups.with(|g| g.contains(&gid));
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    expanded_groups.update(|items| {
                                        if let Some(pos) = items.iter().position(|x| *x == gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    })
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_expanded>
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {group
                                        .items
                                        .clone()
                                        .into_iter()
                                        .map(|entry| {
                                            let route = StoredValue::new(entry.route);
                                            view! {
                                                <a
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        route.with_value(|r| active.with(|a| a == r))
                                                    }
                                                    style:padding-left="10px"
                                                    href=route.with_value(AppRoute::to_hash)
                                                    on:click=move |ev| {
                                                        ev.prevent_default();
                                                        ctx.navigate(route.get_value());
                                                    }
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        <span>{entry.label}</span>
                                                    </div>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::RequestType;

    #[test]
    fn test_detail_routes_highlight_their_list() {
        let new = AppRoute::RequestNew {
            entity: EntityKind::SpareParts,
            request_type: RequestType::Copy,
            source: Some("SP-30001".into()),
        };
        assert_eq!(
            menu_route(&new),
            AppRoute::Requests {
                entity: Some(EntityKind::SpareParts)
            }
        );
        let edit = AppRoute::WorkflowEdit {
            id: Some(1),
            country: "Vietnam".into(),
            entity: EntityKind::Customer,
        };
        assert_eq!(menu_route(&edit), AppRoute::Workflows);
        assert_eq!(menu_route(&AppRoute::Roles), AppRoute::Roles);
    }

    #[test]
    fn test_every_menu_route_round_trips_through_the_hash() {
        for group in menu_groups() {
            for entry in group.items {
                assert_eq!(AppRoute::from_hash(&entry.route.to_hash()).unwrap(), entry.route);
            }
        }
    }
}
