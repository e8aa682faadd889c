mod import;
mod state;

use self::import::ImportActions;
use self::state::{create_state, persist_state};
use crate::layout::global_context::use_app_context;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, page_range, total_pages};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::shared::store::use_store;
use contracts::domain::a004_request::{parse_date_input, RequestFilter, RequestRecord, RequestStatus};
use contracts::domain::common::{EntityKind, RequestType};
use contracts::shared::routing::AppRoute;
use leptos::prelude::*;
use thaw::*;

fn list_title(entity: Option<EntityKind>) -> String {
    match entity {
        Some(e) => format!("{} Requests", e.label()),
        None => "All Requests".to_string(),
    }
}

#[component]
pub fn RequestList(entity: Option<EntityKind>) -> impl IntoView {
    let store = use_store();
    let ctx = use_app_context();
    let state = create_state(entity);
    let error = RwSignal::new(None::<String>);
    let page_size = store.page_size();

    // inputs bound to Thaw controls
    let initial = state.get_untracked().filter;
    let search = RwSignal::new(initial.search_term);
    let status = RwSignal::new(initial.status);
    let date_from = RwSignal::new(initial.date_from);
    let date_to = RwSignal::new(initial.date_to);
    let filters_expanded = RwSignal::new(state.get_untracked().filters_expanded);

    Effect::new(move |_| {
        let filter = RequestFilter {
            search_term: search.get(),
            status: status.get(),
            date_from: date_from.get(),
            date_to: date_to.get(),
        };
        for (name, value) in [("from", &filter.date_from), ("to", &filter.date_to)] {
            if !value.trim().is_empty() && parse_date_input(value).is_none() {
                log::warn!("ignoring unreadable '{}' date: {}", name, value);
            }
        }
        let expanded = filters_expanded.get();
        state.update(|s| {
            if s.filter != filter {
                s.filter = filter;
                s.page = 0;
            }
            s.filters_expanded = expanded;
        });
        persist_state(entity, state);
    });

    let filtered = Memo::new(move |_| {
        let filter = state.with(|s| s.filter.clone());
        store.store.with(|st| {
            st.requests()
                .iter()
                .filter(|r| entity.map_or(true, |e| r.entity_kind() == e))
                .filter(|r| filter.matches(r))
                .cloned()
                .collect::<Vec<RequestRecord>>()
        })
    });

    let total_count = Signal::derive(move || filtered.with(Vec::len));
    let page_count = Signal::derive(move || total_pages(total_count.get(), page_size));
    let current_page = Signal::derive(move || state.with(|s| s.page).min(page_count.get() - 1));
    let page_rows = Memo::new(move |_| {
        let page = current_page.get();
        filtered.with(|rows| rows[page_range(rows.len(), page, page_size)].to_vec())
    });

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        persist_state(entity, state);
    };

    let active_filters_count = Signal::derive(move || state.with(|s| s.filter.active_count()));

    let open_new = move |_| {
        ctx.navigate(AppRoute::RequestNew {
            entity: entity.unwrap_or(EntityKind::Customer),
            request_type: RequestType::New,
            source: None,
        })
    };

    view! {
        <PageFrame page_id="a004_request--list" category=PageCategory::List>
            <PageHeader title=list_title(entity) count=Signal::derive(move || total_count.get())>
                {entity.map(|e| view! { <ImportActions entity=e error=error /> })}
                <Button appearance=ButtonAppearance::Primary on_click=open_new>
                    {icon("plus")}
                    " New Request"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <FilterPanel
                is_expanded=filters_expanded
                active_filters_count=active_filters_count
                toolbar=move || view! {
                    <PaginationControls
                        current_page=current_page
                        total_pages=page_count
                        total_count=total_count
                        on_page_change=Callback::new(go_to_page)
                    />
                }
            >
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="min-width: 280px;">
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Search"</Label>
                            <Input value=search placeholder="ID, title or step owner" />
                        </Flex>
                    </div>
                    <div style="min-width: 160px;">
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Status"</Label>
                            <Select value=status>
                                <option value="">"All"</option>
                                {RequestStatus::ALL
                                    .into_iter()
                                    .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                                    .collect_view()}
                            </Select>
                        </Flex>
                    </div>
                    <div>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Created from"</Label>
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || date_from.get()
                                on:input=move |ev| date_from.set(event_target_value(&ev))
                            />
                        </Flex>
                    </div>
                    <div>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Created to"</Label>
                            <input
                                type="date"
                                class="form__input"
                                prop:value=move || date_to.get()
                                on:input=move |ev| date_to.set(event_target_value(&ev))
                            />
                        </Flex>
                    </div>
                </Flex>
            </FilterPanel>

            <div class="filter-tags">
                {move || {
                    [("Search", search), ("Status", status), ("From", date_from), ("To", date_to)]
                        .into_iter()
                        .filter_map(|(name, signal)| {
                            let value = signal.get();
                            (!value.is_empty()).then(|| view! {
                                <FilterTag
                                    label=format!("{name}: {value}")
                                    on_remove=Callback::new(move |_| signal.set(String::new()))
                                />
                            })
                        })
                        .collect_view()
                }}
            </div>

            <div class="page-content">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=150.0>"Request ID"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=80.0>"Type"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=260.0>"Title"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=120.0>"Entity"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=160.0>"Step Owner"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=160.0>"Current Step"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=100.0>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=110.0>"Created"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = page_rows.get();
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="8">
                                            <span class="table__empty">"No data found"</span>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            let term = search.get_untracked();
                            rows.into_iter()
                                .map(|r| {
                                    let id = r.id.clone();
                                    let status = r.status;
                                    view! {
                                        <tr
                                            class="table__row table__row--clickable"
                                            on:click=move |_| ctx.navigate(AppRoute::RequestView { id: id.clone() })
                                        >
                                            <td class="table__cell table__cell--link">{highlight_matches(&r.id, &term)}</td>
                                            <td class="table__cell">{r.request_type.as_str()}</td>
                                            <td class="table__cell">{highlight_matches(&r.request_title, &term)}</td>
                                            <td class="table__cell">{r.entity_kind().label()}</td>
                                            <td class="table__cell">{highlight_matches(&r.step_owner, &term)}</td>
                                            <td class="table__cell">{r.current_steps.clone()}</td>
                                            <td class="table__cell"><StatusBadge status=status /></td>
                                            <td class="table__cell">{format_date(&r.created_date)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_title() {
        assert_eq!(list_title(None), "All Requests");
        assert_eq!(list_title(Some(EntityKind::SpareParts)), "Spare Parts Requests");
    }
}
