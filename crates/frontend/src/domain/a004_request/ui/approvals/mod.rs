//! Approval queue: requests waiting for approve, with mass actions

use crate::layout::global_context::use_app_context;
use crate::shared::components::confirm_dialog::open_confirm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::selection::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::shared::store::{now, use_store};
use contracts::domain::a004_request::{approval_queue, RequestFilter, RequestRecord};
use contracts::shared::confirm::{ConfirmAction, ConfirmKind};
use contracts::shared::routing::AppRoute;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

#[component]
pub fn ApprovalQueue() -> impl IntoView {
    let store = use_store();
    let ctx = use_app_context();
    let modal = use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(HashSet::<String>::new());
    let notice = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    let queue = Memo::new(move |_| {
        let filter = RequestFilter {
            search_term: search.get(),
            ..Default::default()
        };
        store.store.with(|s| {
            approval_queue(s.requests())
                .into_iter()
                .filter(|r| filter.matches(r))
                .cloned()
                .collect::<Vec<RequestRecord>>()
        })
    });
    let shown_ids = Signal::derive(move || queue.with(|q| q.iter().map(|r| r.id.clone()).collect::<Vec<_>>()));

    // rows that left the queue cannot stay selected
    Effect::new(move |_| {
        let ids = shown_ids.get();
        selected.update(|s| s.retain(|id| ids.contains(id)));
    });

    let selected_ids = move || selected.with_untracked(|s| s.iter().cloned().collect::<Vec<String>>());

    let approve_selected = move |_| {
        let ids = selected_ids();
        if ids.is_empty() {
            return;
        }
        let action = ConfirmAction::for_kind(ConfirmKind::MassApprove, "", ids.len());
        let ids = StoredValue::new(ids);
        open_confirm(
            modal,
            action,
            Callback::new(move |_| {
                let total = ids.with_value(Vec::len);
                let done = store.mutate(|s| ids.with_value(|ids| s.approve_many(ids, now())));
                selected.set(HashSet::new());
                error.set(None);
                notice.set(Some(format!("Approved {done} of {total} request(s)")));
            }),
        );
    };

    let reject_selected = move |_| {
        let ids = selected_ids();
        if ids.is_empty() {
            return;
        }
        let action = ConfirmAction::for_kind(ConfirmKind::MassReject, "", ids.len());
        let ids = StoredValue::new(ids);
        open_confirm(
            modal,
            action,
            Callback::new(move |reason: String| {
                let result = store.mutate(|s| ids.with_value(|ids| s.reject_many(ids, &reason, now())));
                match result {
                    Ok(done) => {
                        selected.set(HashSet::new());
                        error.set(None);
                        notice.set(Some(format!("Rejected {done} request(s)")));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            }),
        );
    };

    let nothing_selected = Signal::derive(move || selected.with(HashSet::is_empty));

    view! {
        <PageFrame page_id="a004_request--list" category=PageCategory::List>
            <PageHeader title="Waiting for Approve".to_string() count=Signal::derive(move || queue.with(Vec::len))>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=nothing_selected
                    on_click=approve_selected
                >
                    {icon("check")}
                    {move || format!(" Approve ({})", selected.with(HashSet::len))}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    class="button--danger"
                    disabled=nothing_selected
                    on_click=reject_selected
                >
                    {icon("x")}
                    {move || format!(" Reject ({})", selected.with(HashSet::len))}
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            {move || notice.get().map(|n| view! {
                <div class="info-box">
                    <span class="info-box__icon">{icon("check")}</span>
                    <span class="info-box__text">{n}</span>
                </div>
            })}

            <div class="page__toolbar">
                <div style="min-width: 320px;">
                    <Input value=search placeholder="Search by ID, title or step owner" />
                </div>
            </div>

            <div class="page-content">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                ids=shown_ids
                                selected=selected
                                on_change=Callback::new(move |all: bool| {
                                    let ids = shown_ids.get_untracked();
                                    selected.update(|s| {
                                        if all {
                                            s.extend(ids);
                                        } else {
                                            s.retain(|id| !ids.contains(id));
                                        }
                                    });
                                })
                            />
                            <TableHeaderCell resizable=true min_width=150.0>"Request ID"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=260.0>"Title"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=120.0>"Entity"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=160.0>"Step Owner"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=100.0>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=110.0>"Created"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = queue.get();
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="7">
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
                                            <TableCellCheckbox
                                                item_id=r.id.clone()
                                                selected=selected
                                                on_change=Callback::new(move |(id, checked): (String, bool)| {
                                                    selected.update(|s| {
                                                        if checked {
                                                            s.insert(id);
                                                        } else {
                                                            s.remove(&id);
                                                        }
                                                    });
                                                })
                                            />
                                            <td class="table__cell table__cell--link">{highlight_matches(&r.id, &term)}</td>
                                            <td class="table__cell">{highlight_matches(&r.request_title, &term)}</td>
                                            <td class="table__cell">{r.entity_kind().label()}</td>
                                            <td class="table__cell">{highlight_matches(&r.step_owner, &term)}</td>
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
