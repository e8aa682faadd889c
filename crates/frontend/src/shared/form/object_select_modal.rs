use crate::shared::list_utils::highlight_matches;
use crate::shared::modal_frame::ModalSize;
use crate::shared::modal_stack::{ModalHandle, ModalStackService};
use contracts::shared::form::{FieldTable, FormState, Record};
use contracts::shared::object_select::ObjectSelectSession;
use leptos::prelude::*;
use thaw::*;

/// Opens the lookup modal for the object-select field `key`.
///
/// The form is only written on confirm; cancel and Escape leave it as is.
pub fn open_object_select(
    modal: ModalStackService,
    table: &'static FieldTable,
    key: &str,
    values: RwSignal<FormState>,
) {
    let Some(session) = table.field(key).and_then(ObjectSelectSession::open) else {
        log::warn!("'{}' is not an object-select field", key);
        return;
    };
    modal.push(format!("Select {}", session.title()), ModalSize::Large, move |handle| {
        view! { <ObjectSelectModal session=session table=table values=values handle=handle /> }.into_any()
    });
}

#[component]
fn ObjectSelectModal(
    session: ObjectSelectSession<'static>,
    table: &'static FieldTable,
    values: RwSignal<FormState>,
    handle: ModalHandle,
) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let picked = RwSignal::new(None::<Record>);
    let results = Memo::new(move |_| {
        search.with(|term| session.search(term).into_iter().cloned().collect::<Vec<_>>())
    });

    let confirm = move || {
        let Some(record) = picked.get_untracked() else {
            return;
        };
        values.update(|state| session.confirm(&record, table, state));
        handle.close();
    };

    view! {
        <div class="lookup">
            <div class="lookup__search">
                <Input value=search placeholder="Search..." />
            </div>

            <div class="lookup__table">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {session
                                .columns()
                                .iter()
                                .map(|c| view! { <TableHeaderCell>{c.label.clone()}</TableHeaderCell> })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = results.get();
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=session.columns().len().to_string()>
                                            <span class="table__empty">"No data found"</span>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|record| {
                                    let is_picked = {
                                        let record = record.clone();
                                        move || picked.with(|p| p.as_ref() == Some(&record))
                                    };
                                    let on_pick = {
                                        let record = record.clone();
                                        move |_| picked.set(Some(record.clone()))
                                    };
                                    let on_double = {
                                        let record = record.clone();
                                        move |_| {
                                            picked.set(Some(record.clone()));
                                            confirm();
                                        }
                                    };
                                    view! {
                                        <tr
                                            class="table__row lookup__row"
                                            class:table__row--selected=is_picked
                                            on:click=on_pick
                                            on:dblclick=on_double
                                        >
                                            {session
                                                .columns()
                                                .iter()
                                                .map(|c| {
                                                    let text = record.get(&c.key).cloned().unwrap_or_default();
                                                    view! {
                                                        <td class="table__cell">
                                                            {search.with_untracked(|term| highlight_matches(&text, term))}
                                                        </td>
                                                    }
                                                })
                                                .collect_view()}
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <div class="lookup__actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || picked.with(Option::is_none))
                    on_click=move |_| confirm()
                >
                    "Select"
                </Button>
            </div>
        </div>
    }
}
