use crate::shared::icons::icon;
use contracts::shared::form::Record;
use leptos::prelude::*;
use thaw::*;

/// Editable grid for nested rows (e.g. customer addresses).
#[component]
pub fn NestedRowsEditor(
    #[prop(into)] title: String,
    columns: &'static [(&'static str, &'static str)],
    rows: RwSignal<Vec<Record>>,
    #[prop(into)] editable: Signal<bool>,
) -> impl IntoView {
    let add_row = move |_| {
        rows.update(|r| {
            r.push(columns.iter().map(|(k, _)| (k.to_string(), String::new())).collect());
        });
    };

    view! {
        <fieldset class="form__section">
            <legend class="form__section-title">{title}</legend>
            <Table>
                <TableHeader>
                    <TableRow>
                        {columns
                            .iter()
                            .map(|(_, label)| view! { <TableHeaderCell>{*label}</TableHeaderCell> })
                            .collect_view()}
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let count = rows.with(Vec::len);
                        if count == 0 {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan=(columns.len() + 1).to_string()>
                                        <span class="table__empty">"No data found"</span>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        (0..count)
                            .map(|idx| {
                                view! {
                                    <TableRow>
                                        {columns
                                            .iter()
                                            .map(|(key, _)| {
                                                let value = move || {
                                                    rows.with(|r| {
                                                        r.get(idx).and_then(|row| row.get(*key)).cloned().unwrap_or_default()
                                                    })
                                                };
                                                view! {
                                                    <TableCell>
                                                        <input
                                                            type="text"
                                                            class="form__input form__input--compact"
                                                            prop:value=value
                                                            prop:readonly=move || !editable.get()
                                                            on:change=move |ev| {
                                                                let v = event_target_value(&ev);
                                                                rows.update(|r| {
                                                                    if let Some(row) = r.get_mut(idx) {
                                                                        row.insert(key.to_string(), v);
                                                                    }
                                                                });
                                                            }
                                                        />
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view()}
                                        <TableCell>
                                            <Show when=move || editable.get()>
                                                <button
                                                    class="icon-button"
                                                    title="Remove row"
                                                    on:click=move |_| rows.update(|r| {
                                                        if idx < r.len() {
                                                            r.remove(idx);
                                                        }
                                                    })
                                                >
                                                    {icon("delete")}
                                                </button>
                                            </Show>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
            <Show when=move || editable.get()>
                <Button appearance=ButtonAppearance::Subtle on_click=add_row>
                    {icon("plus")}
                    " Add row"
                </Button>
            </Show>
        </fieldset>
    }
}
