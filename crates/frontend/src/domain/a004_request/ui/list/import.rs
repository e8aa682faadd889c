//! CSV template download and bulk import into draft requests

use crate::shared::components::ui::Badge;
use crate::shared::export::{download_template, read_file_text};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalSize;
use crate::shared::modal_stack::{ModalHandle, ModalStackService};
use crate::shared::store::{now, use_store};
use contracts::domain::common::EntityKind;
use contracts::shared::csv_io::{parse_import, ImportBatch};
use leptos::prelude::*;
use thaw::*;

/// "Template" and "Import CSV" header buttons for one entity list.
#[component]
pub fn ImportActions(entity: EntityKind, error: RwSignal<Option<String>>) -> impl IntoView {
    let store = use_store();
    let modal = use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_template = move |_| {
        if let Err(e) = download_template(entity) {
            log::error!("template download failed: {}", e);
            error.set(Some(e));
        }
    };

    let on_file_selected = move |_| {
        let Some(input) = file_input.get() else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        // picking the same file again must fire change
        input.set_value("");

        leptos::task::spawn_local(async move {
            let file_name = file.name();
            let content = match read_file_text(&file).await {
                Ok(content) => content,
                Err(e) => {
                    error.set(Some(e));
                    return;
                }
            };
            let batch = match parse_import(entity, &file_name, &content) {
                Ok(batch) => batch,
                Err(e) => {
                    log::warn!("import of {} rejected: {}", file_name, e);
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            let created = store.mutate(|s| s.import_rows(entity, batch.rows.clone(), now()));
            log::info!("imported {} request(s) from {}", created.len(), file_name);
            error.set(None);
            open_import_summary(modal, batch, created);
        });
    };

    view! {
        <Button appearance=ButtonAppearance::Secondary on_click=on_template>
            {icon("download")}
            " Template"
        </Button>
        <Button
            appearance=ButtonAppearance::Secondary
            on_click=move |_| {
                if let Some(input) = file_input.get() {
                    input.click();
                }
            }
        >
            {icon("upload")}
            " Import CSV"
        </Button>
        <input
            node_ref=file_input
            type="file"
            accept=".csv,text/csv"
            style="display: none;"
            on:change=on_file_selected
        />
    }
}

fn open_import_summary(modal: ModalStackService, batch: ImportBatch, created: Vec<String>) {
    let title = format!("Import: {}", batch.file_name);
    modal.push(title, ModalSize::Medium, move |handle| {
        view! { <ImportSummary batch=batch.clone() created=created.clone() handle=handle /> }.into_any()
    });
}

#[component]
fn ImportSummary(batch: ImportBatch, created: Vec<String>, handle: ModalHandle) -> impl IntoView {
    let unmapped = batch.unmapped_count();

    view! {
        <div class="import-summary">
            <p class="import-summary__result">
                {format!("{} draft request(s) created from {} row(s).", created.len(), batch.rows.len())}
            </p>

            {(unmapped > 0).then(|| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">
                        {format!("{unmapped} column(s) were not found in the file and were left empty.")}
                    </span>
                </div>
            })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Expected column"</TableHeaderCell>
                        <TableHeaderCell>"Found in file"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {batch
                        .column_mapping
                        .into_iter()
                        .map(|m| {
                            let found = match m.found {
                                Some(found) => view! { <span>{found}</span> }.into_any(),
                                None => view! { <Badge variant="error".to_string()>"missing"</Badge> }.into_any(),
                            };
                            view! {
                                <TableRow>
                                    <TableCell>{m.expected}</TableCell>
                                    <TableCell>{found}</TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>

            {(!created.is_empty()).then(|| view! {
                <div class="import-summary__ids">
                    <span class="form__label">"Created: "</span>
                    {created.join(", ")}
                </div>
            })}

            <div class="confirm-dialog__actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle.close()>
                    "Close"
                </Button>
            </div>
        </div>
    }
}
