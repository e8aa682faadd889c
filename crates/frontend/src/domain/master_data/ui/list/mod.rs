//! Master-data table of one entity; rows start Copy/Edit requests

use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, page_range, total_pages};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::shared::store::use_store;
use contracts::domain::common::{EntityKind, RequestType};
use contracts::shared::form::Record;
use contracts::shared::routing::AppRoute;
use contracts::shared::store::MockStore;
use leptos::prelude::*;
use thaw::*;

/// Case-insensitive match against any shown column
fn record_matches(record: &Record, columns: &[(&str, &str)], term: &str) -> bool {
    let term = term.to_lowercase();
    term.is_empty()
        || columns
            .iter()
            .filter_map(|(key, _)| record.get(*key))
            .any(|v| v.to_lowercase().contains(&term))
}

#[component]
pub fn MasterDataList(entity: EntityKind) -> impl IntoView {
    let store = use_store();
    let ctx = use_app_context();
    let columns = MockStore::master_columns(entity);
    let page_size = store.page_size();

    let search = RwSignal::new(String::new());
    let page = RwSignal::new(0usize);

    let filtered = Memo::new(move |_| {
        let term = search.get();
        store.store.with(|s| {
            s.master_records(entity)
                .into_iter()
                .filter(|r| record_matches(r, columns, &term))
                .collect::<Vec<Record>>()
        })
    });
    // a new search starts from the first page
    Effect::new(move |_| {
        search.track();
        page.set(0);
    });

    let total_count = Signal::derive(move || filtered.with(Vec::len));
    let page_count = Signal::derive(move || total_pages(total_count.get(), page_size));
    let current_page = Signal::derive(move || page.get().min(page_count.get() - 1));

    let start_request = move |request_type: RequestType, code: String| {
        ctx.navigate(AppRoute::RequestNew {
            entity,
            request_type,
            source: Some(code),
        })
    };

    view! {
        <PageFrame page_id="master_data--list" category=PageCategory::List>
            <PageHeader title=entity.label().to_string() count=Signal::derive(move || total_count.get())>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(AppRoute::RequestNew {
                        entity,
                        request_type: RequestType::New,
                        source: None,
                    })
                >
                    {icon("plus")}
                    {format!(" New {}", entity.label())}
                </Button>
            </PageHeader>

            <div class="page__toolbar">
                <div style="min-width: 320px;">
                    <Input value=search placeholder="Search..." />
                </div>
                <PaginationControls
                    current_page=current_page
                    total_pages=page_count
                    total_count=total_count
                    on_page_change=Callback::new(move |p| page.set(p))
                />
            </div>

            <div class="page-content">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {columns
                                .iter()
                                .map(|(_, label)| view! { <TableHeaderCell resizable=true min_width=120.0>{*label}</TableHeaderCell> })
                                .collect_view()}
                            <TableHeaderCell min_width=180.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let records = filtered.get();
                            if records.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=(columns.len() + 1).to_string()>
                                            <span class="table__empty">"No data found"</span>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            let term = search.get_untracked();
                            let range = page_range(records.len(), current_page.get(), page_size);
                            records[range]
                                .iter()
                                .cloned()
                                .map(|record| {
                                    let term = term.clone();
                                    let code = record.get("code").cloned().unwrap_or_default();
                                    let copy_code = code.clone();
                                    view! {
                                        <TableRow>
                                            {columns
                                                .iter()
                                                .map(|(key, _)| {
                                                    let text = record.get(*key).cloned().unwrap_or_default();
                                                    let term = term.clone();
                                                    view! { <TableCell>{highlight_matches(&text, &term)}</TableCell> }
                                                })
                                                .collect_view()}
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| start_request(RequestType::Copy, copy_code.clone())
                                                    >
                                                        {icon("copy")}
                                                        " Copy"
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| start_request(RequestType::Edit, code.clone())
                                                    >
                                                        {icon("edit")}
                                                        " Edit"
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
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
    use contracts::shared::form::record;

    #[test]
    fn test_record_matches_shown_columns_only() {
        let columns = [("code", "Code"), ("name", "Name")];
        let r = record(&[("code", "C-10001"), ("name", "PT Maju Jaya"), ("hidden", "secret")]);
        assert!(record_matches(&r, &columns, "maju"));
        assert!(record_matches(&r, &columns, "c-100"));
        assert!(record_matches(&r, &columns, ""));
        assert!(record_matches(&r, &columns, " jaya"));
        assert!(!record_matches(&r, &columns, "  "));
        assert!(!record_matches(&r, &columns, "secret"));
    }
}
