use super::view_model::RequestDetailsViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::approval_tree::ApprovalTreeView;
use crate::shared::components::confirm_dialog::open_confirm;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::form::{DynamicForm, NestedRowsEditor};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use contracts::domain::a004_request::{RequestRecord, RequestStatus};
use contracts::shared::approval::workflow_label;
use contracts::shared::confirm::{ConfirmAction, ConfirmKind};
use contracts::shared::routing::AppRoute;
use contracts::shared::store::MockStore;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RequestDetails(id: String) -> impl IntoView {
    let vm = RequestDetailsViewModel::new(id);
    let ctx = use_app_context();

    // entity never changes for a record, so the form table is fixed
    let Some(entity) = vm.record.with_untracked(|r| r.as_ref().map(RequestRecord::entity_kind)) else {
        return view! {
            <PageFrame page_id="a004_request--detail" category=PageCategory::Detail>
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">
                        {format!("Request {} not found", vm.id.get_value())}
                    </span>
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| ctx.navigate(AppRoute::Requests { entity: None })
                >
                    "Back to requests"
                </Button>
            </PageFrame>
        }
        .into_any();
    };

    let table = MockStore::field_table(entity);
    let row_columns = MockStore::row_columns(entity);
    let editable = vm.is_editable();

    view! {
        <PageFrame page_id="a004_request--detail" category=PageCategory::Detail>
            <Header vm=vm />

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            {move || vm.notice.get().map(|n| view! {
                <div class="info-box">
                    <span class="info-box__icon">{icon("check")}</span>
                    <span class="info-box__text">{n}</span>
                </div>
            })}

            <Summary vm=vm />
            <TabBar vm=vm has_rows=!row_columns.is_empty() />

            <div class="page__content">
                {move || match vm.active_tab.get() {
                    "rows" => view! {
                        <NestedRowsEditor
                            title="Addresses"
                            columns=row_columns
                            rows=vm.rows
                            editable=editable
                        />
                    }
                    .into_any(),
                    "approval" => {
                        let record = vm.record;
                        let label = Signal::derive(move || {
                            record.with(|r| {
                                r.as_ref()
                                    .map(|r| {
                                        workflow_label(r.workflow_name.as_deref(), r.request_type, r.entity, &r.id)
                                    })
                                    .unwrap_or_default()
                            })
                        });
                        let tree = Signal::derive(move || {
                            record.with(|r| r.as_ref().map(|r| r.approval_tree.clone()).unwrap_or_default())
                        });
                        view! { <ApprovalTreeView label=label tree=tree /> }.into_any()
                    }
                    "json" => view! {
                        <Card>
                            <h4 class="details-section__title">"Form data"</h4>
                            <pre class="json-view">{move || vm.form_json()}</pre>
                        </Card>
                    }
                    .into_any(),
                    _ => view! {
                        <DynamicForm
                            table=table
                            values=vm.values
                            editable=editable
                            errors=vm.errors
                        />
                    }
                    .into_any(),
                }}
            </div>
        </PageFrame>
    }
    .into_any()
}

/// Title row with the status badge and the actions allowed in the current status
#[component]
fn Header(vm: RequestDetailsViewModel) -> impl IntoView {
    let ctx = use_app_context();
    let modal = use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let record = vm.record;
    let status = Signal::derive(move || record.with(|r| r.as_ref().map(|r| r.status).unwrap_or_default()));
    let can_cancel = Signal::derive(move || record.with(|r| r.as_ref().is_some_and(RequestRecord::can_cancel)));

    let on_reject = move |_| {
        let action = ConfirmAction::for_kind(ConfirmKind::RejectRequest, &vm.id.get_value(), 1);
        open_confirm(modal, action, Callback::new(move |reason: String| vm.reject_command(&reason)));
    };
    let on_cancel = move |_| {
        let action = ConfirmAction::for_kind(ConfirmKind::CancelRequest, &vm.id.get_value(), 1);
        open_confirm(modal, action, Callback::new(move |_| vm.cancel_command()));
    };
    let back = move |_| {
        let entity = record.with_untracked(|r| r.as_ref().map(RequestRecord::entity_kind));
        ctx.navigate(AppRoute::Requests { entity })
    };

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h2 class="page__title">
                    {move || record.with(|r| {
                        r.as_ref().map(|r| format!("{} {}", r.id, r.request_title)).unwrap_or_default()
                    })}
                </h2>
                <StatusBadge status=status />
            </div>
            <div class="page__header-right">
                <Show when=move || status.get() == RequestStatus::Draft>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.save_command()>
                        {icon("save")}
                        " Save"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.submit_command()>
                        {icon("send")}
                        " Submit"
                    </Button>
                </Show>
                <Show when=move || status.get() == RequestStatus::Pending>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.approve_command()>
                        {icon("check")}
                        " Approve"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary class="button--danger" on_click=on_reject>
                        {icon("x")}
                        " Reject"
                    </Button>
                </Show>
                <Show when=move || status.get() == RequestStatus::Approved>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.sync_command()>
                        "Sync to ERP"
                    </Button>
                </Show>
                <Show when=move || can_cancel.get()>
                    <Button appearance=ButtonAppearance::Subtle on_click=on_cancel>
                        "Cancel Request"
                    </Button>
                </Show>
                <Button appearance=ButtonAppearance::Secondary on_click=back>
                    "Close"
                </Button>
            </div>
        </div>
    }
}

/// Read-only request attributes
#[component]
fn Summary(vm: RequestDetailsViewModel) -> impl IntoView {
    let record = vm.record;
    let field = move |label: &'static str, value: fn(&RequestRecord) -> String| {
        view! {
            <div class="details-summary__item">
                <span class="details-summary__label">{label}</span>
                <span class="details-summary__value">
                    {move || record.with(|r| r.as_ref().map(value).unwrap_or_default())}
                </span>
            </div>
        }
    };

    view! {
        <div class="details-summary">
            {field("Type", |r| r.request_type.as_str().to_string())}
            {field("Entity", |r| r.entity_kind().label().to_string())}
            {field("Step Owner", |r| r.step_owner.clone())}
            {field("Current Step", |r| r.current_steps.clone())}
            {field("Created", |r| format_date(&r.created_date))}
            {field("Source", |r| r.source_code.clone().unwrap_or_else(|| "-".to_string()))}
        </div>
    }
}

#[component]
fn TabBar(vm: RequestDetailsViewModel, has_rows: bool) -> impl IntoView {
    let active_tab = vm.active_tab;
    let mut tabs = vec![("form", "Form")];
    if has_rows {
        tabs.push(("rows", "Addresses"));
    }
    tabs.extend([("approval", "Approval"), ("json", "JSON")]);

    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::Center class="details-tabs">
            {tabs
                .into_iter()
                .map(|(key, label)| view! {
                    <Button
                        appearance=Signal::derive(move || {
                            if active_tab.get() == key {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Subtle
                            }
                        })
                        size=ButtonSize::Small
                        on_click=move |_| vm.set_tab(key)
                    >
                        {label}
                    </Button>
                })
                .collect_view()}
        </Flex>
    }
}
