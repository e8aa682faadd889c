use super::view_model::WorkflowEditorViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::approval_tree::ApprovalTreeView;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use contracts::domain::a005_workflow::COUNTRIES;
use contracts::domain::common::{EntityKind, RequestType};
use contracts::shared::routing::AppRoute;
use leptos::prelude::*;
use thaw::*;

#[component]
fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|m| view! { <span class="form__error">{m}</span> })
}

#[component]
pub fn WorkflowEditor(id: Option<u32>, country: String, entity: EntityKind) -> impl IntoView {
    let vm = WorkflowEditorViewModel::new(id, &country, entity);
    let ctx = use_app_context();
    let draft = vm.draft;
    let is_new = vm.is_new();
    let step_count = vm.step_count();

    let save = move |_| {
        if vm.save_command().is_some() {
            ctx.navigate(AppRoute::Workflows);
        }
    };

    view! {
        <PageFrame page_id="a005_workflow--detail" category=PageCategory::Detail>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("workflow")}
                    <h1 class="page__title">
                        {move || if is_new.get() { "New Workflow" } else { "Edit Workflow" }}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=save>
                        {icon("save")}
                        " Save"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctx.navigate(AppRoute::Workflows)>
                        "Close"
                    </Button>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="workflow-editor">
                <div class="workflow-editor__form">
                    <fieldset class="form__section">
                        <legend class="form__section-title">"General"</legend>
                        <div class="form__grid">
                            <div class="form__group">
                                <label class="form__label">"Name " <span class="form__required">"*"</span></label>
                                <input
                                    class="form__input"
                                    prop:value=move || draft.with(|d| d.name.clone())
                                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                                />
                                <FieldError message=vm.field_error("name".into()) />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Country"</label>
                                <select
                                    class="form__select"
                                    prop:value=move || draft.with(|d| d.country.clone())
                                    on:change=move |ev| draft.update(|d| d.country = event_target_value(&ev))
                                >
                                    {COUNTRIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                                </select>
                                <FieldError message=vm.field_error("country".into()) />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Entity"</label>
                                <select
                                    class="form__select"
                                    prop:value=move || draft.with(|d| d.entity.slug())
                                    on:change=move |ev| {
                                        if let Some(e) = EntityKind::from_param(&event_target_value(&ev)) {
                                            draft.update(|d| d.entity = e);
                                        }
                                    }
                                >
                                    {EntityKind::ALL
                                        .into_iter()
                                        .map(|e| view! { <option value=e.slug()>{e.label()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Request type"</label>
                                <select
                                    class="form__select"
                                    prop:value=move || draft.with(|d| d.request_type.as_str())
                                    on:change=move |ev| {
                                        if let Some(t) = RequestType::from_param(&event_target_value(&ev)) {
                                            draft.update(|d| d.request_type = t);
                                        }
                                    }
                                >
                                    {RequestType::ALL
                                        .into_iter()
                                        .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                            <label class="form__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || draft.with(|d| d.is_active)
                                    on:change=move |ev| draft.update(|d| d.is_active = event_target_checked(&ev))
                                />
                                " Active"
                            </label>
                        </div>
                    </fieldset>

                    <fieldset class="form__section">
                        <legend class="form__section-title">"Steps"</legend>
                        <FieldError message=vm.field_error("steps".into()) />
                        <For
                            each=move || 0..step_count.get()
                            key=|i| *i
                            children=move |i| view! { <StepEditor vm=vm index=i /> }
                        />
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_step()>
                            {icon("plus")}
                            " Add Step"
                        </Button>
                    </fieldset>
                </div>

                <div class="workflow-editor__preview">
                    <ApprovalTreeView
                        label=Signal::derive(move || draft.with(|d| {
                            if d.name.trim().is_empty() { "Preview".to_string() } else { d.name.clone() }
                        }))
                        tree=vm.preview()
                    />
                </div>
            </div>
        </PageFrame>
    }
}

/// One step card: name, parallel flag, SLA, approvers and ordering buttons
#[component]
fn StepEditor(vm: WorkflowEditorViewModel, index: usize) -> impl IntoView {
    let draft = vm.draft;
    let step_count = vm.step_count();
    let new_name = RwSignal::new(String::new());
    let new_title = RwSignal::new(String::new());
    let approver_error = RwSignal::new(None::<String>);

    let add_approver = move |_| {
        let name = new_name.get_untracked();
        if vm.add_approver(index, &name, &new_title.get_untracked()) {
            new_name.set(String::new());
            new_title.set(String::new());
            approver_error.set(None);
        } else if name.trim().is_empty() {
            approver_error.set(Some("Approver name is required".to_string()));
        } else {
            approver_error.set(Some(format!("{} is already an approver of this step", name.trim())));
        }
    };

    let approvers = move || draft.with(|d| d.steps.get(index).map(|s| s.approvers.clone()).unwrap_or_default());

    view! {
        <div class="workflow-step">
            <div class="workflow-step__head">
                <span class="workflow-step__ordinal">{index + 1}</span>
                <input
                    class="form__input"
                    placeholder="Step name"
                    prop:value=move || draft.with(|d| d.steps.get(index).map(|s| s.step_name.clone()).unwrap_or_default())
                    on:input=move |ev| vm.update_step(index, |s| s.step_name = event_target_value(&ev))
                />
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.steps.get(index).is_some_and(|s| s.parallel))
                        on:change=move |ev| vm.update_step(index, |s| s.parallel = event_target_checked(&ev))
                    />
                    " Parallel"
                </label>
                <input
                    class="form__input workflow-step__sla"
                    type="number"
                    min="0"
                    placeholder="SLA (h)"
                    prop:value=move || {
                        draft.with(|d| d.steps.get(index).and_then(|s| s.sla_hours).map(|h| h.to_string()).unwrap_or_default())
                    }
                    on:input=move |ev| {
                        let hours = event_target_value(&ev).trim().parse::<u32>().ok();
                        vm.update_step(index, |s| s.sla_hours = hours);
                    }
                />
                <div class="workflow-step__actions">
                    <button
                        class="icon-button"
                        title="Move up"
                        disabled=move || index == 0
                        on:click=move |_| vm.move_step_up(index)
                    >
                        {icon("arrow-up")}
                    </button>
                    <button
                        class="icon-button"
                        title="Move down"
                        disabled=move || index + 1 >= step_count.get()
                        on:click=move |_| vm.move_step_down(index)
                    >
                        {icon("arrow-down")}
                    </button>
                    <button class="icon-button" title="Remove step" on:click=move |_| vm.remove_step(index)>
                        {icon("delete")}
                    </button>
                </div>
            </div>
            <FieldError message=vm.field_error(format!("steps.{index}.stepName")) />

            <ul class="workflow-step__approvers">
                {move || {
                    approvers()
                        .into_iter()
                        .enumerate()
                        .map(|(a, approver)| view! {
                            <li class="workflow-step__approver">
                                <span class="approval-owner__name">{approver.name}</span>
                                <span class="approval-owner__title">{approver.title}</span>
                                <button
                                    class="icon-button"
                                    title="Remove approver"
                                    on:click=move |_| vm.remove_approver(index, a)
                                >
                                    {icon("x")}
                                </button>
                            </li>
                        })
                        .collect_view()
                }}
            </ul>
            <FieldError message=vm.field_error(format!("steps.{index}.approvers")) />

            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <Input value=new_name placeholder="Approver name" />
                <Input value=new_title placeholder="Title" />
                <Button appearance=ButtonAppearance::Secondary size=ButtonSize::Small on_click=add_approver>
                    {icon("plus")}
                    " Add Approver"
                </Button>
            </Flex>
            <FieldError message=approver_error />
        </div>
    }
}
