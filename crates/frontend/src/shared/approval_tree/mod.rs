//! Visual approval chain: numbered steps, owners with status icon, badge,
//! timestamp and rejection reason.

use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use contracts::shared::approval::{render_tree, ApprovalTree, RenderedOwner, RenderedStep};
use leptos::prelude::*;

#[component]
pub fn ApprovalTreeView(
    /// Header label (workflow name or the standard fallback)
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)] tree: Signal<ApprovalTree>,
) -> impl IntoView {
    let steps = Memo::new(move |_| tree.with(render_tree));

    view! {
        <div class="approval-tree">
            <div class="approval-tree__header">
                {icon("workflow")}
                <span class="approval-tree__label">{move || label.get()}</span>
            </div>
            {move || {
                let steps = steps.get();
                if steps.is_empty() {
                    return view! {
                        <div class="approval-tree__empty">"No approval steps yet"</div>
                    }
                    .into_any();
                }
                view! {
                    <ol class="approval-tree__steps">
                        {steps.into_iter().map(|step| view! { <StepView step=step /> }).collect_view()}
                    </ol>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn StepView(step: RenderedStep) -> impl IntoView {
    view! {
        <li class="approval-step">
            <div class="approval-step__head">
                <span class="approval-step__ordinal">{step.ordinal}</span>
                <span class="approval-step__name">{step.step_name}</span>
                {step.parallel.then(|| view! { <Badge variant="primary".to_string()>"Parallel"</Badge> })}
                {step.sla_label.map(|sla| view! { <span class="approval-step__sla">{sla}</span> })}
            </div>
            <ul class="approval-step__owners">
                {step.owners.into_iter().map(|owner| view! { <OwnerView owner=owner /> }).collect_view()}
            </ul>
        </li>
    }
}

#[component]
fn OwnerView(owner: RenderedOwner) -> impl IntoView {
    let avatar = match owner.avatar_url {
        Some(url) => view! { <img class="approval-owner__avatar" src=url alt=owner.name.clone() /> }.into_any(),
        None => view! { <span class="approval-owner__avatar approval-owner__avatar--initials">{owner.initials}</span> }
            .into_any(),
    };
    let tone = owner.tone.variant();

    view! {
        <li class="approval-owner">
            {avatar}
            <div class="approval-owner__info">
                <div class="approval-owner__name">{owner.name}</div>
                <div class="approval-owner__title">{owner.title}</div>
                {owner.timestamp.map(|ts| view! { <div class="approval-owner__time">{ts}</div> })}
            </div>
            <span class=format!("approval-owner__icon approval-owner__icon--{tone}")>
                {icon(owner.icon.icon_name())}
            </span>
            <Badge variant=tone.to_string()>{owner.status.as_str()}</Badge>
            {owner.reason.map(|reason| view! {
                <div class="approval-owner__reason">
                    <span class="approval-owner__reason-label">"Reason: "</span>
                    {reason}
                </div>
            })}
        </li>
    }
}
