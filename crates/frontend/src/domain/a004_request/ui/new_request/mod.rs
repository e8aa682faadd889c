//! Draft creation: New from scratch, or Copy/Edit of a master record

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::shared::store::{now, use_store};
use contracts::domain::common::{EntityKind, RequestType};
use contracts::shared::form::Record;
use contracts::shared::routing::AppRoute;
use leptos::prelude::*;
use thaw::*;

/// "C-10001 - PT Maju Jaya" style option label
fn source_label(record: &Record) -> String {
    let code = record.get("code").map(String::as_str).unwrap_or_default();
    match record.get("name").filter(|n| !n.is_empty()) {
        Some(name) => format!("{code} - {name}"),
        None => code.to_string(),
    }
}

#[component]
pub fn NewRequestPage(
    entity: EntityKind,
    request_type: RequestType,
    source: Option<String>,
) -> impl IntoView {
    let store = use_store();
    let ctx = use_app_context();
    let error = RwSignal::new(None::<String>);

    let entity_value = RwSignal::new(entity.slug().to_string());
    let type_value = RwSignal::new(request_type.as_str().to_string());
    let source_value = RwSignal::new(source.unwrap_or_default());

    let selected_entity = Memo::new(move |_| entity_value.with(|v| EntityKind::from_param(v)).unwrap_or(entity));
    let selected_type = Memo::new(move |_| type_value.with(|v| RequestType::from_param(v)).unwrap_or_default());
    let needs_source = Signal::derive(move || selected_type.get().needs_source());

    let sources = Memo::new(move |_| {
        let entity = selected_entity.get();
        store.store.with(|s| s.master_records(entity))
    });

    // a source from another entity is meaningless
    Effect::new(move |prev: Option<EntityKind>| {
        let current = selected_entity.get();
        if prev.is_some_and(|p| p != current) {
            source_value.set(String::new());
        }
        current
    });

    let create = move |_| {
        let entity = selected_entity.get_untracked();
        let request_type = selected_type.get_untracked();
        let source = source_value.get_untracked();
        let source = (request_type.needs_source() && !source.is_empty()).then_some(source);

        match store.mutate(|s| s.new_request(entity, request_type, source.as_deref(), now())) {
            Ok(id) => ctx.navigate(AppRoute::RequestView { id }),
            Err(e) => {
                log::warn!("request not created: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <PageFrame page_id="a004_request--detail" category=PageCategory::Detail>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("plus")}
                    <h1 class="page__title">"New Request"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctx.navigate(AppRoute::Requests { entity: Some(selected_entity.get_untracked()) })
                    >
                        "Cancel"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Card>
                <Flex vertical=true gap=FlexGap::Medium>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Entity"</Label>
                        <Select value=entity_value>
                            {EntityKind::ALL
                                .into_iter()
                                .map(|e| view! { <option value=e.slug()>{e.label()}</option> })
                                .collect_view()}
                        </Select>
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Request type"</Label>
                        <Select value=type_value>
                            {RequestType::ALL
                                .into_iter()
                                .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                                .collect_view()}
                        </Select>
                    </Flex>

                    <Show when=move || needs_source.get()>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>
                                "Source record " <span class="form__required">"*"</span>
                            </Label>
                            <Select value=source_value>
                                <option value="">"Select a record..."</option>
                                <For
                                    each=move || sources.get()
                                    key=|r| r.get("code").cloned().unwrap_or_default()
                                    children=move |r| {
                                        let code = r.get("code").cloned().unwrap_or_default();
                                        view! { <option value=code>{source_label(&r)}</option> }
                                    }
                                />
                            </Select>
                        </Flex>
                    </Show>

                    <div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || needs_source.get() && source_value.with(String::is_empty))
                            on_click=create
                        >
                            "Create Draft"
                        </Button>
                    </div>
                </Flex>
            </Card>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::form::record;

    #[test]
    fn test_source_label() {
        assert_eq!(
            source_label(&record(&[("code", "SP-30001"), ("name", "Brake Pad")])),
            "SP-30001 - Brake Pad"
        );
        assert_eq!(source_label(&record(&[("code", "SP-30001"), ("name", "")])), "SP-30001");
    }
}
