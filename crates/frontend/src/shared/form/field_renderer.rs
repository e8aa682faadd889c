use super::object_select_modal::open_object_select;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use contracts::shared::form::{render_field, FieldTable, FormErrors, FormState, RenderedField, Widget};
use leptos::prelude::*;

/// One visible field of a [`FieldTable`], re-evaluated whenever the form
/// values change. The caller mounts it only while the field is shown.
#[component]
pub fn FieldRenderer(
    table: &'static FieldTable,
    #[prop(into)] field_key: String,
    values: RwSignal<FormState>,
    #[prop(into)] editable: Signal<bool>,
    #[prop(into)] errors: Signal<FormErrors>,
) -> impl IntoView {
    let Some(field) = table.field(&field_key) else {
        log::warn!("field '{}' is not in the table", field_key);
        return ().into_any();
    };
    let modal = use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let rendered: Memo<Option<RenderedField>> =
        Memo::new(move |_| values.with(|v| render_field(field, v, editable.get())));
    let key = StoredValue::new(field_key);
    let error = move || errors.with(|e| key.with_value(|k| e.get(k).map(str::to_string)));
    let disabled = move || rendered.with(|r| r.as_ref().map_or(true, |r| r.disabled));
    let input_class = move || {
        rendered.with(|r| r.as_ref().map(RenderedField::input_class).unwrap_or("form__input"))
    };
    let on_edit = move |value: String| {
        values.update(|state| {
            key.with_value(|k| table.apply_change(state, k, value));
        });
    };

    let control = match rendered.get_untracked().map(|r| r.widget) {
        None => return ().into_any(),
        Some(Widget::Text { .. }) => view! {
            <input
                type="text"
                class=input_class
                prop:value=move || rendered.with(|r| match r.as_ref().map(|r| &r.widget) {
                    Some(Widget::Text { value }) => value.clone(),
                    _ => String::new(),
                })
                prop:readonly=disabled
                on:input=move |ev| on_edit(event_target_value(&ev))
            />
        }
        .into_any(),
        Some(Widget::Select { options, .. }) => view! {
            <select
                class=move || input_class().replace("form__input", "form__select")
                disabled=disabled
                prop:value=move || rendered.with(|r| match r.as_ref().map(|r| &r.widget) {
                    Some(Widget::Select { selected, .. }) => selected.clone(),
                    _ => String::new(),
                })
                on:change=move |ev| on_edit(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|o| view! { <option value=o.value>{o.label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        Some(Widget::ObjectDisplay { .. }) => {
            let clickable = move || rendered.with(|r| match r.as_ref().map(|r| &r.widget) {
                Some(Widget::ObjectDisplay { clickable, .. }) => *clickable,
                _ => false,
            });
            let open = move || {
                if clickable() {
                    key.with_value(|k| open_object_select(modal, table, k, values));
                }
            };
            view! {
                <div class="form__lookup" class:form__lookup--clickable=clickable on:click=move |_| open()>
                    <input
                        type="text"
                        class=input_class
                        readonly=true
                        placeholder=move || if clickable() { "Click to select..." } else { "" }
                        prop:value=move || rendered.with(|r| match r.as_ref().map(|r| &r.widget) {
                            Some(Widget::ObjectDisplay { text, .. }) => text.clone(),
                            _ => String::new(),
                        })
                    />
                    <Show when=clickable>
                        <span class="form__lookup-icon">{icon("search")}</span>
                    </Show>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="form__group" class:form__group--error=move || error().is_some()>
            <label class="form__label">
                {field.label.clone()}
                {field.required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {control}
            {move || error().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
    .into_any()
}
