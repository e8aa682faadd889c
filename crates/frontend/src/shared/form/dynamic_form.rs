use super::field_renderer::FieldRenderer;
use contracts::shared::form::{should_show, FieldTable, FormErrors, FormState, Section};
use leptos::prelude::*;

/// Renders every section of `table` as a fieldset. Only the visible key
/// list is tracked at this level, so typing never re-creates inputs.
#[component]
pub fn DynamicForm(
    table: &'static FieldTable,
    values: RwSignal<FormState>,
    #[prop(into)] editable: Signal<bool>,
    #[prop(into)] errors: Signal<FormErrors>,
    /// Limit to these sections; all when empty
    #[prop(optional)]
    sections: Vec<Section>,
) -> impl IntoView {
    let sections: Vec<Section> = table
        .sections()
        .into_iter()
        .filter(|s| sections.is_empty() || sections.contains(s))
        .collect();

    sections
        .into_iter()
        .map(|section| {
            let visible_keys = Memo::new(move |_| {
                values.with(|v| {
                    table
                        .in_section(section)
                        .filter(|f| should_show(f, v))
                        .map(|f| f.key.clone())
                        .collect::<Vec<_>>()
                })
            });
            view! {
                <fieldset class="form__section">
                    <legend class="form__section-title">{section.title()}</legend>
                    <div class="form__grid">
                        <For
                            each=move || visible_keys.get()
                            key=|k| k.clone()
                            children=move |k| {
                                view! {
                                    <FieldRenderer
                                        table=table
                                        field_key=k
                                        values=values
                                        editable=editable
                                        errors=errors
                                    />
                                }
                            }
                        />
                    </div>
                </fieldset>
            }
        })
        .collect_view()
}
