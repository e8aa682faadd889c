use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter block with an always-visible toolbar (pagination).
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,
    /// Shown as a badge next to the title when non-zero
    #[prop(into)]
    active_filters_count: Signal<usize>,
    #[prop(into)] toolbar: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    <span class="filter-panel__title">"Filters"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="filter-panel__badge">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">{toolbar.run()}</div>
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">{children()}</div>
            </Show>
        </div>
    }
}

/// Active-filter chip with a remove cross.
#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
