use crate::shared::components::ui::Badge;
use leptos::prelude::*;

/// Title row of a page; children are the action buttons.
#[component]
pub fn PageHeader(
    #[prop(into)] title: Signal<String>,
    /// Record count badge next to the title
    #[prop(optional, into)]
    count: MaybeProp<usize>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{move || title.get()}</h1>
                {move || count.get().map(|n| view! { <Badge variant="primary".to_string()>{n.to_string()}</Badge> })}
            </div>
            <div class="page__header-right">{children()}</div>
        </div>
    }
}
