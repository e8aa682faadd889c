use crate::shared::icons::icon;
use leptos::prelude::*;

/// First / previous / "page of pages (count)" / next / last.
#[component]
pub fn PaginationControls(
    /// 0-based
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="First page"
                disabled=at_start
                on:click=move |_| on_page_change.run(0)
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Previous page"
                disabled=at_start
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get(),
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                title="Next page"
                disabled=at_end
                on:click=move |_| {
                    if !at_end() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Last page"
                disabled=at_end
                on:click=move |_| on_page_change.run(total_pages.get().saturating_sub(1))
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
