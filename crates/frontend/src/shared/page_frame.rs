//! Root wrapper for every routed page.

use super::page_standard::{is_valid_page_id, PageCategory};
use leptos::prelude::*;

/// Sets `id`, the category class and `data-page-category` on the page root.
#[component]
pub fn PageFrame(
    /// `{area}--{category}`, e.g. `"a004_request--list"`
    page_id: &'static str,
    category: PageCategory,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("page id '{}' does not follow '{{area}}--{{category}}'", page_id);
    }

    view! {
        <div id=page_id class=category.root_class() data-page-category=category.as_str()>
            {children()}
        </div>
    }
}
