//! Top bar: navigation toggle, application title, current page, user.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::store::use_store;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_store();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Master Data Portal"</span>
                <span class="top-header__page">{move || ctx.route.with(|r| r.title())}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || store.store.with(|s| s.current_user().to_string())}</span>
                </div>
            </div>
        </div>
    }
}
