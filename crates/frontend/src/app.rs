use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::store::StoreContext;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(AppGlobalContext::new(&config.ui.default_route));
    provide_context(ModalStackService::new());
    provide_context(StoreContext::new(config));

    view! {
        <AppRoutes />
        <ModalHost />
    }
}
