use crate::domain::a004_request::ui::approvals::ApprovalQueue;
use crate::domain::a004_request::ui::details::RequestDetails;
use crate::domain::a004_request::ui::list::RequestList;
use crate::domain::a004_request::ui::new_request::NewRequestPage;
use crate::domain::a005_workflow::ui::editor::WorkflowEditor;
use crate::domain::a005_workflow::ui::list::WorkflowList;
use crate::domain::a006_role::ui::list::RoleList;
use crate::domain::master_data::ui::list::MasterDataList;
use crate::layout::global_context::use_app_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use contracts::shared::routing::AppRoute;
use leptos::prelude::*;

/// Page for the current route. Re-runs only when the route changes.
fn page_for(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Requests { entity } => view! { <RequestList entity=entity /> }.into_any(),
        AppRoute::RequestNew {
            entity,
            request_type,
            source,
        } => view! { <NewRequestPage entity=entity request_type=request_type source=source /> }.into_any(),
        AppRoute::RequestView { id } => view! { <RequestDetails id=id /> }.into_any(),
        AppRoute::Approvals => view! { <ApprovalQueue /> }.into_any(),
        AppRoute::MasterData { entity } => view! { <MasterDataList entity=entity /> }.into_any(),
        AppRoute::Workflows => view! { <WorkflowList /> }.into_any(),
        AppRoute::WorkflowEdit { id, country, entity } => {
            view! { <WorkflowEditor id=id country=country entity=entity /> }.into_any()
        }
        AppRoute::Roles => view! { <RoleList /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();
    ctx.init_router_integration();

    let route = Memo::new(move |_| ctx.route.get());

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || (move || page_for(route.get())).into_any()
        />
    }
}
