use crate::layout::global_context::use_app_context;
use crate::shared::components::confirm_dialog::open_confirm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::shared::store::use_store;
use contracts::domain::a005_workflow::{WorkflowDefinition, COUNTRIES};
use contracts::domain::common::EntityKind;
use contracts::shared::confirm::{ConfirmAction, ConfirmKind};
use contracts::shared::routing::AppRoute;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn WorkflowList() -> impl IntoView {
    let store = use_store();
    let ctx = use_app_context();
    let modal = use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let country = RwSignal::new(String::new());
    let workflows = Memo::new(move |_| {
        let country = country.get();
        store.store.with(|s| {
            s.workflows()
                .iter()
                .filter(|w| country.is_empty() || w.country == country)
                .cloned()
                .collect::<Vec<WorkflowDefinition>>()
        })
    });

    let open_new = move |_| {
        let country = country.get_untracked();
        ctx.navigate(AppRoute::WorkflowEdit {
            id: None,
            country: if country.is_empty() { COUNTRIES[0].to_string() } else { country },
            entity: EntityKind::Customer,
        })
    };

    let confirm_delete = move |id: u32, name: String| {
        let action = ConfirmAction::for_kind(ConfirmKind::DeleteWorkflow, &name, 1);
        open_confirm(
            modal,
            action,
            Callback::new(move |_| {
                if store.mutate(|s| s.delete_workflow(id)) {
                    log::info!("workflow {} deleted", id);
                }
            }),
        );
    };

    view! {
        <PageFrame page_id="a005_workflow--list" category=PageCategory::Admin>
            <PageHeader title="Workflows".to_string() count=Signal::derive(move || workflows.with(Vec::len))>
                <Button appearance=ButtonAppearance::Primary on_click=open_new>
                    {icon("plus")}
                    " New Workflow"
                </Button>
            </PageHeader>

            <div class="page__toolbar">
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <Label>"Country"</Label>
                    <Select value=country>
                        <option value="">"All countries"</option>
                        {COUNTRIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                    </Select>
                </Flex>
            </div>

            <div class="page-content">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=240.0>"Name"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=110.0>"Country"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=120.0>"Entity"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=90.0>"Type"</TableHeaderCell>
                            <TableHeaderCell min_width=70.0>"Steps"</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                            <TableHeaderCell min_width=170.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || workflows.get()
                            key=|w| (w.id, w.name.clone(), w.is_active, w.steps.len())
                            children=move |w| {
                                let id = w.id;
                                let name = w.name.clone();
                                let country = w.country.clone();
                                let entity = w.entity;
                                view! {
                                    <TableRow>
                                        <TableCell>{w.name.clone()}</TableCell>
                                        <TableCell>{w.country.clone()}</TableCell>
                                        <TableCell>{w.entity.label()}</TableCell>
                                        <TableCell>{w.request_type.as_str()}</TableCell>
                                        <TableCell>{w.steps.len().to_string()}</TableCell>
                                        <TableCell>
                                            {if w.is_active {
                                                view! { <Badge variant="success".to_string()>"Active"</Badge> }.into_any()
                                            } else {
                                                view! { <Badge>"Inactive"</Badge> }.into_any()
                                            }}
                                        </TableCell>
                                        <TableCell>
                                            <Flex gap=FlexGap::Small>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Secondary
                                                    on_click=move |_| ctx.navigate(AppRoute::WorkflowEdit {
                                                        id: Some(id),
                                                        country: country.clone(),
                                                        entity,
                                                    })
                                                >
                                                    {icon("edit")}
                                                    " Edit"
                                                </Button>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| confirm_delete(id, name.clone())
                                                >
                                                    {icon("delete")}
                                                    " Delete"
                                                </Button>
                                            </Flex>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                <Show when=move || workflows.with(Vec::is_empty)>
                    <div class="table__empty">"No data found"</div>
                </Show>
            </div>
        </PageFrame>
    }
}
