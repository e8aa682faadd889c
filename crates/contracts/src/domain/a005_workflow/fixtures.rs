use super::aggregate::{Approver, WorkflowDefinition, WorkflowStepDefinition};
use crate::domain::common::{EntityKind, RequestType};

fn step(name: &str, approvers: &[(&str, &str)], parallel: bool, sla_hours: Option<u32>) -> WorkflowStepDefinition {
    WorkflowStepDefinition {
        step_name: name.to_string(),
        approvers: approvers.iter().map(|(n, t)| Approver::new(n, t)).collect(),
        parallel,
        sla_hours,
    }
}

fn workflow(
    id: u32,
    name: &str,
    country: &str,
    entity: EntityKind,
    request_type: RequestType,
    is_active: bool,
    steps: Vec<WorkflowStepDefinition>,
) -> WorkflowDefinition {
    WorkflowDefinition {
        id,
        name: name.to_string(),
        country: country.to_string(),
        entity,
        request_type,
        is_active,
        steps,
    }
}

pub fn workflows() -> Vec<WorkflowDefinition> {
    let steward = ("Linh Nguyen", "Data Steward");
    let finance = [("Budi Santoso", "Finance Manager"), ("Ana Wijaya", "Credit Controller")];

    vec![
        workflow(
            1,
            "ID Customer Standard",
            "Indonesia",
            EntityKind::Customer,
            RequestType::New,
            true,
            vec![
                step("Data Steward Review", &[steward], false, Some(24)),
                step("Finance Approval", &finance, true, Some(48)),
            ],
        ),
        workflow(
            2,
            "VN Customer Onboarding",
            "Vietnam",
            EntityKind::Customer,
            RequestType::Copy,
            true,
            vec![
                step("Data Steward Review", &[steward], false, Some(24)),
                step("Sales Director Approval", &[("Tran Minh Duc", "Sales Director")], false, Some(72)),
            ],
        ),
        workflow(
            3,
            "Spare Parts Standard",
            "Indonesia",
            EntityKind::SpareParts,
            RequestType::New,
            true,
            vec![
                step("Data Steward Review", &[steward], false, Some(24)),
                step("Supply Chain Approval", &[("Tran Minh Duc", "Supply Chain Head")], false, None),
            ],
        ),
        workflow(
            4,
            "Finished Goods Change",
            "Indonesia",
            EntityKind::FinishedGoods,
            RequestType::Edit,
            true,
            vec![
                step("Brand Manager Review", &[("Ana Wijaya", "Brand Manager")], false, Some(24)),
                step("Finance Approval", &[finance[0]], false, Some(48)),
            ],
        ),
        workflow(
            5,
            "Legacy Customer Edit",
            "Thailand",
            EntityKind::Customer,
            RequestType::Edit,
            false,
            vec![step("Manager Approval", &[("Somchai Prasert", "Country Manager")], false, None)],
        ),
    ]
}
