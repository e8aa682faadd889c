//! Seed requests covering every status

use super::aggregate::*;
use crate::domain::a001_customer::fixtures::customers;
use crate::domain::a003_finished_good::fixtures::finished_goods;
use crate::domain::common::{prefill, EntityKind, RequestType};
use crate::shared::approval::{ApprovalStep, ApprovalTree, Owner};
use crate::shared::form::{FormState, RequestForm};
use chrono::{DateTime, TimeZone, Utc};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

fn values(pairs: &[(&str, &str)]) -> RequestForm {
    let mut state = FormState::new();
    for (k, v) in pairs {
        state.set_text(k, *v);
    }
    RequestForm {
        values: state,
        rows: Vec::new(),
    }
}

fn step(name: &str, owners: Vec<Owner>, parallel: bool, sla_hours: Option<u32>) -> ApprovalStep {
    ApprovalStep {
        step_name: name.to_string(),
        owners,
        parallel,
        sla_hours,
    }
}

fn approved(name: &str, title: &str, when: DateTime<Utc>) -> Owner {
    let mut owner = Owner::waiting(name, title);
    owner.approve(when);
    owner
}

fn base(
    id: &str,
    entity: Option<EntityKind>,
    request_type: RequestType,
    title: &str,
    created: DateTime<Utc>,
) -> RequestRecord {
    let mut record = RequestRecord::new_draft(
        id.to_string(),
        entity.unwrap_or(EntityKind::Customer),
        request_type,
        title.to_string(),
        "Rina Kusuma",
        created,
    );
    record.entity = entity;
    record
}

pub fn requests() -> Vec<RequestRecord> {
    let source_customers = customers();
    let source_goods = finished_goods();

    // Pending, first step waiting
    let mut r1 = base(
        "REQ-CUST-0001",
        Some(EntityKind::Customer),
        RequestType::New,
        "New Customer - PT Sentosa Makmur",
        at(2024, 1, 15, 8, 30),
    );
    r1.form = values(&[
        ("mainCustomer", "MC-0003"),
        ("mainCustomerCode", "MC-0003"),
        ("mainCustomerName", "CV Makmur Sentosa"),
        ("company", "ID01"),
        ("searchName", "SENTOSA MAKMUR"),
        ("customerGroup", "LOC_INT"),
        ("customerAccount", "1200-0188"),
        ("customerType", "Organization"),
        ("organizationName", "PT Sentosa Makmur"),
        ("primaryEmail", "finance@sentosamakmur.co.id"),
        ("currency", "IDR"),
    ]);
    r1.status = RequestStatus::Pending;
    r1.current_steps = STEP_WAITING_FOR_APPROVE.to_string();
    r1.step_owner = "Linh Nguyen".to_string();
    r1.workflow_name = Some("ID Customer Standard".to_string());
    r1.approval_tree = ApprovalTree::new(vec![
        step("Data Steward Review", vec![Owner::waiting("Linh Nguyen", "Data Steward")], false, Some(24)),
        step(
            "Finance Approval",
            vec![
                Owner::waiting("Budi Santoso", "Finance Manager"),
                Owner::waiting("Ana Wijaya", "Credit Controller"),
            ],
            true,
            Some(48),
        ),
    ]);

    // Draft copy
    let mut r2 = base(
        "REQ-CUST-0002",
        Some(EntityKind::Customer),
        RequestType::Copy,
        "Copy of C-10001 - PT Sinar Jaya Abadi",
        at(2024, 1, 18, 14, 5),
    );
    r2.source_code = Some("C-10001".to_string());
    r2.form = prefill(RequestType::Copy, source_customers.first());

    // Pending, first step approved
    let mut r3 = base(
        "REQ-SPARE-0001",
        Some(EntityKind::SpareParts),
        RequestType::New,
        "New Spare Part - Gear Oil Filter",
        at(2024, 1, 20, 9, 0),
    );
    r3.form = values(&[
        ("itemNumber", "SP-30010"),
        ("productName", "Gear Oil Filter GF-22"),
        ("itemGroup", "Filters"),
        ("unit", "PCS"),
        ("currency", "IDR"),
    ]);
    r3.status = RequestStatus::Pending;
    r3.current_steps = STEP_WAITING_FOR_APPROVE.to_string();
    r3.step_owner = "Tran Minh Duc".to_string();
    r3.workflow_name = Some("Spare Parts Standard".to_string());
    r3.approval_tree = ApprovalTree::new(vec![
        step(
            "Data Steward Review",
            vec![approved("Linh Nguyen", "Data Steward", at(2024, 1, 21, 9, 30))],
            false,
            Some(24),
        ),
        step(
            "Supply Chain Approval",
            vec![Owner::waiting("Tran Minh Duc", "Supply Chain Head")],
            false,
            None,
        ),
    ]);

    // Approved edit
    let mut r4 = base(
        "REQ-FINISHED-0001",
        Some(EntityKind::FinishedGoods),
        RequestType::Edit,
        "Edit FG-50001 - Green Tea 500ml",
        at(2024, 2, 2, 11, 15),
    );
    r4.source_code = Some("FG-50001".to_string());
    r4.form = prefill(RequestType::Edit, source_goods.first());
    r4.status = RequestStatus::Approved;
    r4.current_steps = STEP_COMPLETED.to_string();
    r4.step_owner = "Budi Santoso".to_string();
    r4.workflow_name = Some("Finished Goods Change".to_string());
    r4.approval_tree = ApprovalTree::new(vec![
        step(
            "Brand Manager Review",
            vec![approved("Ana Wijaya", "Brand Manager", at(2024, 2, 3, 8, 45))],
            false,
            Some(24),
        ),
        step(
            "Finance Approval",
            vec![approved("Budi Santoso", "Finance Manager", at(2024, 2, 5, 16, 20))],
            false,
            Some(48),
        ),
    ]);

    // Rejected edit
    let mut r5 = base(
        "REQ-CUST-0003",
        Some(EntityKind::Customer),
        RequestType::Edit,
        "Edit C-10002 - Saigon Trading Co., Ltd",
        at(2024, 2, 10, 3, 40),
    );
    r5.source_code = Some("C-10002".to_string());
    r5.form = prefill(RequestType::Edit, source_customers.get(1));
    r5.status = RequestStatus::Rejected;
    r5.current_steps = STEP_REJECTED.to_string();
    r5.step_owner = "Linh Nguyen".to_string();
    let mut rejecting = Owner::waiting("Linh Nguyen", "Data Steward");
    rejecting.reject("Tax exempt certificate expired", at(2024, 2, 11, 10, 0));
    r5.approval_tree = ApprovalTree::new(vec![
        step("Data Steward Review", vec![rejecting], false, Some(24)),
        step("Finance Approval", vec![Owner::waiting("Budi Santoso", "Finance Manager")], false, None),
    ]);

    // Synced copy
    let mut r6 = base(
        "REQ-SPARE-0002",
        Some(EntityKind::SpareParts),
        RequestType::Copy,
        "Copy of SP-30001 - Deep Groove Ball Bearing 6204",
        at(2023, 12, 4, 7, 10),
    );
    r6.source_code = Some("SP-30001".to_string());
    r6.status = RequestStatus::Synced;
    r6.current_steps = STEP_SYNCED.to_string();
    r6.step_owner = "Tran Minh Duc".to_string();
    r6.approval_tree = ApprovalTree::new(vec![step(
        "Supply Chain Approval",
        vec![approved("Tran Minh Duc", "Supply Chain Head", at(2023, 12, 5, 9, 0))],
        false,
        None,
    )]);

    // Legacy record without entity tag
    let mut r7 = base(
        "REQ-2023-0107",
        None,
        RequestType::New,
        "New Customer - Hanoi Industrial JSC",
        at(2023, 11, 20, 2, 0),
    );
    r7.status = RequestStatus::Synced;
    r7.current_steps = STEP_SYNCED.to_string();
    r7.step_owner = "Linh Nguyen".to_string();

    // Pending without workflow name
    let mut r8 = base(
        "REQ-FINISHED-0002",
        Some(EntityKind::FinishedGoods),
        RequestType::New,
        "New Finished Good - Mango Juice 250ml",
        at(2024, 2, 14, 6, 55),
    );
    r8.form = values(&[
        ("itemNumber", "FG-50010"),
        ("productName", "Mango Juice 250ml"),
        ("productCategory", "Beverages"),
        ("unit", "CTN"),
        ("exported", "no"),
        ("currency", "IDR"),
    ]);
    r8.status = RequestStatus::Pending;
    r8.current_steps = STEP_WAITING_FOR_APPROVE.to_string();
    r8.step_owner = "Ana Wijaya".to_string();
    r8.approval_tree = ApprovalTree::new(vec![step(
        "Brand Manager Review",
        vec![Owner::waiting("Ana Wijaya", "Brand Manager")],
        false,
        Some(24),
    )]);

    vec![r1, r2, r3, r4, r5, r6, r7, r8]
}
