//! In-memory data layer
//!
//! `MockStore` owns every record for the lifetime of the page. It is built
//! from explicit [`Fixtures`] and mutated only through its methods.

use crate::domain::a001_customer::{fixtures as customer_fixtures, Customer};
use crate::domain::a002_spare_part::{fixtures as spare_part_fixtures, SparePart};
use crate::domain::a003_finished_good::{fixtures as finished_good_fixtures, FinishedGood};
use crate::domain::a004_request::{fixtures as request_fixtures, RequestError, RequestRecord};
use crate::domain::a005_workflow::{fixtures as workflow_fixtures, WorkflowDefinition};
use crate::domain::a006_role::{fixtures as role_fixtures, Role, RoleRegistry};
use crate::domain::common::{prefill, EntityKind, MasterDataEntity, RequestType};
use crate::shared::approval::ApprovalTree;
use crate::shared::form::{FieldTable, FormErrors, FormState, Record, RequestForm};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Debug, Clone)]
pub struct Fixtures {
    pub current_user: String,
    pub customers: Vec<Customer>,
    pub spare_parts: Vec<SparePart>,
    pub finished_goods: Vec<FinishedGood>,
    pub requests: Vec<RequestRecord>,
    pub workflows: Vec<WorkflowDefinition>,
    pub roles: Vec<Role>,
}

impl Fixtures {
    /// Demo data set
    pub fn seed() -> Self {
        Self {
            current_user: "Rina Kusuma".to_string(),
            customers: customer_fixtures::customers(),
            spare_parts: spare_part_fixtures::spare_parts(),
            finished_goods: finished_good_fixtures::finished_goods(),
            requests: request_fixtures::requests(),
            workflows: workflow_fixtures::workflows(),
            roles: role_fixtures::roles(),
        }
    }
}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug, Clone)]
pub struct MockStore {
    current_user: String,
    customers: Vec<Customer>,
    spare_parts: Vec<SparePart>,
    finished_goods: Vec<FinishedGood>,
    requests: Vec<RequestRecord>,
    workflows: Vec<WorkflowDefinition>,
    roles: RoleRegistry,
    last_request_no: BTreeMap<EntityKind, u32>,
    last_workflow_id: u32,
}

/// Form and title for a Copy/Edit/New draft of `E`
fn draft_from<E: MasterDataEntity>(
    records: &[E],
    request_type: RequestType,
    source_code: Option<&str>,
) -> Result<(RequestForm, String), RequestError> {
    if request_type == RequestType::New {
        return Ok((RequestForm::default(), format!("New {}", E::element_name())));
    }
    let code = source_code.ok_or(RequestError::MissingSource(request_type))?;
    let source = records
        .iter()
        .find(|r| r.code() == code)
        .ok_or_else(|| RequestError::SourceNotFound(code.to_string()))?;
    let title = match request_type {
        RequestType::Copy => format!("Copy of {} - {}", source.code(), source.description()),
        _ => format!("Edit {} - {}", source.code(), source.description()),
    };
    Ok((prefill(request_type, Some(source)), title))
}

/// Highest `NNNN` among ids shaped `REQ-{TAG}-NNNN`
fn last_number(requests: &[RequestRecord], entity: EntityKind) -> u32 {
    let prefix = format!("REQ-{}-", entity.id_tag());
    requests
        .iter()
        .filter_map(|r| r.id.strip_prefix(&prefix))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

const IMPORT_TITLE_KEYS: [&str; 4] = ["productName", "organizationName", "mainCustomerName", "searchName"];

impl MockStore {
    pub fn new(fixtures: Fixtures) -> Self {
        let last_request_no = EntityKind::ALL
            .into_iter()
            .map(|e| (e, last_number(&fixtures.requests, e)))
            .collect();
        let last_workflow_id = fixtures.workflows.iter().map(|w| w.id).max().unwrap_or(0);

        Self {
            current_user: fixtures.current_user,
            customers: fixtures.customers,
            spare_parts: fixtures.spare_parts,
            finished_goods: fixtures.finished_goods,
            requests: fixtures.requests,
            workflows: fixtures.workflows,
            roles: RoleRegistry::new(fixtures.roles),
            last_request_no,
            last_workflow_id,
        }
    }

    pub fn current_user(&self) -> &str {
        &self.current_user
    }

    // ------------------------------------------------------------------------
    // Master data
    // ------------------------------------------------------------------------

    pub fn master_records(&self, entity: EntityKind) -> Vec<Record> {
        match entity {
            EntityKind::Customer => self.customers.iter().map(|c| c.lookup_record()).collect(),
            EntityKind::SpareParts => self.spare_parts.iter().map(|p| p.lookup_record()).collect(),
            EntityKind::FinishedGoods => self.finished_goods.iter().map(|g| g.lookup_record()).collect(),
        }
    }

    pub fn master_columns(entity: EntityKind) -> &'static [(&'static str, &'static str)] {
        match entity {
            EntityKind::Customer => Customer::list_columns(),
            EntityKind::SpareParts => SparePart::list_columns(),
            EntityKind::FinishedGoods => FinishedGood::list_columns(),
        }
    }

    pub fn field_table(entity: EntityKind) -> &'static FieldTable {
        match entity {
            EntityKind::Customer => Customer::field_table(),
            EntityKind::SpareParts => SparePart::field_table(),
            EntityKind::FinishedGoods => FinishedGood::field_table(),
        }
    }

    pub fn row_columns(entity: EntityKind) -> &'static [(&'static str, &'static str)] {
        match entity {
            EntityKind::Customer => Customer::row_columns(),
            EntityKind::SpareParts => SparePart::row_columns(),
            EntityKind::FinishedGoods => FinishedGood::row_columns(),
        }
    }

    // ------------------------------------------------------------------------
    // Requests
    // ------------------------------------------------------------------------

    pub fn requests(&self) -> &[RequestRecord] {
        &self.requests
    }

    pub fn request(&self, id: &str) -> Option<&RequestRecord> {
        self.requests.iter().find(|r| r.id == id)
    }

    fn request_mut(&mut self, id: &str) -> Result<&mut RequestRecord, RequestError> {
        self.requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RequestError::NotFound(id.to_string()))
    }

    fn next_request_id(&mut self, entity: EntityKind) -> String {
        let n = self.last_request_no.entry(entity).or_insert(0);
        *n += 1;
        format!("REQ-{}-{:04}", entity.id_tag(), n)
    }

    fn push_draft(
        &mut self,
        entity: EntityKind,
        request_type: RequestType,
        title: String,
        form: RequestForm,
        source_code: Option<&str>,
        now: DateTime<Utc>,
    ) -> String {
        let id = self.next_request_id(entity);
        let mut record = RequestRecord::new_draft(
            id.clone(),
            entity,
            request_type,
            title,
            &self.current_user,
            now,
        );
        record.form = form;
        record.source_code = source_code.map(str::to_string);
        // newest first
        self.requests.insert(0, record);
        id
    }

    /// Creates a Draft, pre-filled from `source_code` for Copy/Edit.
    pub fn new_request(
        &mut self,
        entity: EntityKind,
        request_type: RequestType,
        source_code: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<String, RequestError> {
        let (form, title) = match entity {
            EntityKind::Customer => draft_from(&self.customers, request_type, source_code)?,
            EntityKind::SpareParts => draft_from(&self.spare_parts, request_type, source_code)?,
            EntityKind::FinishedGoods => draft_from(&self.finished_goods, request_type, source_code)?,
        };
        let source_code = source_code.filter(|_| request_type.needs_source());
        let id = self.push_draft(entity, request_type, title, form, source_code, now);
        log::info!("created {} request {}", request_type, id);
        Ok(id)
    }

    pub fn save_draft(&mut self, id: &str, form: RequestForm) -> Result<(), RequestError> {
        let record = self.request_mut(id)?;
        if !record.is_editable() {
            return Err(RequestError::InvalidTransition {
                id: id.to_string(),
                from: record.status,
                action: "save",
            });
        }
        record.form = form;
        Ok(())
    }

    /// Validates the form, then attaches the matching workflow's tree.
    pub fn submit_request(&mut self, id: &str) -> Result<(), RequestError> {
        let (entity, request_type, errors) = {
            let record = self.request(id).ok_or_else(|| RequestError::NotFound(id.to_string()))?;
            let entity = record.entity_kind();
            let errors = Self::field_table(entity).validate(&record.form.values);
            (entity, record.request_type, errors)
        };
        if !errors.is_empty() {
            return Err(RequestError::Validation(errors));
        }

        let (tree, workflow_name) = match self.find_workflow(entity, request_type) {
            Some(wf) => (wf.to_approval_tree(), Some(wf.name.clone())),
            None => {
                log::warn!("no active workflow for {} {}", entity, request_type);
                (ApprovalTree::default(), None)
            }
        };
        self.request_mut(id)?.submit(tree, workflow_name)?;
        log::info!("submitted request {}", id);
        Ok(())
    }

    pub fn approve_request(&mut self, id: &str, now: DateTime<Utc>) -> Result<(), RequestError> {
        self.request_mut(id)?.approve(now)
    }

    pub fn reject_request(&mut self, id: &str, reason: &str, now: DateTime<Utc>) -> Result<(), RequestError> {
        self.request_mut(id)?.reject(reason, now)
    }

    pub fn sync_request(&mut self, id: &str) -> Result<(), RequestError> {
        self.request_mut(id)?.sync()
    }

    pub fn cancel_request(&mut self, id: &str) -> Result<(), RequestError> {
        self.request_mut(id)?.cancel()
    }

    /// Approves every id; returns how many succeeded.
    pub fn approve_many(&mut self, ids: &[String], now: DateTime<Utc>) -> usize {
        ids.iter()
            .filter(|id| match self.approve_request(id, now) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("mass approve: {}", e);
                    false
                }
            })
            .count()
    }

    pub fn reject_many(&mut self, ids: &[String], reason: &str, now: DateTime<Utc>) -> Result<usize, RequestError> {
        if reason.trim().is_empty() {
            return Err(RequestError::ReasonRequired);
        }
        Ok(ids
            .iter()
            .filter(|id| match self.reject_request(id, reason, now) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("mass reject: {}", e);
                    false
                }
            })
            .count())
    }

    /// One New draft per imported row; returns the new ids in file order.
    pub fn import_rows(&mut self, entity: EntityKind, rows: Vec<FormState>, now: DateTime<Utc>) -> Vec<String> {
        let mut ids = Vec::with_capacity(rows.len());
        for (idx, values) in rows.into_iter().enumerate() {
            let name = IMPORT_TITLE_KEYS
                .iter()
                .find_map(|k| values.text(k).filter(|v| !v.trim().is_empty()))
                .map(str::to_string)
                .unwrap_or_else(|| format!("row {}", idx + 1));
            let title = format!("Import {} - {}", entity.label(), name);
            let form = RequestForm {
                values,
                rows: Vec::new(),
            };
            ids.push(self.push_draft(entity, RequestType::New, title, form, None, now));
        }
        log::info!("imported {} {} request(s)", ids.len(), entity);
        ids
    }

    // ------------------------------------------------------------------------
    // Workflows
    // ------------------------------------------------------------------------

    pub fn workflows(&self) -> &[WorkflowDefinition] {
        &self.workflows
    }

    pub fn workflow(&self, id: u32) -> Option<&WorkflowDefinition> {
        self.workflows.iter().find(|w| w.id == id)
    }

    /// Inserts (id 0) or replaces; returns the stored id.
    pub fn save_workflow(&mut self, mut workflow: WorkflowDefinition) -> Result<u32, FormErrors> {
        let mut errors = workflow.validate();
        let name = workflow.name.trim();
        if !name.is_empty()
            && self
                .workflows
                .iter()
                .any(|w| w.id != workflow.id && w.name.trim().eq_ignore_ascii_case(name))
        {
            errors.insert("name", format!("Workflow '{}' already exists", name));
        }
        errors.into_result()?;

        workflow.name = workflow.name.trim().to_string();
        if workflow.is_new() {
            self.last_workflow_id += 1;
            workflow.id = self.last_workflow_id;
            let id = workflow.id;
            self.workflows.push(workflow);
            return Ok(id);
        }

        let id = workflow.id;
        match self.workflows.iter_mut().find(|w| w.id == id) {
            Some(existing) => *existing = workflow,
            None => self.workflows.push(workflow),
        }
        Ok(id)
    }

    pub fn delete_workflow(&mut self, id: u32) -> bool {
        let before = self.workflows.len();
        self.workflows.retain(|w| w.id != id);
        self.workflows.len() != before
    }

    /// Active workflow for the entity and request type, else the first
    /// active one for the entity.
    pub fn find_workflow(&self, entity: EntityKind, request_type: RequestType) -> Option<&WorkflowDefinition> {
        let active = || self.workflows.iter().filter(move |w| w.is_active && w.entity == entity);
        active()
            .find(|w| w.request_type == request_type)
            .or_else(|| active().next())
    }

    // ------------------------------------------------------------------------
    // Roles
    // ------------------------------------------------------------------------

    pub fn roles(&self) -> &RoleRegistry {
        &self.roles
    }

    pub fn roles_mut(&mut self) -> &mut RoleRegistry {
        &mut self.roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_request::aggregate::{STEP_CANCELLED, STEP_COMPLETED, STEP_WAITING_FOR_APPROVE};
    use crate::domain::a004_request::RequestStatus;
    use crate::domain::a005_workflow::Approver;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn store() -> MockStore {
        MockStore::new(Fixtures::seed())
    }

    fn fill_customer(form: &mut FormState) {
        for (k, v) in [
            ("mainCustomer", "MC-0001"),
            ("searchName", "NEW CO"),
            ("customerGroup", "LOC_INT"),
            ("customerAccount", "1200-0999"),
            ("customerType", "Organization"),
            ("organizationName", "PT New Co"),
            ("primaryEmail", "ap@newco.id"),
            ("currency", "IDR"),
        ] {
            form.set_text(k, v);
        }
    }

    #[test]
    fn test_new_request_ids_continue_from_fixtures() {
        let mut store = store();
        let id = store
            .new_request(EntityKind::Customer, RequestType::New, None, now())
            .unwrap();
        assert_eq!(id, "REQ-CUST-0004");
        let id = store
            .new_request(EntityKind::SpareParts, RequestType::New, None, now())
            .unwrap();
        assert_eq!(id, "REQ-SPARE-0003");

        let record = store.request(&id).unwrap();
        assert_eq!(record.status, RequestStatus::Draft);
        assert_eq!(record.current_steps, "Waiting for Entry");
        assert_eq!(record.entity, Some(EntityKind::SpareParts));
        assert_eq!(record.step_owner, "Rina Kusuma");
        assert_eq!(store.requests()[0].id, id, "newest first");
    }

    #[test]
    fn test_copy_and_edit_need_a_source() {
        let mut store = store();
        assert_eq!(
            store.new_request(EntityKind::Customer, RequestType::Copy, None, now()),
            Err(RequestError::MissingSource(RequestType::Copy))
        );
        assert_eq!(
            store.new_request(EntityKind::Customer, RequestType::Edit, Some("C-99999"), now()),
            Err(RequestError::SourceNotFound("C-99999".into()))
        );

        let id = store
            .new_request(EntityKind::Customer, RequestType::Copy, Some("C-10001"), now())
            .unwrap();
        let record = store.request(&id).unwrap();
        assert_eq!(record.request_title, "Copy of C-10001 - PT Sinar Jaya Abadi");
        assert_eq!(record.source_code.as_deref(), Some("C-10001"));
        assert!(record.form.values.is_blank("primaryEmail"));
        assert!(!record.form.values.is_blank("searchName"));
    }

    #[test]
    fn test_submit_validates_then_attaches_workflow() {
        let mut store = store();
        let id = store
            .new_request(EntityKind::Customer, RequestType::New, None, now())
            .unwrap();

        match store.submit_request(&id) {
            Err(RequestError::Validation(errors)) => {
                assert!(errors.get("primaryEmail").is_some());
                assert!(errors.get("firstName").is_none());
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        let mut form = store.request(&id).unwrap().form.clone();
        fill_customer(&mut form.values);
        store.save_draft(&id, form).unwrap();
        store.submit_request(&id).unwrap();

        let record = store.request(&id).unwrap();
        assert_eq!(record.status, RequestStatus::Pending);
        assert_eq!(record.current_steps, STEP_WAITING_FOR_APPROVE);
        assert_eq!(record.workflow_name.as_deref(), Some("ID Customer Standard"));
        assert_eq!(record.approval_tree.steps.len(), 2);

        assert!(store.save_draft(&id, RequestForm::default()).is_err());

        store.approve_request(&id, now()).unwrap();
        store.approve_request(&id, now()).unwrap();
        let record = store.request(&id).unwrap();
        assert_eq!(record.status, RequestStatus::Approved);
        assert_eq!(record.current_steps, STEP_COMPLETED);

        store.sync_request(&id).unwrap();
        assert_eq!(store.request(&id).unwrap().status, RequestStatus::Synced);
    }

    #[test]
    fn test_cancel_and_reject() {
        let mut store = store();
        store.cancel_request("REQ-CUST-0002").unwrap();
        assert_eq!(store.request("REQ-CUST-0002").unwrap().current_steps, STEP_CANCELLED);

        assert_eq!(
            store.reject_request("REQ-SPARE-0001", "", now()),
            Err(RequestError::ReasonRequired)
        );
        store.reject_request("REQ-SPARE-0001", "Duplicate item", now()).unwrap();
        assert_eq!(
            store.request("REQ-SPARE-0001").unwrap().status,
            RequestStatus::Rejected
        );
        assert_eq!(
            store.cancel_request("REQ-NOPE"),
            Err(RequestError::NotFound("REQ-NOPE".into()))
        );
    }

    #[test]
    fn test_mass_actions() {
        let mut store = store();
        let ids = vec!["REQ-CUST-0001".to_string(), "REQ-CUST-0002".to_string()];
        assert_eq!(store.approve_many(&ids, now()), 1, "the draft cannot be approved");
        assert!(store.reject_many(&ids, " ", now()).is_err());
        assert_eq!(store.reject_many(&ids, "Out of scope", now()), Ok(1));
    }

    #[test]
    fn test_import_rows_create_drafts() {
        let mut store = store();
        let mut a = FormState::new();
        a.set_text("productName", "Timing Belt T10");
        let b = FormState::new();

        let ids = store.import_rows(EntityKind::SpareParts, vec![a, b], now());
        assert_eq!(ids, vec!["REQ-SPARE-0003".to_string(), "REQ-SPARE-0004".to_string()]);
        assert_eq!(
            store.request(&ids[0]).unwrap().request_title,
            "Import Spare Parts - Timing Belt T10"
        );
        assert_eq!(
            store.request(&ids[1]).unwrap().request_title,
            "Import Spare Parts - row 2"
        );
    }

    #[test]
    fn test_workflow_save_rules() {
        let mut store = store();
        let mut wf = WorkflowDefinition::new("Vietnam", EntityKind::SpareParts);
        wf.name = "spare parts standard".into();
        let s = wf.add_step();
        wf.add_approver(s, Approver::new("Linh Nguyen", "Data Steward"));

        let errors = store.save_workflow(wf.clone()).unwrap_err();
        assert!(errors.get("name").unwrap().contains("already exists"));

        wf.name = "VN Spare Parts".into();
        let id = store.save_workflow(wf).unwrap();
        assert_eq!(id, 6);

        let mut saved = store.workflow(id).unwrap().clone();
        saved.is_active = false;
        assert_eq!(store.save_workflow(saved), Ok(id));
        assert!(!store.workflow(id).unwrap().is_active);

        assert!(store.delete_workflow(id));
        assert!(!store.delete_workflow(id));
    }

    #[test]
    fn test_find_workflow_fallback() {
        let store = store();
        let exact = store.find_workflow(EntityKind::Customer, RequestType::Copy).unwrap();
        assert_eq!(exact.name, "VN Customer Onboarding");
        let fallback = store.find_workflow(EntityKind::Customer, RequestType::Edit).unwrap();
        assert_eq!(fallback.name, "ID Customer Standard", "inactive workflows are skipped");
    }

    #[test]
    fn test_master_records() {
        let store = store();
        let records = store.master_records(EntityKind::FinishedGoods);
        assert_eq!(records.len(), 3);
        for (key, _) in MockStore::master_columns(EntityKind::FinishedGoods) {
            assert!(records[0].contains_key(*key), "{key}");
        }
    }
}
