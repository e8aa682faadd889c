use crate::domain::common::{EntityKind, RequestType};
use crate::shared::approval::ApprovalTree;
use crate::shared::form::{FormErrors, RequestForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Step labels
// ============================================================================

pub const STEP_WAITING_FOR_ENTRY: &str = "Waiting for Entry";
pub const STEP_WAITING_FOR_APPROVE: &str = "Waiting for Approve";
pub const STEP_COMPLETED: &str = "Completed";
pub const STEP_REJECTED: &str = "Rejected";
pub const STEP_CANCELLED: &str = "Cancelled";
pub const STEP_SYNCED: &str = "Synced";

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Draft,
    Pending,
    Approved,
    Rejected,
    Synced,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 5] = [
        RequestStatus::Draft,
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
        RequestStatus::Synced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Synced => "Synced",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            Self::Draft => "neutral",
            Self::Pending => "warning",
            Self::Approved => "success",
            Self::Rejected => "error",
            Self::Synced => "primary",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::Synced)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("request '{0}' not found")]
    NotFound(String),
    #[error("cannot {action} request '{id}' in status {from}")]
    InvalidTransition {
        id: String,
        from: RequestStatus,
        action: &'static str,
    },
    #[error("a reason is required to reject")]
    ReasonRequired,
    #[error("form is invalid: {0}")]
    Validation(FormErrors),
    #[error("{0} requests need a source record")]
    MissingSource(RequestType),
    #[error("source record '{0}' not found")]
    SourceNotFound(String),
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    pub id: String,
    pub request_type: RequestType,
    /// Older records carry no tag; see [`RequestRecord::entity_kind`]
    #[serde(default)]
    pub entity: Option<EntityKind>,
    pub request_title: String,
    pub step_owner: String,
    pub current_steps: String,
    pub status: RequestStatus,
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub workflow_name: Option<String>,
    #[serde(default)]
    pub source_code: Option<String>,
    #[serde(default)]
    pub form: RequestForm,
    #[serde(default)]
    pub approval_tree: ApprovalTree,
}

impl RequestRecord {
    /// Fresh draft waiting for data entry
    pub fn new_draft(
        id: String,
        entity: EntityKind,
        request_type: RequestType,
        request_title: String,
        owner: &str,
        created_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            request_type,
            entity: Some(entity),
            request_title,
            step_owner: owner.to_string(),
            current_steps: STEP_WAITING_FOR_ENTRY.to_string(),
            status: RequestStatus::Draft,
            created_date,
            workflow_name: None,
            source_code: None,
            form: RequestForm::default(),
            approval_tree: ApprovalTree::default(),
        }
    }

    pub fn entity_kind(&self) -> EntityKind {
        EntityKind::infer(&self.id, self.entity)
    }

    pub fn is_editable(&self) -> bool {
        self.status == RequestStatus::Draft
    }

    pub fn can_cancel(&self) -> bool {
        matches!(self.status, RequestStatus::Draft | RequestStatus::Pending)
    }

    fn ensure(&self, expected: &[RequestStatus], action: &'static str) -> Result<(), RequestError> {
        if expected.contains(&self.status) {
            Ok(())
        } else {
            Err(RequestError::InvalidTransition {
                id: self.id.clone(),
                from: self.status,
                action,
            })
        }
    }

    fn owners_of_current_step(&self) -> Option<String> {
        let idx = self.approval_tree.current_step_index()?;
        let names: Vec<&str> = self.approval_tree.steps[idx]
            .owners
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        Some(names.join(", "))
    }

    /// Draft -> Pending. Form validation happens before this call.
    pub fn submit(&mut self, tree: ApprovalTree, workflow_name: Option<String>) -> Result<(), RequestError> {
        self.ensure(&[RequestStatus::Draft], "submit")?;
        self.approval_tree = tree;
        if workflow_name.is_some() {
            self.workflow_name = workflow_name;
        }
        self.status = RequestStatus::Pending;
        self.current_steps = STEP_WAITING_FOR_APPROVE.to_string();
        if let Some(owners) = self.owners_of_current_step() {
            self.step_owner = owners;
        }
        Ok(())
    }

    /// Approves the current step; completes the request when no waiting
    /// step remains.
    pub fn approve(&mut self, at: DateTime<Utc>) -> Result<(), RequestError> {
        self.ensure(&[RequestStatus::Pending], "approve")?;
        self.approval_tree.approve_current(at);

        match self.owners_of_current_step() {
            Some(owners) => self.step_owner = owners,
            None => {
                self.status = RequestStatus::Approved;
                self.current_steps = STEP_COMPLETED.to_string();
            }
        }
        Ok(())
    }

    pub fn reject(&mut self, reason: &str, at: DateTime<Utc>) -> Result<(), RequestError> {
        self.ensure(&[RequestStatus::Pending], "reject")?;
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(RequestError::ReasonRequired);
        }
        self.approval_tree.reject_current(reason, at);
        self.status = RequestStatus::Rejected;
        self.current_steps = STEP_REJECTED.to_string();
        Ok(())
    }

    /// Approved -> Synced
    pub fn sync(&mut self) -> Result<(), RequestError> {
        self.ensure(&[RequestStatus::Approved], "sync")?;
        self.status = RequestStatus::Synced;
        self.current_steps = STEP_SYNCED.to_string();
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), RequestError> {
        self.ensure(&[RequestStatus::Draft, RequestStatus::Pending], "cancel")?;
        self.status = RequestStatus::Rejected;
        self.current_steps = STEP_CANCELLED.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::approval::{ApprovalStep, Owner, OwnerStatus};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
    }

    fn draft() -> RequestRecord {
        RequestRecord::new_draft(
            "REQ-CUST-0042".into(),
            EntityKind::Customer,
            RequestType::New,
            "New Customer".into(),
            "Rina Kusuma",
            now(),
        )
    }

    fn two_step_tree() -> ApprovalTree {
        ApprovalTree::new(vec![
            ApprovalStep {
                step_name: "Review".into(),
                owners: vec![Owner::waiting("Linh Nguyen", "Data Steward")],
                parallel: false,
                sla_hours: None,
            },
            ApprovalStep {
                step_name: "Finance".into(),
                owners: vec![
                    Owner::waiting("Budi Santoso", "Finance Manager"),
                    Owner::waiting("Ana Wijaya", "Controller"),
                ],
                parallel: true,
                sla_hours: Some(48),
            },
        ])
    }

    #[test]
    fn test_full_approval_path() {
        let mut req = draft();
        assert_eq!(req.current_steps, STEP_WAITING_FOR_ENTRY);

        req.submit(two_step_tree(), Some("ID Customer".into())).unwrap();
        assert_eq!(req.status, RequestStatus::Pending);
        assert_eq!(req.current_steps, STEP_WAITING_FOR_APPROVE);
        assert_eq!(req.step_owner, "Linh Nguyen");

        req.approve(now()).unwrap();
        assert_eq!(req.status, RequestStatus::Pending);
        assert_eq!(req.step_owner, "Budi Santoso, Ana Wijaya");

        req.approve(now()).unwrap();
        assert_eq!(req.status, RequestStatus::Approved);
        assert_eq!(req.current_steps, STEP_COMPLETED);

        req.sync().unwrap();
        assert_eq!(req.status, RequestStatus::Synced);
    }

    #[test]
    fn test_reject_requires_reason() {
        let mut req = draft();
        req.submit(two_step_tree(), None).unwrap();
        assert_eq!(req.reject("  ", now()), Err(RequestError::ReasonRequired));
        assert_eq!(req.status, RequestStatus::Pending);

        req.reject("Wrong NPWP", now()).unwrap();
        assert_eq!(req.status, RequestStatus::Rejected);
        assert_eq!(req.approval_tree.steps[0].owners[0].status, OwnerStatus::Rejected);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut req = draft();
        assert!(matches!(
            req.approve(now()),
            Err(RequestError::InvalidTransition { action: "approve", .. })
        ));
        assert!(req.sync().is_err(), "sync only from Approved");

        req.cancel().unwrap();
        assert_eq!(req.status, RequestStatus::Rejected);
        assert_eq!(req.current_steps, STEP_CANCELLED);
        assert!(req.cancel().is_err());
        assert!(req.submit(ApprovalTree::default(), None).is_err());
    }

    #[test]
    fn test_empty_tree_completes_on_first_approve() {
        let mut req = draft();
        req.submit(ApprovalTree::default(), None).unwrap();
        req.approve(now()).unwrap();
        assert_eq!(req.status, RequestStatus::Approved);
    }
}
