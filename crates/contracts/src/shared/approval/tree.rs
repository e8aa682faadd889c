//! Approval chain data
//!
//! A tree is an ordered list of steps; `parallel` is carried for display
//! only. The helper transitions below are used by the mock request lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OwnerStatus {
    #[default]
    Waiting,
    Approved,
    Rejected,
}

impl OwnerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub name: String,
    pub title: String,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub status: OwnerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Owner {
    pub fn waiting(name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            avatar_url: None,
            status: OwnerStatus::Waiting,
            approved_at: None,
            rejected_at: None,
            reason: None,
        }
    }

    pub fn approve(&mut self, at: DateTime<Utc>) {
        self.status = OwnerStatus::Approved;
        self.approved_at = Some(at);
    }

    pub fn reject(&mut self, reason: &str, at: DateTime<Utc>) {
        self.status = OwnerStatus::Rejected;
        self.rejected_at = Some(at);
        self.reason = Some(reason.to_string());
    }

    /// Up to two initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalStep {
    pub step_name: String,
    pub owners: Vec<Owner>,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_hours: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApprovalTree {
    pub steps: Vec<ApprovalStep>,
}

impl ApprovalTree {
    pub fn new(steps: Vec<ApprovalStep>) -> Self {
        Self { steps }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// First step that still has a waiting owner.
    pub fn current_step_index(&self) -> Option<usize> {
        self.steps
            .iter()
            .position(|s| s.owners.iter().any(|o| o.status == OwnerStatus::Waiting))
    }

    /// Approves every waiting owner of the current step.
    /// Returns the approved step's index.
    pub fn approve_current(&mut self, at: DateTime<Utc>) -> Option<usize> {
        let idx = self.current_step_index()?;
        for owner in &mut self.steps[idx].owners {
            if owner.status == OwnerStatus::Waiting {
                owner.approve(at);
            }
        }
        Some(idx)
    }

    pub fn reject_current(&mut self, reason: &str, at: DateTime<Utc>) -> Option<usize> {
        let idx = self.current_step_index()?;
        for owner in &mut self.steps[idx].owners {
            if owner.status == OwnerStatus::Waiting {
                owner.reject(reason, at);
            }
        }
        Some(idx)
    }

    pub fn is_fully_approved(&self) -> bool {
        !self.steps.is_empty()
            && self
                .steps
                .iter()
                .all(|s| s.owners.iter().all(|o| o.status == OwnerStatus::Approved))
    }

    pub fn is_rejected(&self) -> bool {
        self.steps
            .iter()
            .any(|s| s.owners.iter().any(|o| o.status == OwnerStatus::Rejected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tree() -> ApprovalTree {
        ApprovalTree::new(vec![
            ApprovalStep {
                step_name: "Data Steward Review".into(),
                owners: vec![Owner::waiting("Linh Nguyen", "Data Steward")],
                parallel: false,
                sla_hours: Some(24),
            },
            ApprovalStep {
                step_name: "Finance Approval".into(),
                owners: vec![
                    Owner::waiting("Budi Santoso", "Finance Manager"),
                    Owner::waiting("Ana Wijaya", "Credit Controller"),
                ],
                parallel: true,
                sla_hours: None,
            },
        ])
    }

    #[test]
    fn test_approve_walks_steps_in_order() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
        let mut tree = tree();
        assert_eq!(tree.current_step_index(), Some(0));

        assert_eq!(tree.approve_current(at), Some(0));
        assert_eq!(tree.current_step_index(), Some(1));
        assert!(!tree.is_fully_approved());

        assert_eq!(tree.approve_current(at), Some(1));
        assert!(tree.is_fully_approved());
        assert_eq!(tree.current_step_index(), None);
        assert_eq!(tree.approve_current(at), None);
        assert_eq!(tree.steps[1].owners[1].approved_at, Some(at));
    }

    #[test]
    fn test_reject_records_reason() {
        let at = Utc.with_ymd_and_hms(2024, 2, 1, 14, 0, 0).unwrap();
        let mut tree = tree();
        tree.reject_current("Missing NPWP", at);

        let owner = &tree.steps[0].owners[0];
        assert_eq!(owner.status, OwnerStatus::Rejected);
        assert_eq!(owner.reason.as_deref(), Some("Missing NPWP"));
        assert_eq!(owner.rejected_at, Some(at));
        assert!(tree.is_rejected());
    }

    #[test]
    fn test_empty_tree_is_not_approved() {
        assert!(!ApprovalTree::default().is_fully_approved());
    }

    #[test]
    fn test_initials() {
        assert_eq!(Owner::waiting("linh nguyen thi", "").initials(), "LN");
        assert_eq!(Owner::waiting("Admin", "").initials(), "A");
    }

    #[test]
    fn test_owner_json_shape() {
        let json = r#"{"name":"A","title":"T","avatarUrl":null,"status":"Approved",
            "approvedAt":"2024-01-05T09:30:00Z"}"#;
        let owner: Owner = serde_json::from_str(json).unwrap();
        assert_eq!(owner.status, OwnerStatus::Approved);
        assert!(owner.approved_at.is_some());
        assert!(owner.reason.is_none());
    }
}
