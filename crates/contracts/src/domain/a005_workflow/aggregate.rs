use crate::domain::common::{EntityKind, RequestType};
use crate::shared::approval::{ApprovalStep, ApprovalTree, Owner};
use crate::shared::form::FormErrors;
use serde::{Deserialize, Serialize};

pub const COUNTRIES: [&str; 3] = ["Indonesia", "Vietnam", "Thailand"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approver {
    pub name: String,
    pub title: String,
}

impl Approver {
    pub fn new(name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStepDefinition {
    pub step_name: String,
    pub approvers: Vec<Approver>,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub sla_hours: Option<u32>,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Approval workflow template for one country / entity / request type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    /// 0 until saved
    pub id: u32,
    pub name: String,
    pub country: String,
    pub entity: EntityKind,
    pub request_type: RequestType,
    pub is_active: bool,
    pub steps: Vec<WorkflowStepDefinition>,
}

impl WorkflowDefinition {
    pub fn new(country: &str, entity: EntityKind) -> Self {
        Self {
            id: 0,
            name: String::new(),
            country: country.to_string(),
            entity,
            request_type: RequestType::New,
            is_active: true,
            steps: Vec::new(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    pub fn add_step(&mut self) -> usize {
        self.steps.push(WorkflowStepDefinition {
            step_name: format!("Step {}", self.steps.len() + 1),
            ..Default::default()
        });
        self.steps.len() - 1
    }

    pub fn remove_step(&mut self, index: usize) -> Option<WorkflowStepDefinition> {
        (index < self.steps.len()).then(|| self.steps.remove(index))
    }

    /// Returns `false` when the step is already first
    pub fn move_step_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.steps.len() {
            return false;
        }
        self.steps.swap(index - 1, index);
        true
    }

    pub fn move_step_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.steps.len() {
            return false;
        }
        self.steps.swap(index, index + 1);
        true
    }

    /// Duplicate names within a step are ignored
    pub fn add_approver(&mut self, step: usize, approver: Approver) -> bool {
        let Some(step) = self.steps.get_mut(step) else {
            return false;
        };
        if step.approvers.iter().any(|a| a.name == approver.name) {
            return false;
        }
        step.approvers.push(approver);
        true
    }

    pub fn remove_approver(&mut self, step: usize, index: usize) -> Option<Approver> {
        let step = self.steps.get_mut(step)?;
        (index < step.approvers.len()).then(|| step.approvers.remove(index))
    }

    /// Error keys: `name`, `steps`, `steps.{i}.stepName`, `steps.{i}.approvers`
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if self.name.trim().is_empty() {
            errors.insert("name", "Workflow name is required");
        }
        if self.country.trim().is_empty() {
            errors.insert("country", "Country is required");
        }
        if self.steps.is_empty() {
            errors.insert("steps", "At least one step is required");
        }
        for (i, step) in self.steps.iter().enumerate() {
            if step.step_name.trim().is_empty() {
                errors.insert(format!("steps.{i}.stepName"), format!("Step {} needs a name", i + 1));
            }
            if step.approvers.is_empty() {
                errors.insert(
                    format!("steps.{i}.approvers"),
                    format!("Step {} needs at least one approver", i + 1),
                );
            }
        }
        errors
    }

    /// Preview tree with every owner waiting
    pub fn to_approval_tree(&self) -> ApprovalTree {
        ApprovalTree::new(
            self.steps
                .iter()
                .map(|s| ApprovalStep {
                    step_name: s.step_name.clone(),
                    owners: s
                        .approvers
                        .iter()
                        .map(|a| Owner::waiting(&a.name, &a.title))
                        .collect(),
                    parallel: s.parallel,
                    sla_hours: s.sla_hours,
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::approval::OwnerStatus;

    fn sample() -> WorkflowDefinition {
        let mut wf = WorkflowDefinition::new("Vietnam", EntityKind::Customer);
        wf.name = "VN Customer Onboarding".into();
        let s0 = wf.add_step();
        wf.add_approver(s0, Approver::new("Linh Nguyen", "Data Steward"));
        let s1 = wf.add_step();
        wf.steps[s1].step_name = "Finance".into();
        wf.add_approver(s1, Approver::new("Budi Santoso", "Finance Manager"));
        wf
    }

    #[test]
    fn test_validate_reports_each_problem() {
        let wf = WorkflowDefinition::new("Vietnam", EntityKind::Customer);
        let errors = wf.validate();
        assert!(errors.get("name").is_some());
        assert!(errors.get("steps").is_some());

        let mut wf = sample();
        assert!(wf.validate().is_empty());

        wf.steps[1].step_name = " ".into();
        wf.steps[1].approvers.clear();
        let errors = wf.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.get("steps.1.stepName").is_some());
        assert!(errors.get("steps.1.approvers").is_some());
    }

    #[test]
    fn test_step_reordering() {
        let mut wf = sample();
        assert!(!wf.move_step_up(0));
        assert!(!wf.move_step_down(1));
        assert!(wf.move_step_down(0));
        assert_eq!(wf.steps[0].step_name, "Finance");
        assert!(wf.move_step_up(1));
        assert_eq!(wf.steps[1].step_name, "Finance");
        assert!(wf.remove_step(5).is_none());
        assert!(wf.remove_step(0).is_some());
        assert_eq!(wf.steps.len(), 1);
    }

    #[test]
    fn test_approver_management() {
        let mut wf = sample();
        assert!(!wf.add_approver(0, Approver::new("Linh Nguyen", "Data Steward")));
        assert!(wf.add_approver(0, Approver::new("Ana Wijaya", "Controller")));
        assert!(!wf.add_approver(9, Approver::new("X", "Y")));
        assert_eq!(wf.remove_approver(0, 0).map(|a| a.name), Some("Linh Nguyen".to_string()));
        assert!(wf.remove_approver(0, 3).is_none());
    }

    #[test]
    fn test_preview_tree_all_waiting() {
        let tree = sample().to_approval_tree();
        assert_eq!(tree.steps.len(), 2);
        assert!(tree
            .steps
            .iter()
            .flat_map(|s| &s.owners)
            .all(|o| o.status == OwnerStatus::Waiting));
    }
}
