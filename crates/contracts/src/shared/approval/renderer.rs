//! Render model for approval trees

use super::tree::{ApprovalTree, Owner, OwnerStatus};
use crate::domain::common::{EntityKind, RequestType};
use chrono::{DateTime, Utc};

pub const TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Check,
    Cross,
    Clock,
}

impl StatusIcon {
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Cross => "x",
            Self::Clock => "clock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Red,
    Gray,
}

impl BadgeTone {
    /// Badge component variant
    pub fn variant(&self) -> &'static str {
        match self {
            Self::Green => "success",
            Self::Red => "error",
            Self::Gray => "neutral",
        }
    }
}

pub fn status_visual(status: OwnerStatus) -> (StatusIcon, BadgeTone) {
    match status {
        OwnerStatus::Approved => (StatusIcon::Check, BadgeTone::Green),
        OwnerStatus::Rejected => (StatusIcon::Cross, BadgeTone::Red),
        OwnerStatus::Waiting => (StatusIcon::Clock, BadgeTone::Gray),
    }
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOwner {
    pub name: String,
    pub title: String,
    pub initials: String,
    pub avatar_url: Option<String>,
    pub status: OwnerStatus,
    pub icon: StatusIcon,
    pub tone: BadgeTone,
    pub timestamp: Option<String>,
    /// Only for rejected owners with a non-empty reason
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStep {
    pub ordinal: usize,
    pub step_name: String,
    pub parallel: bool,
    pub sla_label: Option<String>,
    pub owners: Vec<RenderedOwner>,
}

fn render_owner(owner: &Owner) -> RenderedOwner {
    let (icon, tone) = status_visual(owner.status);
    let reason = match owner.status {
        OwnerStatus::Rejected => owner
            .reason
            .as_ref()
            .filter(|r| !r.trim().is_empty())
            .cloned(),
        _ => None,
    };

    RenderedOwner {
        name: owner.name.clone(),
        title: owner.title.clone(),
        initials: owner.initials(),
        avatar_url: owner.avatar_url.clone(),
        status: owner.status,
        icon,
        tone,
        timestamp: owner.approved_at.or(owner.rejected_at).as_ref().map(format_timestamp),
        reason,
    }
}

/// Steps in list order, numbered from 1.
pub fn render_tree(tree: &ApprovalTree) -> Vec<RenderedStep> {
    tree.steps
        .iter()
        .enumerate()
        .map(|(idx, step)| RenderedStep {
            ordinal: idx + 1,
            step_name: step.step_name.clone(),
            parallel: step.parallel,
            sla_label: step.sla_hours.map(|h| format!("SLA: {h}h")),
            owners: step.owners.iter().map(render_owner).collect(),
        })
        .collect()
}

/// Header label for a request's approval tree.
pub fn workflow_label(
    workflow_name: Option<&str>,
    request_type: RequestType,
    entity: Option<EntityKind>,
    request_id: &str,
) -> String {
    if let Some(name) = workflow_name.filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    let entity = EntityKind::infer(request_id, entity);
    format!("{} - Standard - {}", request_type, entity.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::approval::tree::ApprovalStep;
    use chrono::TimeZone;

    #[test]
    fn test_status_badge_mapping() {
        assert_eq!(
            status_visual(OwnerStatus::Approved),
            (StatusIcon::Check, BadgeTone::Green)
        );
        assert_eq!(
            status_visual(OwnerStatus::Rejected),
            (StatusIcon::Cross, BadgeTone::Red)
        );
        assert_eq!(
            status_visual(OwnerStatus::Waiting),
            (StatusIcon::Clock, BadgeTone::Gray)
        );
        assert_eq!(BadgeTone::Gray.variant(), "neutral");
    }

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
        assert_eq!(format_timestamp(&at), "Jan 5, 2024, 09:30 AM");
        let pm = Utc.with_ymd_and_hms(2024, 11, 21, 15, 5, 0).unwrap();
        assert_eq!(format_timestamp(&pm), "Nov 21, 2024, 03:05 PM");
    }

    #[test]
    fn test_render_tree_ordinals_and_reason() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
        let mut approved = Owner::waiting("Linh Nguyen", "Data Steward");
        approved.approve(at);
        let mut rejected = Owner::waiting("Budi Santoso", "Finance Manager");
        rejected.reject("Credit limit too high", at);
        let mut blank_reason = Owner::waiting("Ana Wijaya", "Controller");
        blank_reason.reject("  ", at);
        let mut waiting_with_reason = Owner::waiting("Tran Minh", "Sales Head");
        waiting_with_reason.reason = Some("stale".into());

        let tree = ApprovalTree::new(vec![
            ApprovalStep {
                step_name: "Review".into(),
                owners: vec![approved],
                parallel: false,
                sla_hours: Some(24),
            },
            ApprovalStep {
                step_name: "Finance".into(),
                owners: vec![rejected, blank_reason, waiting_with_reason],
                parallel: true,
                sla_hours: None,
            },
        ]);

        let steps = render_tree(&tree);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].ordinal, 1);
        assert_eq!(steps[1].ordinal, 2);
        assert_eq!(steps[0].sla_label.as_deref(), Some("SLA: 24h"));
        assert!(steps[1].parallel);

        let owner = &steps[0].owners[0];
        assert_eq!(owner.timestamp.as_deref(), Some("Jan 5, 2024, 09:30 AM"));
        assert!(owner.reason.is_none());

        let finance = &steps[1].owners;
        assert_eq!(finance[0].reason.as_deref(), Some("Credit limit too high"));
        assert!(finance[1].reason.is_none(), "blank reason is not shown");
        assert!(finance[2].reason.is_none(), "reason only shown when rejected");
        assert!(finance[2].timestamp.is_none());
    }

    #[test]
    fn test_workflow_label_heuristic() {
        assert_eq!(
            workflow_label(Some("VN Customer Onboarding"), RequestType::New, None, "REQ-SPARE-1"),
            "VN Customer Onboarding"
        );
        assert_eq!(
            workflow_label(None, RequestType::Copy, None, "REQ-SPARE-0001"),
            "Copy - Standard - Spare Parts"
        );
        assert_eq!(
            workflow_label(None, RequestType::Edit, None, "REQ-FINISHED-0002"),
            "Edit - Standard - Finished Goods"
        );
        assert_eq!(
            workflow_label(None, RequestType::New, None, "REQ-CUST-0003"),
            "New - Standard - Customer"
        );
        assert_eq!(
            workflow_label(Some(""), RequestType::New, Some(EntityKind::FinishedGoods), "REQ-CUST-0003"),
            "New - Standard - Finished Goods",
            "explicit entity wins over the id"
        );
    }
}
