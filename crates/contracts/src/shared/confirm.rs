//! Confirmation gates for destructive actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    CancelRequest,
    RejectRequest,
    MassApprove,
    MassReject,
    DeleteRole,
    DeleteWorkflow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmAction {
    pub kind: ConfirmKind,
    pub title: String,
    pub message: String,
    pub confirm_label: &'static str,
    pub comment_required: bool,
    /// Red confirm button
    pub destructive: bool,
}

impl ConfirmAction {
    /// `count` is the number of affected records (mass actions)
    pub fn for_kind(kind: ConfirmKind, subject: &str, count: usize) -> Self {
        let (title, message, confirm_label, comment_required, destructive) = match kind {
            ConfirmKind::CancelRequest => (
                "Cancel Request".to_string(),
                format!("Cancel request {subject}? This cannot be undone."),
                "Cancel Request",
                false,
                true,
            ),
            ConfirmKind::RejectRequest => (
                "Reject Request".to_string(),
                format!("Reject request {subject}? Please give a reason."),
                "Reject",
                true,
                true,
            ),
            ConfirmKind::MassApprove => (
                "Approve Requests".to_string(),
                format!("Approve {count} selected request(s)?"),
                "Approve All",
                false,
                false,
            ),
            ConfirmKind::MassReject => (
                "Reject Requests".to_string(),
                format!("Reject {count} selected request(s)? Please give a reason."),
                "Reject All",
                true,
                true,
            ),
            ConfirmKind::DeleteRole => (
                "Delete Role".to_string(),
                format!("Delete role '{subject}'? Members lose its permissions."),
                "Delete",
                false,
                true,
            ),
            ConfirmKind::DeleteWorkflow => (
                "Delete Workflow".to_string(),
                format!("Delete workflow '{subject}'?"),
                "Delete",
                false,
                true,
            ),
        };
        Self {
            kind,
            title,
            message,
            confirm_label,
            comment_required,
            destructive,
        }
    }

    pub fn can_confirm(&self, comment: &str) -> bool {
        !self.comment_required || !comment.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_needs_comment() {
        for kind in [ConfirmKind::RejectRequest, ConfirmKind::MassReject] {
            let action = ConfirmAction::for_kind(kind, "REQ-CUST-0001", 3);
            assert!(action.comment_required);
            assert!(!action.can_confirm(""));
            assert!(!action.can_confirm("   "));
            assert!(action.can_confirm("duplicate customer"));
        }
    }

    #[test]
    fn test_other_gates_confirm_without_comment() {
        for kind in [
            ConfirmKind::CancelRequest,
            ConfirmKind::MassApprove,
            ConfirmKind::DeleteRole,
            ConfirmKind::DeleteWorkflow,
        ] {
            assert!(ConfirmAction::for_kind(kind, "x", 1).can_confirm(""));
        }
        let mass = ConfirmAction::for_kind(ConfirmKind::MassApprove, "", 4);
        assert_eq!(mass.message, "Approve 4 selected request(s)?");
    }
}
