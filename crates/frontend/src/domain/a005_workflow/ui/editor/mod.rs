//! Workflow editor: general settings, ordered steps with approvers and a
//! live approval-tree preview

mod view;
mod view_model;

pub use view::WorkflowEditor;
pub use view_model::WorkflowEditorViewModel;
