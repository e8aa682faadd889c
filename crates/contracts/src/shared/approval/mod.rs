pub mod renderer;
pub mod tree;

pub use renderer::{render_tree, status_visual, workflow_label, BadgeTone, RenderedOwner, RenderedStep, StatusIcon};
pub use tree::{ApprovalStep, ApprovalTree, Owner, OwnerStatus};
