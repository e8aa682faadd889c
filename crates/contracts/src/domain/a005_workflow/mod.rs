pub mod aggregate;
pub mod fixtures;

pub use aggregate::{Approver, WorkflowDefinition, WorkflowStepDefinition, COUNTRIES};
