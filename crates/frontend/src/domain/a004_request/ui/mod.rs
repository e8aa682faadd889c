pub mod approvals;
pub mod details;
pub mod list;
pub mod new_request;
