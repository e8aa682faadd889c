pub mod a004_request;
pub mod a005_workflow;
pub mod a006_role;
pub mod master_data;
