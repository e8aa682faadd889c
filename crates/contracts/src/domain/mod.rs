pub mod common;

pub mod a001_customer;
pub mod a002_spare_part;
pub mod a003_finished_good;
pub mod a004_request;
pub mod a005_workflow;
pub mod a006_role;
