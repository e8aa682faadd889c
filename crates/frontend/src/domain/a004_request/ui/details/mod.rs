//! Request details page
//!
//! - view_model.rs: editable form state and status commands
//! - view.rs: page component with header actions and tabs

mod view;
mod view_model;

pub use view::RequestDetails;
pub use view_model::RequestDetailsViewModel;
