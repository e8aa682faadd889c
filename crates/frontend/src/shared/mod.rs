pub mod approval_tree;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod form;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod page_frame;
pub mod page_standard;
pub mod store;
