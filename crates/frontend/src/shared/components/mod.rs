pub mod confirm_dialog;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod selection;
pub mod ui;
