pub mod approval;
pub mod config;
pub mod confirm;
pub mod csv_io;
pub mod form;
pub mod object_select;
pub mod routing;
pub mod store;
