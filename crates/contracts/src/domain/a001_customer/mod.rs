pub mod aggregate;
pub mod fields;
pub mod fixtures;

pub use aggregate::{AddressRow, Customer};
pub use fields::CUSTOMER_FIELDS;
