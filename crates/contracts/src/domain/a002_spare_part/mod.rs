pub mod aggregate;
pub mod fields;
pub mod fixtures;

pub use aggregate::SparePart;
pub use fields::SPARE_PART_FIELDS;
