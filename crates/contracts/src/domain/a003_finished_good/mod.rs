pub mod aggregate;
pub mod fields;
pub mod fixtures;

pub use aggregate::FinishedGood;
pub use fields::FINISHED_GOOD_FIELDS;
