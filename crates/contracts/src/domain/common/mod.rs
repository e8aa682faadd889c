//! Common types and traits for master-data entities

pub mod aggregate_id;
pub mod aggregate_root;
pub mod entity_kind;
pub mod prefill;
pub mod request_type;

// Re-exports
pub use aggregate_id::AggregateId;
pub use aggregate_root::MasterDataEntity;
pub use entity_kind::EntityKind;
pub use prefill::prefill;
pub use request_type::RequestType;
