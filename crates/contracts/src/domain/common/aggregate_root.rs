use super::EntityKind;
use crate::shared::form::{FieldTable, Record, Section};

/// Master-data record that a request can copy or edit.
///
/// Instance methods expose the record's values grouped by form section;
/// the static part describes the entity class.
pub trait MasterDataEntity {
    // ============================================================================
    // Instance data
    // ============================================================================

    /// Business code (e.g. "C-10001")
    fn code(&self) -> &str;

    fn description(&self) -> &str;

    /// `(field key, value)` pairs belonging to `section`
    fn section_values(&self, section: Section) -> Vec<(&'static str, String)>;

    /// Nested rows (customer addresses); empty for flat entities
    fn nested_rows(&self) -> Vec<Record> {
        Vec::new()
    }

    /// Flat record shown in master-data tables and lookups
    fn lookup_record(&self) -> Record;

    // ============================================================================
    // Entity class metadata
    // ============================================================================

    /// Index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    fn collection_name() -> &'static str;

    /// Singular UI name
    fn element_name() -> &'static str;

    /// Plural UI name
    fn list_name() -> &'static str;

    fn entity_kind() -> EntityKind;

    /// Sections pre-filled by a Copy request
    fn copy_sections() -> &'static [Section];

    fn field_table() -> &'static FieldTable;

    /// `(key, label)` of nested row columns
    fn row_columns() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Columns shown in the master-data list
    fn list_columns() -> &'static [(&'static str, &'static str)];

    /// e.g. "a001_customer"
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
