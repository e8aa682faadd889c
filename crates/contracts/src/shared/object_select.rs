//! Object-select lookup session
//!
//! One session lives for the duration of the lookup modal. Searching is pure;
//! `confirm` writes the selected record and its cascade into the form state.

use super::form::{FieldDefinition, FieldTable, FormState, ObjectColumn, ObjectConfig, Record};

#[derive(Debug, Clone, Copy)]
pub struct ObjectSelectSession<'a> {
    field: &'a FieldDefinition,
    config: &'a ObjectConfig,
}

impl<'a> ObjectSelectSession<'a> {
    /// `None` unless `field` is an object-select field.
    pub fn open(field: &'a FieldDefinition) -> Option<Self> {
        let config = field.object_config()?;
        Some(Self { field, config })
    }

    pub fn field_key(&self) -> &'a str {
        &self.field.key
    }

    pub fn title(&self) -> &'a str {
        &self.field.label
    }

    pub fn columns(&self) -> &'a [ObjectColumn] {
        &self.config.columns
    }

    /// Case-insensitive substring search over `searchFields`.
    /// Only the empty term returns every record; whitespace is part of the
    /// needle. Order is preserved.
    pub fn search(&self, term: &str) -> Vec<&'a Record> {
        let needle = term.to_lowercase();
        self.config
            .data
            .iter()
            .filter(|r| needle.is_empty() || record_matches(r, &self.config.search_fields, &needle))
            .collect()
    }

    /// Writes the display value and raw record, then applies cascade rules.
    /// Every write goes through `apply_change` so dependent disables clear in
    /// the same update.
    pub fn confirm(&self, record: &Record, table: &FieldTable, state: &mut FormState) {
        let key = self.field_key();
        let display = record
            .get(&self.config.display_field)
            .cloned()
            .unwrap_or_default();

        table.apply_change(state, key, display);
        state.set_object(key, record.clone());

        for rule in &self.config.cascade {
            let value = record.get(&rule.source_field).cloned().unwrap_or_default();
            table.apply_change(state, &rule.target_key, value);
        }

        log::debug!(
            "object-select '{}' confirmed, {} cascade field(s)",
            key,
            self.config.cascade.len()
        );
    }
}

/// `needle` must already be lower-cased.
pub fn record_matches(record: &Record, search_fields: &[String], needle: &str) -> bool {
    search_fields.iter().any(|f| {
        record
            .get(f)
            .map(|v| v.to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{record, ObjectConfig, Section};

    fn main_customer_table() -> FieldTable {
        let config = ObjectConfig::new(
            "mainCustomer",
            &["mainCustomer", "mainCustomerName"],
            vec![
                ObjectColumn::new("mainCustomer", "Code"),
                ObjectColumn::new("mainCustomerName", "Name"),
            ],
        )
        .with_data(vec![
            record(&[
                ("mainCustomer", "MC-001"),
                ("mainCustomerName", "PT Sinar Jaya"),
                ("company", "SJ01"),
                ("address", "Jl. Sudirman 1, Jakarta"),
                ("nikNpwp", "01.234.567.8-901.000"),
            ]),
            record(&[
                ("mainCustomer", "MC-002"),
                ("mainCustomerName", "Saigon Trading"),
                ("company", "VN01"),
                ("address", "12 Le Loi, HCMC"),
            ]),
        ])
        .with_cascade(&[
            ("mainCustomerCode", "mainCustomer"),
            ("mainCustomerName", "mainCustomerName"),
            ("company", "company"),
            ("address", "address"),
            ("nikNpwp", "nikNpwp"),
        ]);

        FieldTable::new(vec![
            FieldDefinition::object_select("mainCustomer", "Main Customer", config)
                .in_section(Section::MainCustomer),
            FieldDefinition::text("mainCustomerCode", "Main Customer Code")
                .in_section(Section::MainCustomer),
            FieldDefinition::text("mainCustomerName", "Main Customer Name")
                .in_section(Section::MainCustomer),
            FieldDefinition::text("company", "Company").in_section(Section::MainCustomer),
            FieldDefinition::text("address", "Address").in_section(Section::MainCustomer),
            FieldDefinition::text("nikNpwp", "NIK/NPWP").in_section(Section::MainCustomer),
            FieldDefinition::text("vatNumber", "VAT Number").disable_when("company", "VN01"),
        ])
    }

    #[test]
    fn test_open_only_for_object_select() {
        let table = main_customer_table();
        assert!(ObjectSelectSession::open(table.field("mainCustomer").unwrap()).is_some());
        assert!(ObjectSelectSession::open(table.field("company").unwrap()).is_none());
    }

    #[test]
    fn test_search_case_insensitive_any_field() {
        let table = main_customer_table();
        let session = ObjectSelectSession::open(table.field("mainCustomer").unwrap()).unwrap();

        assert_eq!(session.search("").len(), 2);
        assert!(session.search("   ").is_empty());

        let hits = session.search("saigon");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["mainCustomer"], "MC-002");

        let hits = session.search("mc-00");
        let codes: Vec<_> = hits.iter().map(|r| r["mainCustomer"].as_str()).collect();
        assert_eq!(codes, vec!["MC-001", "MC-002"]);

        assert!(session.search("jakarta").is_empty(), "address is not a search field");
    }

    #[test]
    fn test_search_keeps_whitespace_in_term() {
        let config = ObjectConfig::new("name", &["name"], vec![ObjectColumn::new("name", "Name")])
            .with_data(vec![record(&[("name", "a b")]), record(&[("name", "ab")])]);
        let field = FieldDefinition::object_select("name", "Name", config);
        let session = ObjectSelectSession::open(&field).unwrap();

        let hits = session.search(" b");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["name"], "a b");
        assert_eq!(session.search(" ").len(), 1);
        assert_eq!(session.search("B").len(), 2);
    }

    #[test]
    fn test_main_customer_cascade() {
        let table = main_customer_table();
        let session = ObjectSelectSession::open(table.field("mainCustomer").unwrap()).unwrap();
        let mut state = FormState::new();
        let selected = session.search("Sinar")[0].clone();

        session.confirm(&selected, &table, &mut state);

        assert_eq!(state.text("mainCustomer"), Some("MC-001"));
        assert_eq!(state.text("mainCustomerCode"), Some("MC-001"));
        assert_eq!(state.text("mainCustomerName"), Some("PT Sinar Jaya"));
        assert_eq!(state.text("company"), Some("SJ01"));
        assert_eq!(state.text("address"), Some("Jl. Sudirman 1, Jakarta"));
        assert_eq!(state.text("nikNpwp"), Some("01.234.567.8-901.000"));
        assert_eq!(state.object("mainCustomer"), Some(&selected));
    }

    #[test]
    fn test_cascade_missing_source_writes_empty() {
        let table = main_customer_table();
        let session = ObjectSelectSession::open(table.field("mainCustomer").unwrap()).unwrap();
        let mut state = FormState::new();
        state.set_text("nikNpwp", "stale");

        let selected = session.search("MC-002")[0].clone();
        session.confirm(&selected, &table, &mut state);

        assert_eq!(state.text("nikNpwp"), Some(""));
    }

    #[test]
    fn test_cascade_triggers_disable_clear() {
        let table = main_customer_table();
        let session = ObjectSelectSession::open(table.field("mainCustomer").unwrap()).unwrap();
        let mut state = FormState::new();
        state.set_text("vatNumber", "VAT-1");

        let selected = session.search("MC-002")[0].clone();
        session.confirm(&selected, &table, &mut state);

        assert_eq!(state.text("vatNumber"), Some(""));
    }
}
