//! Conditional show/hide and conditional disable

use super::definition::{FieldDefinition, FieldTable};
use super::state::FormState;

/// `true` when the field has no `conditional`, or its dependency currently
/// holds `showWhen`. An unset dependency hides the field.
pub fn should_show(field: &FieldDefinition, values: &FormState) -> bool {
    match &field.conditional {
        None => true,
        Some(cond) => values.text(&cond.depends_on) == Some(cond.show_when.as_str()),
    }
}

/// `!base_editable`, or `true` when `conditionalDisable` triggers.
/// An unset dependency never disables the field.
pub fn is_disabled(field: &FieldDefinition, values: &FormState, base_editable: bool) -> bool {
    if !base_editable {
        return true;
    }
    match &field.conditional_disable {
        None => false,
        Some(cond) => values.text(&cond.depends_on) == Some(cond.disable_when.as_str()),
    }
}

impl FieldTable {
    /// Writes `value` under `key` and, in the same update, clears every field
    /// whose `conditionalDisable` now triggers. Returns the cleared keys.
    ///
    /// Re-enabling a field never restores its previous value.
    pub fn apply_change(&self, state: &mut FormState, key: &str, value: impl Into<String>) -> Vec<String> {
        state.set_text(key, value);

        let mut cleared = Vec::new();
        for field in &self.fields {
            let Some(cond) = &field.conditional_disable else {
                continue;
            };
            if cond.depends_on == key && state.text(key) == Some(cond.disable_when.as_str()) {
                state.clear(&field.key);
                cleared.push(field.key.clone());
            }
        }

        if !cleared.is_empty() {
            log::debug!("'{}' changed, cleared disabled fields: {:?}", key, cleared);
        }
        cleared
    }

    pub fn visible_fields<'a>(&'a self, values: &'a FormState) -> impl Iterator<Item = &'a FieldDefinition> {
        self.fields.iter().filter(move |f| should_show(f, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::definition::FieldDefinition;

    fn customer_like_table() -> FieldTable {
        FieldTable::new(vec![
            FieldDefinition::select("customerType", "Customer Type", &["Organization", "Person"]),
            FieldDefinition::text("firstName", "First Name").show_when("customerType", "Person"),
            FieldDefinition::select("customerGroup", "Customer Group", &["LOC_INT", "LOC_EXT"]),
            FieldDefinition::text("customerAccount", "Customer Account")
                .disable_when("customerGroup", "LOC_EXT"),
        ])
    }

    #[test]
    fn test_show_only_for_matching_value() {
        let table = customer_like_table();
        let field = table.field("firstName").unwrap();
        let mut values = FormState::new();

        assert!(!should_show(field, &values), "unset dependency hides the field");

        values.set_text("customerType", "Organization");
        assert!(!should_show(field, &values));

        values.set_text("customerType", "Person");
        assert!(should_show(field, &values));

        values.set_text("customerType", "person");
        assert!(!should_show(field, &values), "comparison is exact");
    }

    #[test]
    fn test_field_without_condition_always_shown() {
        let table = customer_like_table();
        let values = FormState::new();
        assert!(should_show(table.field("customerType").unwrap(), &values));
    }

    #[test]
    fn test_disable_respects_base_editable() {
        let table = customer_like_table();
        let field = table.field("customerAccount").unwrap();
        let mut values = FormState::new();

        assert!(!is_disabled(field, &values, true), "unset dependency keeps field enabled");
        assert!(is_disabled(field, &values, false));

        values.set_text("customerGroup", "LOC_EXT");
        assert!(is_disabled(field, &values, true));

        values.set_text("customerGroup", "LOC_INT");
        assert!(!is_disabled(field, &values, true));
        assert!(is_disabled(field, &values, false));
    }

    #[test]
    fn test_disable_clears_value_atomically() {
        let table = customer_like_table();
        let mut values = FormState::new();
        table.apply_change(&mut values, "customerAccount", "ACC-42");

        let cleared = table.apply_change(&mut values, "customerGroup", "LOC_EXT");
        assert_eq!(cleared, vec!["customerAccount".to_string()]);
        assert_eq!(values.text("customerAccount"), Some(""));
        assert!(is_disabled(table.field("customerAccount").unwrap(), &values, true));

        let cleared = table.apply_change(&mut values, "customerGroup", "LOC_INT");
        assert!(cleared.is_empty());
        assert_eq!(values.text("customerAccount"), Some(""), "prior value is not restored");
        assert!(!is_disabled(table.field("customerAccount").unwrap(), &values, true));
    }

    #[test]
    fn test_visible_fields_follow_values() {
        let table = customer_like_table();
        let mut values = FormState::new();
        let keys: Vec<_> = table.visible_fields(&values).map(|f| f.key.as_str()).collect();
        assert!(!keys.contains(&"firstName"));

        values.set_text("customerType", "Person");
        let keys: Vec<_> = table.visible_fields(&values).map(|f| f.key.as_str()).collect();
        assert!(keys.contains(&"firstName"));
    }
}
