//! Form-level validation errors

use super::definition::FieldTable;
use super::evaluator::{is_disabled, should_show};
use super::state::FormState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field key -> message. Rendered inline under the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.insert(key.into(), message.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self.0.values().map(String::as_str).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl FieldTable {
    /// Required fields that are shown, enabled and blank.
    pub fn validate(&self, values: &FormState) -> FormErrors {
        let mut errors = FormErrors::new();
        for field in &self.fields {
            if !field.required || !should_show(field, values) || is_disabled(field, values, true) {
                continue;
            }
            if values.is_blank(&field.key) {
                errors.insert(field.key.clone(), format!("{} is required", field.label));
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::definition::FieldDefinition;

    fn table() -> FieldTable {
        FieldTable::new(vec![
            FieldDefinition::text("name", "Name").required(),
            FieldDefinition::select("customerType", "Customer Type", &["Organization", "Person"]),
            FieldDefinition::text("firstName", "First Name")
                .required()
                .show_when("customerType", "Person"),
            FieldDefinition::select("customerGroup", "Customer Group", &["LOC_INT", "LOC_EXT"]),
            FieldDefinition::text("customerAccount", "Customer Account")
                .required()
                .disable_when("customerGroup", "LOC_EXT"),
        ])
    }

    #[test]
    fn test_required_blank_fields_reported() {
        let errors = table().validate(&FormState::new());
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("customerAccount"), Some("Customer Account is required"));
        assert!(errors.get("firstName").is_none(), "hidden fields are not validated");
    }

    #[test]
    fn test_disabled_and_visible_rules() {
        let mut values = FormState::new();
        values.set_text("name", "Acme");
        values.set_text("customerType", "Person");
        values.set_text("customerGroup", "LOC_EXT");

        let errors = table().validate(&values);
        assert_eq!(errors.len(), 1);
        assert!(errors.get("firstName").is_some());
        assert!(errors.get("customerAccount").is_none(), "disabled fields are not validated");
    }

    #[test]
    fn test_into_result() {
        assert!(FormErrors::new().into_result().is_ok());
        let mut errors = FormErrors::new();
        errors.insert("name", "Name is required");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
    }
}
