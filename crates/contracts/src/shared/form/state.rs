use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat lookup record (one row of an object-select table or nested row).
pub type Record = BTreeMap<String, String>;

/// Builds a [`Record`] from `(key, value)` pairs.
pub fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    /// Raw selected record, kept under `{key}_object`
    Object(Record),
}

/// Current values of a form, keyed by field key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<String, FormValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key under which the raw object of an object-select field is stored.
    pub fn object_key(key: &str) -> String {
        format!("{key}_object")
    }

    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.values.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(FormValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn text_or_empty(&self, key: &str) -> &str {
        self.text(key).unwrap_or("")
    }

    pub fn object(&self, key: &str) -> Option<&Record> {
        match self.values.get(&Self::object_key(key)) {
            Some(FormValue::Object(r)) => Some(r),
            _ => None,
        }
    }

    pub fn is_blank(&self, key: &str) -> bool {
        self.text(key).map(|s| s.trim().is_empty()).unwrap_or(true)
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.values
            .insert(key.to_string(), FormValue::Text(value.into()));
    }

    pub fn set_object(&mut self, key: &str, record: Record) {
        self.values
            .insert(Self::object_key(key), FormValue::Object(record));
    }

    /// Sets the value to empty and drops the `_object` shadow if any.
    pub fn clear(&mut self, key: &str) {
        self.set_text(key, String::new());
        self.values.remove(&Self::object_key(key));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FormValue)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Full payload of a request form: scalar values plus nested rows
/// (e.g. customer address rows).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestForm {
    pub values: FormState,
    #[serde(default)]
    pub rows: Vec<Record>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_drops_object_shadow() {
        let mut state = FormState::new();
        state.set_text("vendor", "ACME");
        state.set_object("vendor", record(&[("name", "ACME")]));
        assert!(state.object("vendor").is_some());

        state.clear("vendor");
        assert_eq!(state.text("vendor"), Some(""));
        assert!(state.object("vendor").is_none());
    }

    #[test]
    fn test_blank_detection() {
        let mut state = FormState::new();
        assert!(state.is_blank("x"));
        state.set_text("x", "   ");
        assert!(state.is_blank("x"));
        state.set_text("x", "v");
        assert!(!state.is_blank("x"));
    }

    #[test]
    fn test_serde_shape() {
        let mut state = FormState::new();
        state.set_text("company", "PT Maju");
        state.set_object("mainCustomer", record(&[("mainCustomer", "C-001")]));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["company"], "PT Maju");
        assert_eq!(json["mainCustomer_object"]["mainCustomer"], "C-001");

        let back: FormState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
