//! Render model for form fields
//!
//! `render_field` turns a definition plus current values into a
//! [`RenderedField`]; the UI layer maps it to DOM without further decisions.

use super::definition::{FieldDefinition, FieldKind, FieldTable, Section};
use super::evaluator::{is_disabled, should_show};
use super::state::FormState;

pub const YES: &str = "yes";
pub const NO: &str = "no";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn same(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }
}

pub fn yes_no_options() -> Vec<SelectOption> {
    vec![
        SelectOption {
            value: YES.to_string(),
            label: "Yes".to_string(),
        },
        SelectOption {
            value: NO.to_string(),
            label: "No".to_string(),
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Text { value: String },
    Select { options: Vec<SelectOption>, selected: String },
    /// Read-only display; `clickable` opens the lookup modal
    ObjectDisplay { text: String, clickable: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub key: String,
    pub label: String,
    pub required: bool,
    pub disabled: bool,
    pub section: Section,
    pub widget: Widget,
}

impl RenderedField {
    pub fn input_class(&self) -> &'static str {
        if self.disabled {
            "form__input form__input--readonly"
        } else {
            "form__input"
        }
    }
}

/// `None` when the field is hidden by its `conditional`.
pub fn render_field(field: &FieldDefinition, values: &FormState, editable: bool) -> Option<RenderedField> {
    if !should_show(field, values) {
        return None;
    }

    let disabled = is_disabled(field, values, editable);
    let value = values.text_or_empty(&field.key).to_string();

    let widget = match &field.kind {
        FieldKind::Text => Widget::Text { value },
        FieldKind::Select { options } => Widget::Select {
            options: options.iter().map(|o| SelectOption::same(o)).collect(),
            selected: value,
        },
        FieldKind::YesNo => Widget::Select {
            options: yes_no_options(),
            selected: value,
        },
        FieldKind::ObjectSelect { .. } => Widget::ObjectDisplay {
            text: value,
            clickable: !disabled,
        },
    };

    Some(RenderedField {
        key: field.key.clone(),
        label: field.label.clone(),
        required: field.required,
        disabled,
        section: field.section,
        widget,
    })
}

impl FieldTable {
    pub fn render(&self, values: &FormState, editable: bool) -> Vec<RenderedField> {
        self.fields
            .iter()
            .filter_map(|f| render_field(f, values, editable))
            .collect()
    }

    pub fn render_section(&self, section: Section, values: &FormState, editable: bool) -> Vec<RenderedField> {
        self.in_section(section)
            .filter_map(|f| render_field(f, values, editable))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::definition::ObjectConfig;

    #[test]
    fn test_select_keeps_option_order_without_sentinel() {
        let field = FieldDefinition::select("currency", "Currency", &["USD", "IDR", "VND"]);
        let rendered = render_field(&field, &FormState::new(), true).unwrap();
        match rendered.widget {
            Widget::Select { options, selected } => {
                let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
                assert_eq!(values, vec!["USD", "IDR", "VND"]);
                assert_eq!(selected, "");
            }
            other => panic!("unexpected widget {other:?}"),
        }
    }

    #[test]
    fn test_yes_no_has_exactly_two_options() {
        let field = FieldDefinition::yes_no("onHold", "On Hold");
        let rendered = render_field(&field, &FormState::new(), true).unwrap();
        let Widget::Select { options, .. } = rendered.widget else {
            panic!("yes-no renders as a select");
        };
        assert_eq!(options, yes_no_options());
        assert_eq!(options[0].label, "Yes");
        assert_eq!(options[1].label, "No");
    }

    #[test]
    fn test_read_only_text_is_muted() {
        let field = FieldDefinition::text("name", "Name");
        let mut values = FormState::new();
        values.set_text("name", "Alice");
        let rendered = render_field(&field, &values, false).unwrap();
        assert!(rendered.disabled);
        assert_eq!(rendered.input_class(), "form__input form__input--readonly");
        assert_eq!(
            rendered.widget,
            Widget::Text {
                value: "Alice".into()
            }
        );
    }

    #[test]
    fn test_object_display_clickable_only_when_enabled() {
        let field = FieldDefinition::object_select(
            "vendor",
            "Vendor",
            ObjectConfig::new("name", &["name"], vec![]),
        );
        let mut values = FormState::new();
        values.set_text("vendor", "ACME");

        let editable = render_field(&field, &values, true).unwrap();
        assert_eq!(
            editable.widget,
            Widget::ObjectDisplay {
                text: "ACME".into(),
                clickable: true
            }
        );

        let locked = render_field(&field, &values, false).unwrap();
        assert_eq!(
            locked.widget,
            Widget::ObjectDisplay {
                text: "ACME".into(),
                clickable: false
            }
        );
    }

    #[test]
    fn test_hidden_field_absent_from_output() {
        let table = FieldTable::new(vec![
            FieldDefinition::select("customerType", "Customer Type", &["Organization", "Person"]),
            FieldDefinition::text("firstName", "First Name").show_when("customerType", "Person"),
        ]);
        let mut values = FormState::new();

        for other in ["", "Organization", "Anything"] {
            values.set_text("customerType", other);
            assert!(table.render(&values, true).iter().all(|f| f.key != "firstName"));
        }

        values.set_text("customerType", "Person");
        assert!(table.render(&values, true).iter().any(|f| f.key == "firstName"));
    }
}
