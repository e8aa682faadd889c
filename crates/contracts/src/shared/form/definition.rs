//! Declarative field-definition tables
//!
//! A form is described by an ordered [`FieldTable`]. Each [`FieldDefinition`]
//! carries its kind as a tagged union, so JSON tables look like
//! `{"key": "customerType", "label": "Customer Type", "type": "select", "options": [...]}`.

use super::state::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

// ============================================================================
// Sections
// ============================================================================

/// Form section. Drives page grouping and the Copy/Edit pre-fill policy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Section {
    MainCustomer,
    #[default]
    General,
    Address,
    Contact,
    Sales,
    Credit,
    Payment,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::MainCustomer,
        Section::General,
        Section::Address,
        Section::Contact,
        Section::Sales,
        Section::Credit,
        Section::Payment,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::MainCustomer => "Main Customer",
            Self::General => "General",
            Self::Address => "Address",
            Self::Contact => "Contact",
            Self::Sales => "Sales",
            Self::Credit => "Credit",
            Self::Payment => "Payment",
        }
    }
}

// ============================================================================
// Conditions
// ============================================================================

/// Field is rendered only while `values[depends_on] == show_when`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowCondition {
    pub depends_on: String,
    pub show_when: String,
}

/// Field is disabled (and cleared) while `values[depends_on] == disable_when`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisableCondition {
    pub depends_on: String,
    pub disable_when: String,
}

// ============================================================================
// Object-select configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectColumn {
    pub key: String,
    pub label: String,
}

impl ObjectColumn {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// On confirm, `values[target_key] = record[source_field]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeRule {
    pub target_key: String,
    pub source_field: String,
}

impl CascadeRule {
    pub fn new(target_key: &str, source_field: &str) -> Self {
        Self {
            target_key: target_key.to_string(),
            source_field: source_field.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectConfig {
    /// Record field copied into the form value on confirm
    pub display_field: String,
    pub search_fields: Vec<String>,
    pub columns: Vec<ObjectColumn>,
    pub data: Vec<Record>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cascade: Vec<CascadeRule>,
}

impl ObjectConfig {
    pub fn new(display_field: &str, search_fields: &[&str], columns: Vec<ObjectColumn>) -> Self {
        Self {
            display_field: display_field.to_string(),
            search_fields: search_fields.iter().map(|s| s.to_string()).collect(),
            columns,
            data: Vec::new(),
            cascade: Vec::new(),
        }
    }

    pub fn with_data(mut self, data: Vec<Record>) -> Self {
        self.data = data;
        self
    }

    pub fn with_cascade(mut self, rules: &[(&str, &str)]) -> Self {
        self.cascade = rules
            .iter()
            .map(|(target, source)| CascadeRule::new(target, source))
            .collect();
        self
    }
}

// ============================================================================
// Field definition
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Select {
        options: Vec<String>,
    },
    YesNo,
    ObjectSelect {
        #[serde(rename = "objectConfig")]
        object_config: ObjectConfig,
    },
}

impl FieldKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Select { .. } => "select",
            Self::YesNo => "yes-no",
            Self::ObjectSelect { .. } => "object-select",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub key: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub section: Section,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional: Option<ShowCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional_disable: Option<DisableCondition>,
}

impl FieldDefinition {
    fn with_kind(key: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            section: Section::General,
            conditional: None,
            conditional_disable: None,
        }
    }

    pub fn text(key: &str, label: &str) -> Self {
        Self::with_kind(key, label, FieldKind::Text)
    }

    pub fn select(key: &str, label: &str, options: &[&str]) -> Self {
        let options = options.iter().map(|o| o.to_string()).collect();
        Self::with_kind(key, label, FieldKind::Select { options })
    }

    pub fn yes_no(key: &str, label: &str) -> Self {
        Self::with_kind(key, label, FieldKind::YesNo)
    }

    pub fn object_select(key: &str, label: &str, object_config: ObjectConfig) -> Self {
        Self::with_kind(key, label, FieldKind::ObjectSelect { object_config })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn in_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    pub fn show_when(mut self, depends_on: &str, value: &str) -> Self {
        self.conditional = Some(ShowCondition {
            depends_on: depends_on.to_string(),
            show_when: value.to_string(),
        });
        self
    }

    pub fn disable_when(mut self, depends_on: &str, value: &str) -> Self {
        self.conditional_disable = Some(DisableCondition {
            depends_on: depends_on.to_string(),
            disable_when: value.to_string(),
        });
        self
    }

    pub fn object_config(&self) -> Option<&ObjectConfig> {
        match &self.kind {
            FieldKind::ObjectSelect { object_config } => Some(object_config),
            _ => None,
        }
    }
}

// ============================================================================
// Field table
// ============================================================================

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("duplicate field key '{0}'")]
    DuplicateKey(String),
    #[error("field '{field}' depends on unknown key '{depends_on}'")]
    UnknownDependency { field: String, depends_on: String },
    #[error("invalid field table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered list of field definitions describing one form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldTable {
    pub(crate) fields: Vec<FieldDefinition>,
}

impl FieldTable {
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        Self { fields }
    }

    /// Parse a JSON array of field definitions and check its invariants.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let table: FieldTable = serde_json::from_str(json)?;
        table.validate_schema()?;
        Ok(table)
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn in_section(&self, section: Section) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(move |f| f.section == section)
    }

    /// Sections that have at least one field, in canonical order.
    pub fn sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.fields.iter().any(|f| f.section == *s))
            .collect()
    }

    /// Keys must be unique; `dependsOn` must name a field or a cascade target.
    pub fn validate_schema(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.key.as_str()) {
                return Err(SchemaError::DuplicateKey(field.key.clone()));
            }
        }

        let cascade_targets: HashSet<&str> = self
            .fields
            .iter()
            .filter_map(|f| f.object_config())
            .flat_map(|c| c.cascade.iter().map(|r| r.target_key.as_str()))
            .collect();

        for field in &self.fields {
            let deps = field
                .conditional
                .as_ref()
                .map(|c| c.depends_on.as_str())
                .into_iter()
                .chain(
                    field
                        .conditional_disable
                        .as_ref()
                        .map(|c| c.depends_on.as_str()),
                );
            for dep in deps {
                let known = dep != field.key && (seen.contains(dep) || cascade_targets.contains(dep));
                if !known {
                    return Err(SchemaError::UnknownDependency {
                        field: field.key.clone(),
                        depends_on: dep.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_table_uses_type_tag() {
        let json = r#"[
            {"key": "customerType", "label": "Customer Type", "type": "select",
             "options": ["Organization", "Person"], "required": true},
            {"key": "firstName", "label": "First Name", "type": "text",
             "conditional": {"dependsOn": "customerType", "showWhen": "Person"}},
            {"key": "taxExempt", "label": "Tax Exempt", "type": "yes-no", "section": "Credit"}
        ]"#;
        let table = FieldTable::from_json(json).unwrap();
        assert_eq!(table.fields().len(), 3);
        assert_eq!(
            table.field("customerType").unwrap().kind,
            FieldKind::Select {
                options: vec!["Organization".into(), "Person".into()]
            }
        );
        assert_eq!(table.field("taxExempt").unwrap().section, Section::Credit);
        assert_eq!(
            table.field("firstName").unwrap().conditional,
            Some(ShowCondition {
                depends_on: "customerType".into(),
                show_when: "Person".into()
            })
        );
    }

    #[test]
    fn test_object_select_json() {
        let json = r#"[{"key": "vendor", "label": "Vendor", "type": "object-select",
            "objectConfig": {"displayField": "name", "searchFields": ["name"],
                "columns": [{"key": "name", "label": "Name"}],
                "data": [{"name": "ACME"}]}}]"#;
        let table = FieldTable::from_json(json).unwrap();
        let config = table.field("vendor").unwrap().object_config().unwrap();
        assert_eq!(config.display_field, "name");
        assert_eq!(config.data.len(), 1);
        assert!(config.cascade.is_empty());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let table = FieldTable::new(vec![
            FieldDefinition::text("a", "A"),
            FieldDefinition::text("a", "A again"),
        ]);
        assert!(matches!(
            table.validate_schema(),
            Err(SchemaError::DuplicateKey(k)) if k == "a"
        ));
    }

    #[test]
    fn test_unknown_dependency_rejected() {
        let table = FieldTable::new(vec![
            FieldDefinition::text("a", "A").show_when("missing", "x"),
        ]);
        assert!(matches!(
            table.validate_schema(),
            Err(SchemaError::UnknownDependency { .. })
        ));
    }

    #[test]
    fn test_cascade_target_counts_as_known_key() {
        let config = ObjectConfig::new("code", &["code"], vec![])
            .with_cascade(&[("region", "region")]);
        let table = FieldTable::new(vec![
            FieldDefinition::object_select("owner", "Owner", config),
            FieldDefinition::text("regionNote", "Region note").show_when("region", "EU"),
        ]);
        assert!(table.validate_schema().is_ok());
    }

    #[test]
    fn test_sections_in_canonical_order() {
        let table = FieldTable::new(vec![
            FieldDefinition::text("email", "Email").in_section(Section::Contact),
            FieldDefinition::text("code", "Code").in_section(Section::MainCustomer),
            FieldDefinition::text("name", "Name"),
        ]);
        assert_eq!(
            table.sections(),
            vec![Section::MainCustomer, Section::General, Section::Contact]
        );
    }
}
