use crate::domain::common::{EntityKind, MasterDataEntity};
use crate::shared::form::{record, FieldTable, Record, Section, NO, YES};
use serde::{Deserialize, Serialize};

/// Spare part master record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePart {
    pub item_number: String,
    pub product_name: String,
    pub search_name: String,
    pub item_group: String,
    pub unit: String,
    pub vendor_code: String,
    pub critical_part: bool,
    pub critical_reason: String,

    pub purchase_price: String,
    pub sales_price: String,
    pub currency: String,
}

impl MasterDataEntity for SparePart {
    fn code(&self) -> &str {
        &self.item_number
    }

    fn description(&self) -> &str {
        &self.product_name
    }

    fn section_values(&self, section: Section) -> Vec<(&'static str, String)> {
        match section {
            Section::General => vec![
                ("itemNumber", self.item_number.clone()),
                ("productName", self.product_name.clone()),
                ("searchName", self.search_name.clone()),
                ("itemGroup", self.item_group.clone()),
                ("unit", self.unit.clone()),
                ("vendor", self.vendor_code.clone()),
                ("criticalPart", if self.critical_part { YES } else { NO }.to_string()),
                ("criticalReason", self.critical_reason.clone()),
            ],
            Section::Sales => vec![
                ("purchasePrice", self.purchase_price.clone()),
                ("salesPrice", self.sales_price.clone()),
                ("currency", self.currency.clone()),
            ],
            _ => Vec::new(),
        }
    }

    fn lookup_record(&self) -> Record {
        record(&[
            ("code", self.item_number.as_str()),
            ("name", self.product_name.as_str()),
            ("itemGroup", self.item_group.as_str()),
            ("unit", self.unit.as_str()),
            ("vendor", self.vendor_code.as_str()),
            ("salesPrice", self.sales_price.as_str()),
            ("currency", self.currency.as_str()),
        ])
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "spare_part"
    }

    fn element_name() -> &'static str {
        "Spare Part"
    }

    fn list_name() -> &'static str {
        "Spare Parts"
    }

    fn entity_kind() -> EntityKind {
        EntityKind::SpareParts
    }

    fn copy_sections() -> &'static [Section] {
        &[Section::General]
    }

    fn field_table() -> &'static FieldTable {
        &super::fields::SPARE_PART_FIELDS
    }

    fn list_columns() -> &'static [(&'static str, &'static str)] {
        &[
            ("code", "Item Number"),
            ("name", "Product Name"),
            ("itemGroup", "Item Group"),
            ("unit", "Unit"),
            ("vendor", "Vendor"),
            ("salesPrice", "Sales Price"),
            ("currency", "Currency"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_spare_part::fixtures::spare_parts;

    #[test]
    fn test_section_values_match_field_table() {
        let table = SparePart::field_table();
        for part in spare_parts() {
            for section in Section::ALL {
                for (key, _) in part.section_values(section) {
                    assert_eq!(table.field(key).map(|f| f.section), Some(section), "{key}");
                }
            }
        }
    }
}
