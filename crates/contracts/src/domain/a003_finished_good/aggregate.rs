use crate::domain::common::{EntityKind, MasterDataEntity};
use crate::shared::form::{record, FieldTable, Record, Section, NO, YES};
use serde::{Deserialize, Serialize};

/// Finished good master record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishedGood {
    pub item_number: String,
    pub product_name: String,
    pub search_name: String,
    pub product_category: String,
    pub brand: String,
    pub unit: String,
    pub shelf_life_days: u32,
    pub exported: bool,
    pub export_country: String,
    pub hs_code: String,

    pub price: String,
    pub currency: String,
}

impl MasterDataEntity for FinishedGood {
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
                ("productCategory", self.product_category.clone()),
                ("brand", self.brand.clone()),
                ("unit", self.unit.clone()),
                ("shelfLifeDays", self.shelf_life_days.to_string()),
                ("exported", if self.exported { YES } else { NO }.to_string()),
                ("exportCountry", self.export_country.clone()),
                ("hsCode", self.hs_code.clone()),
            ],
            Section::Sales => vec![
                ("price", self.price.clone()),
                ("currency", self.currency.clone()),
            ],
            _ => Vec::new(),
        }
    }

    fn lookup_record(&self) -> Record {
        record(&[
            ("code", self.item_number.as_str()),
            ("name", self.product_name.as_str()),
            ("productCategory", self.product_category.as_str()),
            ("brand", self.brand.as_str()),
            ("unit", self.unit.as_str()),
            ("price", self.price.as_str()),
            ("currency", self.currency.as_str()),
        ])
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "finished_good"
    }

    fn element_name() -> &'static str {
        "Finished Good"
    }

    fn list_name() -> &'static str {
        "Finished Goods"
    }

    fn entity_kind() -> EntityKind {
        EntityKind::FinishedGoods
    }

    fn copy_sections() -> &'static [Section] {
        &[Section::General]
    }

    fn field_table() -> &'static FieldTable {
        &super::fields::FINISHED_GOOD_FIELDS
    }

    fn list_columns() -> &'static [(&'static str, &'static str)] {
        &[
            ("code", "Item Number"),
            ("name", "Product Name"),
            ("productCategory", "Category"),
            ("brand", "Brand"),
            ("unit", "Unit"),
            ("price", "Price"),
            ("currency", "Currency"),
        ]
    }
}
