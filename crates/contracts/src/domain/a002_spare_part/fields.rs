//! Spare part request form

use super::fixtures::vendor_lookup;
use crate::shared::form::{FieldDefinition as F, FieldTable, ObjectColumn, ObjectConfig, Section, YES};
use once_cell::sync::Lazy;

pub static SPARE_PART_FIELDS: Lazy<FieldTable> = Lazy::new(|| {
    let vendor = ObjectConfig::new(
        "vendorCode",
        &["vendorCode", "name", "country"],
        vec![
            ObjectColumn::new("vendorCode", "Vendor Code"),
            ObjectColumn::new("name", "Name"),
            ObjectColumn::new("country", "Country"),
        ],
    )
    .with_data(vendor_lookup());

    FieldTable::new(vec![
        F::text("itemNumber", "Item Number").required(),
        F::text("productName", "Product Name").required(),
        F::text("searchName", "Search Name"),
        F::select(
            "itemGroup",
            "Item Group",
            &["Bearings", "Filters", "Belts", "Electrical", "Hydraulics"],
        )
        .required(),
        F::select("unit", "Unit", &["PCS", "SET", "BOX", "M"]).required(),
        F::object_select("vendor", "Vendor", vendor),
        F::yes_no("criticalPart", "Critical Part"),
        F::text("criticalReason", "Critical Reason")
            .required()
            .show_when("criticalPart", YES),
        F::text("purchasePrice", "Purchase Price").in_section(Section::Sales),
        F::text("salesPrice", "Sales Price").in_section(Section::Sales),
        F::select("currency", "Currency", &["IDR", "VND", "USD"])
            .required()
            .in_section(Section::Sales),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;

    #[test]
    fn test_schema_and_critical_reason() {
        SPARE_PART_FIELDS.validate_schema().unwrap();

        let mut values = FormState::new();
        values.set_text("criticalPart", YES);
        let errors = SPARE_PART_FIELDS.validate(&values);
        assert!(errors.get("criticalReason").is_some());

        values.set_text("criticalPart", "no");
        let errors = SPARE_PART_FIELDS.validate(&values);
        assert!(errors.get("criticalReason").is_none());
    }
}
