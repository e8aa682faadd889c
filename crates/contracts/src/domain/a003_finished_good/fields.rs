//! Finished good request form

use crate::shared::form::{FieldDefinition as F, FieldTable, Section, NO, YES};
use once_cell::sync::Lazy;

pub static FINISHED_GOOD_FIELDS: Lazy<FieldTable> = Lazy::new(|| {
    FieldTable::new(vec![
        F::text("itemNumber", "Item Number").required(),
        F::text("productName", "Product Name").required(),
        F::text("searchName", "Search Name"),
        F::select(
            "productCategory",
            "Product Category",
            &["Beverages", "Snacks", "Dairy", "Personal Care"],
        )
        .required(),
        F::text("brand", "Brand"),
        F::select("unit", "Unit", &["PCS", "CTN", "PACK"]).required(),
        F::text("shelfLifeDays", "Shelf Life (Days)"),
        F::yes_no("exported", "Exported"),
        F::text("exportCountry", "Export Country")
            .required()
            .show_when("exported", YES),
        F::text("hsCode", "HS Code").disable_when("exported", NO),
        F::text("price", "Price").in_section(Section::Sales),
        F::select("currency", "Currency", &["IDR", "VND", "USD"])
            .required()
            .in_section(Section::Sales),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{is_disabled, FormState};

    #[test]
    fn test_export_rules() {
        FINISHED_GOOD_FIELDS.validate_schema().unwrap();

        let mut values = FormState::new();
        FINISHED_GOOD_FIELDS.apply_change(&mut values, "exported", YES);
        FINISHED_GOOD_FIELDS.apply_change(&mut values, "hsCode", "2202.10");
        assert!(FINISHED_GOOD_FIELDS.visible_fields(&values).any(|f| f.key == "exportCountry"));

        let cleared = FINISHED_GOOD_FIELDS.apply_change(&mut values, "exported", NO);
        assert_eq!(cleared, vec!["hsCode".to_string()]);
        let hs = FINISHED_GOOD_FIELDS.field("hsCode").unwrap();
        assert!(is_disabled(hs, &values, true));
        assert!(!FINISHED_GOOD_FIELDS.visible_fields(&values).any(|f| f.key == "exportCountry"));
    }
}
