//! Customer request form

use super::fixtures::{main_customer_lookup, salesperson_lookup};
use crate::shared::form::{FieldDefinition as F, FieldTable, ObjectColumn, ObjectConfig, Section, YES};
use once_cell::sync::Lazy;

pub const CUSTOMER_GROUPS: [&str; 4] = ["LOC_INT", "LOC_EXT", "EXP", "ICO"];
pub const CUSTOMER_TYPES: [&str; 2] = ["Organization", "Person"];

fn main_customer_config() -> ObjectConfig {
    ObjectConfig::new(
        "mainCustomer",
        &["mainCustomer", "mainCustomerName", "company"],
        vec![
            ObjectColumn::new("mainCustomer", "Code"),
            ObjectColumn::new("mainCustomerName", "Name"),
            ObjectColumn::new("company", "Company"),
            ObjectColumn::new("nikNpwp", "NIK/NPWP"),
        ],
    )
    .with_data(main_customer_lookup())
    .with_cascade(&[
        ("mainCustomerCode", "mainCustomer"),
        ("mainCustomerName", "mainCustomerName"),
        ("company", "company"),
        ("address", "address"),
        ("nikNpwp", "nikNpwp"),
    ])
}

fn salesperson_config() -> ObjectConfig {
    ObjectConfig::new(
        "name",
        &["name", "employeeId", "region"],
        vec![
            ObjectColumn::new("employeeId", "Employee ID"),
            ObjectColumn::new("name", "Name"),
            ObjectColumn::new("region", "Region"),
        ],
    )
    .with_data(salesperson_lookup())
}

pub static CUSTOMER_FIELDS: Lazy<FieldTable> = Lazy::new(|| {
    use Section::*;

    FieldTable::new(vec![
        // Main customer
        F::object_select("mainCustomer", "Main Customer", main_customer_config())
            .required()
            .in_section(MainCustomer),
        F::text("mainCustomerCode", "Main Customer Code").in_section(MainCustomer),
        F::text("mainCustomerName", "Main Customer Name").in_section(MainCustomer),
        F::text("company", "Company").in_section(MainCustomer),
        F::text("address", "Address").in_section(MainCustomer),
        F::text("nikNpwp", "NIK/NPWP").in_section(MainCustomer),
        // General
        F::text("searchName", "Search Name").required(),
        F::select(
            "customerClassificationGroup",
            "Customer Classification Group",
            &["Key Account", "Distributor", "Retail", "Project"],
        ),
        F::select("customerGroup", "Customer Group", &CUSTOMER_GROUPS).required(),
        F::text("customerAccount", "Customer Account")
            .required()
            .disable_when("customerGroup", "LOC_EXT"),
        F::select("customerType", "Customer Type", &CUSTOMER_TYPES).required(),
        F::text("organizationName", "Organization Name")
            .required()
            .show_when("customerType", "Organization"),
        F::text("firstName", "First Name")
            .required()
            .show_when("customerType", "Person"),
        F::text("lastName", "Last Name").show_when("customerType", "Person"),
        F::yes_no("taxExempt", "Tax Exempt"),
        F::text("taxExemptNumber", "Tax Exempt Number")
            .required()
            .show_when("taxExempt", YES),
        // Contact
        F::text("primaryEmail", "Primary Email").required().in_section(Contact),
        F::text("primaryPhone", "Primary Phone").in_section(Contact),
        F::text("contactPerson", "Contact Person").in_section(Contact),
        // Sales
        F::object_select("salesperson", "Salesperson", salesperson_config()).in_section(Sales),
        F::select("salesDistrict", "Sales District", &["North", "South", "East", "West"])
            .in_section(Sales),
        F::select("priceGroup", "Price Group", &["Retail", "Wholesale", "Distributor"])
            .in_section(Sales),
        // Credit
        F::text("creditLimit", "Credit Limit").in_section(Credit),
        F::select("creditRating", "Credit Rating", &["A", "B", "C"]).in_section(Credit),
        F::yes_no("onHold", "On Hold").in_section(Credit),
        // Payment
        F::select(
            "termsOfPayment",
            "Terms of Payment",
            &["Net 30", "Net 45", "Net 60", "COD"],
        )
        .in_section(Payment),
        F::select(
            "methodOfPayment",
            "Method of Payment",
            &["Bank Transfer", "Cheque", "Cash"],
        )
        .in_section(Payment),
        F::select("currency", "Currency", &["IDR", "VND", "USD"])
            .required()
            .in_section(Payment),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{is_disabled, should_show, FormState};
    use crate::shared::object_select::ObjectSelectSession;

    #[test]
    fn test_table_schema_is_valid() {
        CUSTOMER_FIELDS.validate_schema().unwrap();
    }

    #[test]
    fn test_person_fields_follow_customer_type() {
        let first_name = CUSTOMER_FIELDS.field("firstName").unwrap();
        let org_name = CUSTOMER_FIELDS.field("organizationName").unwrap();
        let mut values = FormState::new();

        values.set_text("customerType", "Organization");
        assert!(!should_show(first_name, &values));
        assert!(should_show(org_name, &values));

        values.set_text("customerType", "Person");
        assert!(should_show(first_name, &values));
        assert!(!should_show(org_name, &values));
    }

    #[test]
    fn test_loc_ext_clears_customer_account() {
        let account = CUSTOMER_FIELDS.field("customerAccount").unwrap();
        let mut values = FormState::new();
        CUSTOMER_FIELDS.apply_change(&mut values, "customerAccount", "1200-01");

        CUSTOMER_FIELDS.apply_change(&mut values, "customerGroup", "LOC_EXT");
        assert_eq!(values.text("customerAccount"), Some(""));
        assert!(is_disabled(account, &values, true));
        let rendered = CUSTOMER_FIELDS
            .render(&values, true)
            .into_iter()
            .find(|f| f.key == "customerAccount")
            .unwrap();
        assert!(rendered.disabled);

        for group in ["LOC_INT", "EXP", "ICO"] {
            CUSTOMER_FIELDS.apply_change(&mut values, "customerGroup", group);
            assert!(!is_disabled(account, &values, true));
            assert_eq!(values.text("customerAccount"), Some(""));
        }
    }

    #[test]
    fn test_main_customer_cascade_fills_block() {
        let field = CUSTOMER_FIELDS.field("mainCustomer").unwrap();
        let session = ObjectSelectSession::open(field).unwrap();
        let record = session.search("")[0].clone();
        let mut values = FormState::new();

        session.confirm(&record, &CUSTOMER_FIELDS, &mut values);

        for (target, source) in [
            ("mainCustomer", "mainCustomer"),
            ("mainCustomerCode", "mainCustomer"),
            ("mainCustomerName", "mainCustomerName"),
            ("company", "company"),
            ("address", "address"),
            ("nikNpwp", "nikNpwp"),
        ] {
            assert_eq!(values.text(target), Some(record[source].as_str()), "{target}");
        }
    }

    #[test]
    fn test_salesperson_has_no_cascade() {
        let field = CUSTOMER_FIELDS.field("salesperson").unwrap();
        let session = ObjectSelectSession::open(field).unwrap();
        let record = session.search("")[0].clone();
        let mut values = FormState::new();

        session.confirm(&record, &CUSTOMER_FIELDS, &mut values);

        assert_eq!(values.text("salesperson"), Some(record["name"].as_str()));
        // value + raw object only
        assert_eq!(values.len(), 2);
    }
}
