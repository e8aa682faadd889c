use crate::domain::common::{EntityKind, MasterDataEntity};
use crate::shared::form::{record, FieldTable, Record, Section, NO, YES};
use serde::{Deserialize, Serialize};

fn yes_no(flag: bool) -> String {
    if flag { YES } else { NO }.to_string()
}

// ============================================================================
// Address rows
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRow {
    pub address_type: String,
    pub street: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub is_primary: bool,
}

impl AddressRow {
    pub const COLUMNS: [(&'static str, &'static str); 6] = [
        ("addressType", "Type"),
        ("street", "Street"),
        ("city", "City"),
        ("country", "Country"),
        ("postalCode", "Postal Code"),
        ("isPrimary", "Primary"),
    ];

    pub fn to_record(&self) -> Record {
        record(&[
            ("addressType", self.address_type.as_str()),
            ("street", self.street.as_str()),
            ("city", self.city.as_str()),
            ("country", self.country.as_str()),
            ("postalCode", self.postal_code.as_str()),
            ("isPrimary", yes_no(self.is_primary).as_str()),
        ])
    }

    /// Empty row for the address editor
    pub fn blank_record() -> Record {
        Self::COLUMNS
            .iter()
            .map(|(key, _)| (key.to_string(), String::new()))
            .collect()
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Customer master record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub code: String,

    // Main customer block
    pub main_customer: String,
    pub main_customer_name: String,
    pub company: String,
    pub address: String,
    pub nik_npwp: String,

    // General
    pub search_name: String,
    pub classification_group: String,
    pub customer_group: String,
    pub customer_account: String,
    pub customer_type: String,
    pub organization_name: String,
    pub first_name: String,
    pub last_name: String,
    pub tax_exempt: bool,
    pub tax_exempt_number: String,

    pub addresses: Vec<AddressRow>,

    // Contact
    pub email: String,
    pub phone: String,
    pub contact_person: String,

    // Sales
    pub salesperson: String,
    pub sales_district: String,
    pub price_group: String,

    // Credit
    pub credit_limit: String,
    pub credit_rating: String,
    pub on_hold: bool,

    // Payment
    pub terms_of_payment: String,
    pub method_of_payment: String,
    pub currency: String,
}

impl Customer {
    pub fn display_name(&self) -> String {
        if self.customer_type == "Person" {
            format!("{} {}", self.first_name, self.last_name).trim().to_string()
        } else {
            self.organization_name.clone()
        }
    }
}

impl MasterDataEntity for Customer {
    fn code(&self) -> &str {
        &self.code
    }

    fn description(&self) -> &str {
        if self.customer_type == "Person" {
            &self.search_name
        } else {
            &self.organization_name
        }
    }

    fn section_values(&self, section: Section) -> Vec<(&'static str, String)> {
        match section {
            Section::MainCustomer => vec![
                ("mainCustomer", self.main_customer.clone()),
                ("mainCustomerCode", self.main_customer.clone()),
                ("mainCustomerName", self.main_customer_name.clone()),
                ("company", self.company.clone()),
                ("address", self.address.clone()),
                ("nikNpwp", self.nik_npwp.clone()),
            ],
            Section::General => vec![
                ("searchName", self.search_name.clone()),
                ("customerClassificationGroup", self.classification_group.clone()),
                ("customerGroup", self.customer_group.clone()),
                ("customerAccount", self.customer_account.clone()),
                ("customerType", self.customer_type.clone()),
                ("organizationName", self.organization_name.clone()),
                ("firstName", self.first_name.clone()),
                ("lastName", self.last_name.clone()),
                ("taxExempt", yes_no(self.tax_exempt)),
                ("taxExemptNumber", self.tax_exempt_number.clone()),
            ],
            // Address rows are carried separately
            Section::Address => Vec::new(),
            Section::Contact => vec![
                ("primaryEmail", self.email.clone()),
                ("primaryPhone", self.phone.clone()),
                ("contactPerson", self.contact_person.clone()),
            ],
            Section::Sales => vec![
                ("salesperson", self.salesperson.clone()),
                ("salesDistrict", self.sales_district.clone()),
                ("priceGroup", self.price_group.clone()),
            ],
            Section::Credit => vec![
                ("creditLimit", self.credit_limit.clone()),
                ("creditRating", self.credit_rating.clone()),
                ("onHold", yes_no(self.on_hold)),
            ],
            Section::Payment => vec![
                ("termsOfPayment", self.terms_of_payment.clone()),
                ("methodOfPayment", self.method_of_payment.clone()),
                ("currency", self.currency.clone()),
            ],
        }
    }

    fn nested_rows(&self) -> Vec<Record> {
        self.addresses.iter().map(AddressRow::to_record).collect()
    }

    fn lookup_record(&self) -> Record {
        record(&[
            ("code", self.code.as_str()),
            ("name", self.display_name().as_str()),
            ("mainCustomer", self.main_customer.as_str()),
            ("customerGroup", self.customer_group.as_str()),
            ("customerType", self.customer_type.as_str()),
            ("currency", self.currency.as_str()),
        ])
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }

    fn entity_kind() -> EntityKind {
        EntityKind::Customer
    }

    fn copy_sections() -> &'static [Section] {
        &[Section::MainCustomer, Section::General]
    }

    fn field_table() -> &'static FieldTable {
        &super::fields::CUSTOMER_FIELDS
    }

    fn row_columns() -> &'static [(&'static str, &'static str)] {
        &AddressRow::COLUMNS
    }

    fn list_columns() -> &'static [(&'static str, &'static str)] {
        &[
            ("code", "Code"),
            ("name", "Name"),
            ("mainCustomer", "Main Customer"),
            ("customerGroup", "Customer Group"),
            ("customerType", "Type"),
            ("currency", "Currency"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::fixtures::customers;

    #[test]
    fn test_every_section_value_is_a_known_field() {
        let table = Customer::field_table();
        for customer in customers() {
            for section in Section::ALL {
                for (key, _) in customer.section_values(section) {
                    let field = table
                        .field(key)
                        .unwrap_or_else(|| panic!("unknown field {key}"));
                    assert_eq!(field.section, section, "{key} is in the wrong section");
                }
            }
        }
    }

    #[test]
    fn test_lookup_record_name() {
        let person = customers()
            .into_iter()
            .find(|c| c.customer_type == "Person")
            .unwrap();
        let rec = person.lookup_record();
        assert_eq!(rec["name"], format!("{} {}", person.first_name, person.last_name));
        assert_eq!(Customer::full_name(), "a001_customer");
    }
}
