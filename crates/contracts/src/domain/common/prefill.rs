//! Initial form values for New / Copy / Edit requests

use super::{MasterDataEntity, RequestType};
use crate::shared::form::{FieldTable, RequestForm, Section};

/// - `New`: empty form.
/// - `Copy`: only the entity's copy sections; nested rows stay empty.
/// - `Edit`: every section plus nested rows.
///
/// A missing source yields an empty form. Pre-filled object-select values
/// also get their lookup record, as if picked in the lookup.
pub fn prefill<E: MasterDataEntity>(request_type: RequestType, source: Option<&E>) -> RequestForm {
    let mut form = RequestForm::default();
    let Some(source) = source else {
        return form;
    };

    let sections: &[Section] = match request_type {
        RequestType::New => return form,
        RequestType::Copy => E::copy_sections(),
        RequestType::Edit => &Section::ALL,
    };

    for section in sections {
        for (key, value) in source.section_values(*section) {
            form.values.set_text(key, value);
        }
    }

    if request_type == RequestType::Edit {
        form.rows = source.nested_rows();
    }

    attach_lookup_records(E::field_table(), &mut form);
    form
}

fn attach_lookup_records(table: &FieldTable, form: &mut RequestForm) {
    for field in table.fields() {
        let Some(config) = field.object_config() else {
            continue;
        };
        let Some(value) = form
            .values
            .text(&field.key)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
        else {
            continue;
        };
        let found = config
            .data
            .iter()
            .find(|r| r.get(&config.display_field).map(String::as_str) == Some(value.as_str()))
            .cloned();
        match found {
            Some(record) => form.values.set_object(&field.key, record),
            None => log::debug!("no lookup record for {} = '{}'", field.key, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::fixtures::customers;
    use crate::domain::a001_customer::Customer;
    use crate::domain::a002_spare_part::fixtures::spare_parts;

    fn customer() -> Customer {
        customers().into_iter().next().unwrap()
    }

    #[test]
    fn test_copy_skips_contact_section() {
        let source = customer();
        assert!(!source.email.is_empty());

        let form = prefill(RequestType::Copy, Some(&source));
        assert!(form.values.is_blank("primaryEmail"));
        assert_eq!(form.values.text("searchName"), Some(source.search_name.as_str()));
        assert_eq!(form.values.text("mainCustomerCode"), Some(source.main_customer.as_str()));
        assert!(form.rows.is_empty());
    }

    #[test]
    fn test_edit_fills_everything() {
        let source = customer();
        let form = prefill(RequestType::Edit, Some(&source));
        assert_eq!(form.values.text("primaryEmail"), Some(source.email.as_str()));
        assert_eq!(form.values.text("currency"), Some(source.currency.as_str()));
        assert_eq!(form.rows.len(), source.addresses.len());
        assert!(!form.rows.is_empty());
    }

    #[test]
    fn test_prefill_keeps_lookup_record() {
        let source = customer();
        for request_type in [RequestType::Copy, RequestType::Edit] {
            let form = prefill(request_type, Some(&source));
            let picked = form
                .values
                .object("mainCustomer")
                .expect("main customer record attached");
            assert_eq!(picked["mainCustomer"], source.main_customer);
            assert_eq!(picked["mainCustomerName"], source.main_customer_name);
        }

        // salesperson lives in a section Copy does not fill
        let copy = prefill(RequestType::Copy, Some(&source));
        assert!(copy.values.object("salesperson").is_none());
        let edit = prefill(RequestType::Edit, Some(&source));
        assert_eq!(
            edit.values.object("salesperson").map(|r| r["name"].clone()),
            Some(source.salesperson.clone())
        );
    }

    #[test]
    fn test_new_is_empty() {
        let source = customer();
        assert!(prefill(RequestType::New, Some(&source)).values.is_empty());
        assert!(prefill::<Customer>(RequestType::Edit, None).values.is_empty());
    }

    #[test]
    fn test_spare_part_copy_uses_general_only() {
        let part = spare_parts().into_iter().next().unwrap();
        let copy = prefill(RequestType::Copy, Some(&part));
        let edit = prefill(RequestType::Edit, Some(&part));
        assert!(copy.values.is_blank("purchasePrice"));
        assert!(!edit.values.is_blank("purchasePrice"));
        assert_eq!(copy.values.text("productName"), edit.values.text("productName"));
    }
}
