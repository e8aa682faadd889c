//! Seed data for customers and customer lookups

use super::aggregate::{AddressRow, Customer};
use crate::shared::form::{record, Record};

pub fn main_customer_lookup() -> Vec<Record> {
    vec![
        record(&[
            ("mainCustomer", "MC-0001"),
            ("mainCustomerName", "PT Sinar Jaya Abadi"),
            ("company", "ID01"),
            ("address", "Jl. Jend. Sudirman Kav. 52, Jakarta"),
            ("nikNpwp", "01.234.567.8-012.000"),
        ]),
        record(&[
            ("mainCustomer", "MC-0002"),
            ("mainCustomerName", "Saigon Trading Co., Ltd"),
            ("company", "VN01"),
            ("address", "35 Le Loi, District 1, Ho Chi Minh City"),
            ("nikNpwp", "0301234567"),
        ]),
        record(&[
            ("mainCustomer", "MC-0003"),
            ("mainCustomerName", "CV Makmur Sentosa"),
            ("company", "ID01"),
            ("address", "Jl. Pemuda 118, Surabaya"),
            ("nikNpwp", "02.987.654.3-611.000"),
        ]),
        record(&[
            ("mainCustomer", "MC-0004"),
            ("mainCustomerName", "Hanoi Industrial JSC"),
            ("company", "VN02"),
            ("address", "88 Tran Hung Dao, Hoan Kiem, Ha Noi"),
            ("nikNpwp", "0107654321"),
        ]),
    ]
}

pub fn salesperson_lookup() -> Vec<Record> {
    vec![
        record(&[("employeeId", "E-1001"), ("name", "Andi Pratama"), ("region", "Java")]),
        record(&[("employeeId", "E-1002"), ("name", "Nguyen Van An"), ("region", "South Vietnam")]),
        record(&[("employeeId", "E-1003"), ("name", "Siti Rahma"), ("region", "Sumatra")]),
        record(&[("employeeId", "E-1004"), ("name", "Tran Thi Mai"), ("region", "North Vietnam")]),
    ]
}

fn address(address_type: &str, street: &str, city: &str, country: &str, postal_code: &str, is_primary: bool) -> AddressRow {
    AddressRow {
        address_type: address_type.to_string(),
        street: street.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        postal_code: postal_code.to_string(),
        is_primary,
    }
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            code: "C-10001".into(),
            main_customer: "MC-0001".into(),
            main_customer_name: "PT Sinar Jaya Abadi".into(),
            company: "ID01".into(),
            address: "Jl. Jend. Sudirman Kav. 52, Jakarta".into(),
            nik_npwp: "01.234.567.8-012.000".into(),
            search_name: "SINAR JAYA".into(),
            classification_group: "Key Account".into(),
            customer_group: "LOC_INT".into(),
            customer_account: "1200-0001".into(),
            customer_type: "Organization".into(),
            organization_name: "PT Sinar Jaya Abadi".into(),
            first_name: String::new(),
            last_name: String::new(),
            tax_exempt: false,
            tax_exempt_number: String::new(),
            addresses: vec![
                address("Billing", "Jl. Jend. Sudirman Kav. 52", "Jakarta", "Indonesia", "12190", true),
                address("Delivery", "Kawasan Industri Pulogadung Blok C", "Jakarta", "Indonesia", "13920", false),
            ],
            email: "purchasing@sinarjaya.co.id".into(),
            phone: "+62 21 5790 1234".into(),
            contact_person: "Budi Hartono".into(),
            salesperson: "Andi Pratama".into(),
            sales_district: "West".into(),
            price_group: "Wholesale".into(),
            credit_limit: "500000000".into(),
            credit_rating: "A".into(),
            on_hold: false,
            terms_of_payment: "Net 30".into(),
            method_of_payment: "Bank Transfer".into(),
            currency: "IDR".into(),
        },
        Customer {
            code: "C-10002".into(),
            main_customer: "MC-0002".into(),
            main_customer_name: "Saigon Trading Co., Ltd".into(),
            company: "VN01".into(),
            address: "35 Le Loi, District 1, Ho Chi Minh City".into(),
            nik_npwp: "0301234567".into(),
            search_name: "SAIGON TRADING".into(),
            classification_group: "Distributor".into(),
            customer_group: "EXP".into(),
            customer_account: "2200-0107".into(),
            customer_type: "Organization".into(),
            organization_name: "Saigon Trading Co., Ltd".into(),
            first_name: String::new(),
            last_name: String::new(),
            tax_exempt: true,
            tax_exempt_number: "VN-TE-2023-0091".into(),
            addresses: vec![address("Billing", "35 Le Loi, District 1", "Ho Chi Minh City", "Vietnam", "700000", true)],
            email: "orders@saigontrading.vn".into(),
            phone: "+84 28 3822 4455".into(),
            contact_person: "Pham Quoc Bao".into(),
            salesperson: "Nguyen Van An".into(),
            sales_district: "South".into(),
            price_group: "Distributor".into(),
            credit_limit: "250000".into(),
            credit_rating: "B".into(),
            on_hold: false,
            terms_of_payment: "Net 45".into(),
            method_of_payment: "Bank Transfer".into(),
            currency: "USD".into(),
        },
        Customer {
            code: "C-10003".into(),
            main_customer: "MC-0003".into(),
            main_customer_name: "CV Makmur Sentosa".into(),
            company: "ID01".into(),
            address: "Jl. Pemuda 118, Surabaya".into(),
            nik_npwp: "3578012345670001".into(),
            search_name: "DEWI LESTARI".into(),
            classification_group: "Retail".into(),
            customer_group: "LOC_EXT".into(),
            customer_account: String::new(),
            customer_type: "Person".into(),
            organization_name: String::new(),
            first_name: "Dewi".into(),
            last_name: "Lestari".into(),
            tax_exempt: false,
            tax_exempt_number: String::new(),
            addresses: vec![address("Billing", "Jl. Pemuda 118", "Surabaya", "Indonesia", "60271", true)],
            email: "dewi.lestari@gmail.com".into(),
            phone: "+62 812 3456 7890".into(),
            contact_person: "Dewi Lestari".into(),
            salesperson: "Siti Rahma".into(),
            sales_district: "East".into(),
            price_group: "Retail".into(),
            credit_limit: "25000000".into(),
            credit_rating: "C".into(),
            on_hold: true,
            terms_of_payment: "COD".into(),
            method_of_payment: "Cash".into(),
            currency: "IDR".into(),
        },
    ]
}
