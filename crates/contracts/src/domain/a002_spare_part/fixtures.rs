use super::aggregate::SparePart;
use crate::shared::form::{record, Record};

pub fn vendor_lookup() -> Vec<Record> {
    vec![
        record(&[("vendorCode", "V-2001"), ("name", "SKF Indonesia"), ("country", "Indonesia")]),
        record(&[("vendorCode", "V-2002"), ("name", "Gates Vietnam"), ("country", "Vietnam")]),
        record(&[("vendorCode", "V-2003"), ("name", "Parker Hannifin Asia"), ("country", "Singapore")]),
    ]
}

#[allow(clippy::too_many_arguments)]
fn part(
    item_number: &str,
    product_name: &str,
    item_group: &str,
    unit: &str,
    vendor_code: &str,
    critical_reason: Option<&str>,
    purchase_price: &str,
    sales_price: &str,
    currency: &str,
) -> SparePart {
    SparePart {
        item_number: item_number.to_string(),
        product_name: product_name.to_string(),
        search_name: product_name.to_uppercase(),
        item_group: item_group.to_string(),
        unit: unit.to_string(),
        vendor_code: vendor_code.to_string(),
        critical_part: critical_reason.is_some(),
        critical_reason: critical_reason.unwrap_or_default().to_string(),
        purchase_price: purchase_price.to_string(),
        sales_price: sales_price.to_string(),
        currency: currency.to_string(),
    }
}

pub fn spare_parts() -> Vec<SparePart> {
    vec![
        part("SP-30001", "Deep Groove Ball Bearing 6204", "Bearings", "PCS", "V-2001", None, "45000", "62000", "IDR"),
        part("SP-30002", "V-Belt B-52", "Belts", "PCS", "V-2002", None, "120000", "165000", "VND"),
        part(
            "SP-30003",
            "Hydraulic Pump Seal Kit",
            "Hydraulics",
            "SET",
            "V-2003",
            Some("Line stoppage if unavailable"),
            "85",
            "130",
            "USD",
        ),
    ]
}
