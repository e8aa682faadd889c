//! CSV templates and file import
//!
//! Each entity has a fixed template column order. Import maps file headers
//! onto template columns (exact title first, then containment) and turns every
//! non-blank row into form values.

use crate::domain::common::EntityKind;
use crate::shared::form::FormState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("'{0}' is not supported, save the sheet as CSV first")]
    UnsupportedFormat(String),
    #[error("file is empty")]
    Empty,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("cannot write CSV: {0}")]
    Write(String),
}

/// One template column and the form keys it fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateColumn {
    pub title: &'static str,
    pub keys: &'static [&'static str],
}

const fn col(title: &'static str, keys: &'static [&'static str]) -> TemplateColumn {
    TemplateColumn { title, keys }
}

const CUSTOMER_COLUMNS: [TemplateColumn; 10] = [
    col("Main Customer Code", &["mainCustomer", "mainCustomerCode"]),
    col("Main Customer Name", &["mainCustomerName"]),
    col("Company", &["company"]),
    col("Address", &["address"]),
    col("NIK/NPWP", &["nikNpwp"]),
    col("Customer Classification Group", &["customerClassificationGroup"]),
    col("Customer Group", &["customerGroup"]),
    col("Customer Type", &["customerType"]),
    col("Organization Name", &["organizationName"]),
    col("Search Name", &["searchName"]),
];

const SPARE_PART_COLUMNS: [TemplateColumn; 9] = [
    col("Item Number", &["itemNumber"]),
    col("Product Name", &["productName"]),
    col("Search Name", &["searchName"]),
    col("Item Group", &["itemGroup"]),
    col("Unit", &["unit"]),
    col("Vendor Code", &["vendor"]),
    col("Purchase Price", &["purchasePrice"]),
    col("Sales Price", &["salesPrice"]),
    col("Currency", &["currency"]),
];

const FINISHED_GOOD_COLUMNS: [TemplateColumn; 9] = [
    col("Item Number", &["itemNumber"]),
    col("Product Name", &["productName"]),
    col("Search Name", &["searchName"]),
    col("Product Category", &["productCategory"]),
    col("Brand", &["brand"]),
    col("Unit", &["unit"]),
    col("Shelf Life (Days)", &["shelfLifeDays"]),
    col("Price", &["price"]),
    col("Currency", &["currency"]),
];

pub fn template_columns(entity: EntityKind) -> &'static [TemplateColumn] {
    match entity {
        EntityKind::Customer => &CUSTOMER_COLUMNS,
        EntityKind::SpareParts => &SPARE_PART_COLUMNS,
        EntityKind::FinishedGoods => &FINISHED_GOOD_COLUMNS,
    }
}

pub fn template_file_name(entity: EntityKind) -> String {
    format!("{}_template.csv", entity.slug().replace('-', "_"))
}

/// Header-only template
pub fn template_csv(entity: EntityKind) -> Result<String, ImportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(template_columns(entity).iter().map(|c| c.title))?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ImportError::Write(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ImportError::Write(e.to_string()))
}

// ============================================================================
// Import
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub expected: String,
    /// Header found in the file
    pub found: Option<String>,
    pub file_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportBatch {
    pub file_name: String,
    pub rows: Vec<FormState>,
    pub column_mapping: Vec<ColumnMapping>,
    pub file_headers: Vec<String>,
}

impl ImportBatch {
    pub fn has_all_columns_mapped(&self) -> bool {
        self.column_mapping.iter().all(|m| m.found.is_some())
    }

    pub fn unmapped_count(&self) -> usize {
        self.column_mapping
            .iter()
            .filter(|m| m.found.is_none())
            .count()
    }
}

fn detect_delimiter(first_line: &str) -> u8 {
    if first_line.matches(';').count() > first_line.matches(',').count() {
        b';'
    } else {
        b','
    }
}

/// Exact (case-insensitive) header matches are claimed first; containment
/// only picks headers no other column has claimed, so each file column
/// feeds at most one template column.
fn map_columns(columns: &[TemplateColumn], headers: &[String]) -> Vec<ColumnMapping> {
    let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
    let titles: Vec<String> = columns.iter().map(|c| c.title.to_lowercase()).collect();
    let mut claimed = vec![false; headers.len()];
    let mut found: Vec<Option<usize>> = vec![None; columns.len()];

    for (slot, title) in found.iter_mut().zip(&titles) {
        if let Some(i) = (0..lowered.len()).find(|&i| !claimed[i] && lowered[i] == *title) {
            claimed[i] = true;
            *slot = Some(i);
        }
    }

    for (slot, title) in found.iter_mut().zip(&titles) {
        if slot.is_some() {
            continue;
        }
        let fuzzy = (0..lowered.len()).find(|&i| {
            let h = &lowered[i];
            !claimed[i] && !h.is_empty() && (h.contains(title.as_str()) || title.contains(h.as_str()))
        });
        if let Some(i) = fuzzy {
            claimed[i] = true;
            *slot = Some(i);
        }
    }

    columns
        .iter()
        .zip(found)
        .map(|(col, file_index)| ColumnMapping {
            expected: col.title.to_string(),
            found: file_index.map(|i| headers[i].clone()),
            file_index,
        })
        .collect()
}

/// Parses an uploaded file. Only CSV is accepted; blank rows are skipped.
pub fn parse_import(entity: EntityKind, file_name: &str, content: &str) -> Result<ImportBatch, ImportError> {
    let lower_name = file_name.to_lowercase();
    if lower_name.ends_with(".xlsx") || lower_name.ends_with(".xls") {
        return Err(ImportError::UnsupportedFormat(file_name.to_string()));
    }

    let content = content.trim_start_matches('\u{feff}');
    let first_line = content.lines().next().unwrap_or_default();
    if first_line.trim().is_empty() {
        return Err(ImportError::Empty);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(detect_delimiter(first_line))
        .from_reader(content.as_bytes());

    let mut raw: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        raw.push(record?.iter().map(str::to_string).collect());
    }
    let Some((headers, data)) = raw.split_first() else {
        return Err(ImportError::Empty);
    };

    let columns = template_columns(entity);
    let column_mapping = map_columns(columns, headers);

    let mut rows = Vec::new();
    for line in data {
        let mut state = FormState::new();
        let mut any = false;
        for (col, mapping) in columns.iter().zip(&column_mapping) {
            let value = mapping
                .file_index
                .and_then(|i| line.get(i))
                .cloned()
                .unwrap_or_default();
            any |= !value.is_empty();
            for key in col.keys {
                state.set_text(key, value.clone());
            }
        }
        if any {
            rows.push(state);
        }
    }

    log::info!(
        "parsed '{}': {} row(s), {} unmapped column(s)",
        file_name,
        rows.len(),
        column_mapping.iter().filter(|m| m.found.is_none()).count()
    );

    Ok(ImportBatch {
        file_name: file_name.to_string(),
        rows,
        column_mapping,
        file_headers: headers.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_template_header() {
        let csv = template_csv(EntityKind::Customer).unwrap();
        assert_eq!(
            csv.trim_end(),
            "Main Customer Code,Main Customer Name,Company,Address,NIK/NPWP,\
             Customer Classification Group,Customer Group,Customer Type,Organization Name,Search Name"
        );
        assert_eq!(template_file_name(EntityKind::SpareParts), "spare_parts_template.csv");
    }

    #[test]
    fn test_import_maps_columns_and_skips_blank_rows() {
        let content = "\u{feff}Search Name;main customer code;Company;Customer Group;Extra\n\
                       ACME;MC-0001;ID01;LOC_INT;x\n\
                       ;;;;\n\
                       \"Beta; Ltd\";MC-0002;VN01;EXP;\n";
        let batch = parse_import(EntityKind::Customer, "customers.csv", content).unwrap();

        assert_eq!(batch.rows.len(), 2);
        let first = &batch.rows[0];
        assert_eq!(first.text("searchName"), Some("ACME"));
        assert_eq!(first.text("mainCustomer"), Some("MC-0001"));
        assert_eq!(first.text("mainCustomerCode"), Some("MC-0001"));
        assert_eq!(first.text("address"), Some(""));
        assert_eq!(batch.rows[1].text("searchName"), Some("Beta; Ltd"));

        assert!(!batch.has_all_columns_mapped());
        assert_eq!(batch.unmapped_count(), 6);
        assert_eq!(batch.file_headers.len(), 5);
    }

    #[test]
    fn test_containment_match() {
        let content = "Item Number (SKU),Product Name\nSP-1,Belt\n";
        let batch = parse_import(EntityKind::SpareParts, "parts.csv", content).unwrap();
        assert_eq!(batch.column_mapping[0].found.as_deref(), Some("Item Number (SKU)"));
        assert_eq!(batch.rows[0].text("itemNumber"), Some("SP-1"));
    }

    #[test]
    fn test_header_feeds_one_column_only() {
        let content = "Name,Company\nAcme,ID01\n";
        let batch = parse_import(EntityKind::Customer, "customers.csv", content).unwrap();

        let mapped: Vec<_> = batch
            .column_mapping
            .iter()
            .filter(|m| m.found.as_deref() == Some("Name"))
            .map(|m| m.expected.as_str())
            .collect();
        assert_eq!(mapped, vec!["Main Customer Name"]);

        let row = &batch.rows[0];
        assert_eq!(row.text("mainCustomerName"), Some("Acme"));
        assert_eq!(row.text("organizationName"), Some(""));
        assert_eq!(row.text("searchName"), Some(""));
        assert_eq!(row.text("company"), Some("ID01"));
        assert_eq!(batch.unmapped_count(), 8);
    }

    #[test]
    fn test_exact_match_wins_over_earlier_containment() {
        // "Search Name" must not be taken by the fuzzy pass of an earlier column
        let content = "Organization,Search Name\nOrg A,acme\n";
        let batch = parse_import(EntityKind::Customer, "customers.csv", content).unwrap();
        let row = &batch.rows[0];
        assert_eq!(row.text("searchName"), Some("acme"));
        assert_eq!(row.text("organizationName"), Some("Org A"));
    }

    #[test]
    fn test_rejects_excel_and_empty() {
        assert!(matches!(
            parse_import(EntityKind::Customer, "Customers.XLSX", "whatever"),
            Err(ImportError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            parse_import(EntityKind::Customer, "empty.csv", ""),
            Err(ImportError::Empty)
        ));
    }
}
