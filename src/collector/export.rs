//! Collection and CSV export of extracted listing items.
//!
//! `collect` turns raw per-item field lookups into fixed-schema records;
//! `export_csv` serializes a batch to a comma-separated file. The CSV
//! document is built fully in memory and written with a single call, so a
//! failed export never leaves a half-written header behind.

use std::fs;
use std::path::Path;

use crate::collector::types::{CollectorResult, ExtractedItem, FieldLookup, ItemField, RawItem};

/// Decode a JSON array of raw item records, as handed over by the page-query
/// collaborator across a process boundary.
pub fn raw_items_from_json(json: &str) -> CollectorResult<Vec<RawItem>> {
    Ok(serde_json::from_str(json)?)
}

/// Assemble extracted items from a sequence of raw field sources.
///
/// Output order matches input encounter order; no deduplication, sorting, or
/// filtering. A field the source cannot resolve degrades to the "N/A"
/// sentinel and never aborts the remaining fields or items.
pub fn collect<S: FieldLookup>(sources: &[S]) -> Vec<ExtractedItem> {
    let items: Vec<ExtractedItem> = sources.iter().map(ExtractedItem::from_source).collect();
    println!("Total number of items collected: {}", items.len());
    items
}

/// Serialize items to a CSV string: header row first, one row per item.
pub fn items_to_csv(items: &[ExtractedItem]) -> String {
    let mut output = String::new();

    let header: Vec<&str> = ItemField::ALL.iter().map(|f| f.column_name()).collect();
    output.push_str(&header.join(","));
    output.push('\n');

    for item in items {
        let row: Vec<String> = item.values().iter().map(|v| escape_csv_field(v)).collect();
        output.push_str(&row.join(","));
        output.push('\n');
    }

    output
}

/// Write items as CSV to `destination`, overwriting any existing file.
///
/// Column order is the declared field order: name, price, variantCount,
/// availabilityStatus, detailLink. Fails with `CollectorError::Io` when the
/// destination cannot be written.
pub fn export_csv(items: &[ExtractedItem], destination: &Path) -> CollectorResult<()> {
    let csv = items_to_csv(items);
    fs::write(destination, csv)?;
    Ok(())
}

/// Escape a single CSV field, quoting when it contains commas, quotes, or newlines.
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
