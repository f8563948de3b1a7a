//! CSV normalization: raw upstream CSV to ordered records.
//!
//! Gov open-data CSV is UTF-8, sometimes BOM-prefixed, comma-delimited,
//! with the header row defining field names. Values stay strings; nothing
//! downstream benefits from guessing numeric types out of a spreadsheet
//! export.

use serde_json::Value;
use taifin_types::Record;

/// Parse a CSV body into records keyed by the header row.
///
/// Rows shorter than the header simply omit the trailing fields (the record
/// model allows absent values); rows longer than the header drop the
/// overflow. Returns the parse failure reason on malformed input; the caller
/// wraps it with the URL into a typed failure.
pub fn parse_csv_records(text: &str) -> Result<Vec<Record>, String> {
    let text = text.trim_start_matches('\u{feff}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(|error| error.to_string())?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|error| error.to_string())?;
        let mut record = Record::new();
        for (name, field) in headers.iter().zip(row.iter()) {
            record.insert(name.to_string(), Value::String(field.to_string()));
        }
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn header_row_defines_field_names() {
        let records = parse_csv_records("代號,名稱,收盤\n2330,台積電,980\n2317,鴻海,185\n").expect("parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["代號"], json!("2330"));
        assert_eq!(records[1]["名稱"], json!("鴻海"));
    }

    #[test]
    fn bom_prefix_is_stripped() {
        let records = parse_csv_records("\u{feff}Code,Price\n2330,980\n").expect("parse");
        assert_eq!(records[0]["Code"], json!("2330"), "BOM must not leak into the first header");
    }

    #[test]
    fn quoted_fields_with_commas_survive() {
        let records = parse_csv_records("名稱,地址\n台積電,\"新竹市, 力行六路8號\"\n").expect("parse");
        assert_eq!(records[0]["地址"], json!("新竹市, 力行六路8號"));
    }

    #[test]
    fn short_rows_omit_trailing_fields() {
        let records = parse_csv_records("a,b,c\n1,2\n").expect("parse");
        assert_eq!(records[0].len(), 2);
        assert!(records[0].get("c").is_none());
    }

    #[test]
    fn field_order_follows_the_header() {
        let records = parse_csv_records("z,a,m\n1,2,3\n").expect("parse");
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
