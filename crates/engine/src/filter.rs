//! Record filter: two-phase key-scan matching.
//!
//! Upstreams do not agree on where a security code or product name lives;
//! the same dataset renames its columns between releases. The filter probes
//! an ordered set of candidate field names first and falls back to scanning
//! every field, so an identifier under an unanticipated column is still
//! found.

use serde_json::Value;
use taifin_types::Record;

/// Trim + case-fold, applied to both sides of every comparison. Matching is
/// exact equality after normalization, never substring.
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Textual form of a field value for comparison; objects and arrays never
/// hold lookup identifiers.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn field_matches(record: &Record, key: &str, wanted: &str) -> bool {
    record
        .get(key)
        .and_then(value_text)
        .map(|text| normalize(&text) == wanted)
        .unwrap_or(false)
}

/// Narrow `records` to those identifying `lookup`.
///
/// Without a lookup value every record passes through (the caller caps the
/// list). Phase 1 probes `candidate_keys` in priority order; a record
/// matches if ANY candidate key's value equals the normalized lookup.
/// Phase 2 runs only when Phase 1 matched nothing and scans every field of
/// every record. No match after both phases is an empty list, not an error.
pub fn filter_records(records: &[Record], lookup: Option<&str>, candidate_keys: &[&str]) -> Vec<Record> {
    let Some(lookup) = lookup else {
        return records.to_vec();
    };
    let wanted = normalize(lookup);

    let phase_one: Vec<Record> = records
        .iter()
        .filter(|record| candidate_keys.iter().any(|key| field_matches(record, key, &wanted)))
        .cloned()
        .collect();
    if !phase_one.is_empty() {
        return phase_one;
    }

    // Fallback: the identifier may live under a field no convention names.
    records
        .iter()
        .filter(|record| {
            record
                .values()
                .any(|value| value_text(value).map(|text| normalize(&text) == wanted).unwrap_or(false))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    fn quotes() -> Vec<Record> {
        vec![
            record(&[("Code", json!("2330")), ("Price", json!(100))]),
            record(&[("Code", json!("2317")), ("Price", json!(50))]),
        ]
    }

    #[test]
    fn candidate_key_match_selects_the_record() {
        let result = filter_records(&quotes(), Some("2330"), &["Code"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["Price"], json!(100));
    }

    #[test]
    fn matching_is_trimmed_and_case_folded() {
        let records = vec![record(&[("證券代號", json!("0050")), ("Name", json!("元大台灣50"))])];
        let result = filter_records(&records, Some("  0050 "), &["Code", "證券代號"]);
        assert_eq!(result.len(), 1);

        let records = vec![record(&[("Code", json!("TSMC"))])];
        assert_eq!(filter_records(&records, Some("tsmc"), &["Code"]).len(), 1);
    }

    #[test]
    fn matching_is_never_substring() {
        let records = vec![record(&[("Code", json!("23305"))])];
        assert!(filter_records(&records, Some("2330"), &["Code"]).is_empty());
    }

    #[test]
    fn fallback_scans_non_candidate_fields() {
        let records = vec![
            record(&[("股票代碼", json!("2330")), ("收盤", json!("980"))]),
            record(&[("股票代碼", json!("2317")), ("收盤", json!("185"))]),
        ]; // "股票代碼" deliberately absent from the candidate set
        let result = filter_records(&records, Some("2330"), &["Code", "證券代號"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["收盤"], json!("980"));
    }

    #[test]
    fn fallback_only_runs_on_zero_phase_one_matches() {
        let records = vec![
            record(&[("Code", json!("2330")), ("Note", json!("x"))]),
            record(&[("Code", json!("9999")), ("Note", json!("2330"))]),
        ];
        // Phase 1 finds the first record, so the second (value under a
        // non-candidate field) must NOT ride along.
        let result = filter_records(&records, Some("2330"), &["Code"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["Note"], json!("x"));
    }

    #[test]
    fn numeric_field_values_compare_textually() {
        let records = vec![record(&[("Code", json!(2330))])];
        assert_eq!(filter_records(&records, Some("2330"), &["Code"]).len(), 1);
    }

    #[test]
    fn no_match_anywhere_is_an_empty_list() {
        assert!(filter_records(&quotes(), Some("0050"), &["Code"]).is_empty());
    }

    #[test]
    fn no_lookup_passes_everything_through() {
        assert_eq!(filter_records(&quotes(), None, &["Code"]).len(), 2);
    }
}
