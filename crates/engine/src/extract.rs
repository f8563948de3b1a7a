//! Indicator extractor: fuzzy keyed lookup over one record.
//!
//! Statistical datasets rename their columns between releases
//! (`經濟成長率(%)` one quarter, `經濟成長率-年增率` the next). Rather than
//! chase exact names, a field is matched by a small set of keyword fragments
//! expected to survive the reformatting.

use serde_json::Value;
use taifin_types::Record;

/// Return the value of the first field whose name contains EVERY keyword as
/// a substring (case-sensitive, order-independent).
///
/// When several fields satisfy the keyword set, the first in the record's
/// key-declaration order wins. That tie-break is a known limitation kept
/// for compatibility with observed behavior, not a guarantee; callers that
/// need a specific column must tighten the keyword set instead. Absence
/// yields `None`, never a panic.
pub fn extract_indicator<'r>(record: &'r Record, keywords: &[&str]) -> Option<&'r Value> {
    extract_indicator_field(record, keywords).map(|(_, value)| value)
}

/// As [`extract_indicator`], but also reports which field matched so result
/// payloads can name their provenance.
pub fn extract_indicator_field<'r>(record: &'r Record, keywords: &[&str]) -> Option<(&'r str, &'r Value)> {
    record
        .iter()
        .find(|(name, _)| keywords.iter().all(|keyword| name.contains(keyword)))
        .map(|(name, value)| (name.as_str(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn keyword_fragment_matches_decorated_column_name() {
        let record = record(&[("年增率(%)", json!("2.5")), ("GDP", json!("23.1"))]);
        assert_eq!(extract_indicator(&record, &["年增率"]), Some(&json!("2.5")));
    }

    #[test]
    fn all_keywords_must_be_present_in_any_order() {
        let record = record(&[
            ("111年底-債務未償餘額(億元)", json!("57910")),
            ("111年底-債務餘額預算數", json!("60314")),
        ]);
        assert_eq!(
            extract_indicator(&record, &["餘額", "未償"]),
            Some(&json!("57910")),
            "keyword order must not matter"
        );
        assert_eq!(extract_indicator(&record, &["未償", "利息"]), None);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let record = record(&[("GDP Growth", json!("3.1"))]);
        assert_eq!(extract_indicator(&record, &["gdp"]), None);
        assert_eq!(extract_indicator(&record, &["GDP"]), Some(&json!("3.1")));
    }

    #[test]
    fn first_field_in_declaration_order_wins_ties() {
        let record = record(&[("失業率-原始值", json!("3.4")), ("失業率-季調", json!("3.3"))]);
        assert_eq!(extract_indicator(&record, &["失業率"]), Some(&json!("3.4")));
    }

    #[test]
    fn absence_yields_the_sentinel() {
        let record = record(&[("消費者物價指數", json!("105.2"))]);
        assert_eq!(extract_indicator(&record, &["失業率"]), None);
    }

    #[test]
    fn empty_record_never_panics() {
        assert_eq!(extract_indicator(&Record::new(), &["任何"]), None);
    }
}
