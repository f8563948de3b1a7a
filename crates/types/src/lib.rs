//! Shared type definitions for the Taifin data retrieval engine.
//!
//! This crate holds the data model every other crate agrees on: upstream
//! records, the source and category enums, the immutable dispatch entry, the
//! post-processing policies, the failure taxonomy, and engine configuration.

pub mod config;
pub mod errors;

pub use config::EngineConfig;
pub use errors::{Classification, EngineError, Failure};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single upstream record: a mapping from field name to value.
///
/// The set of field names is NOT fixed across datasets, nor across releases
/// of the same dataset. The record filter and indicator extractor exist
/// precisely because of this variability. Field order is preserved as
/// declared in the payload (`serde_json` is built with `preserve_order`).
pub type Record = serde_json::Map<String, Value>;

/// Identifies an upstream data source family.
///
/// Each source carries a default base URL and an environment variable that
/// overrides it, so staging mirrors or local fixtures can stand in without
/// code changes.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum SourceId {
    /// Taiwan Stock Exchange OpenAPI
    Twse,
    /// Taipei Exchange (OTC market) OpenAPI
    Tpex,
    /// Taiwan Futures Exchange OpenAPI
    Taifex,
    /// ExchangeRate-API, JPY-pivot rate table
    ExchangeRate,
    /// CoinGecko public API
    CoinGecko,
    /// data.gov.tw quality-download datasets (DGBAS, MOL, MOF, MOEA, CBC)
    GovData,
    /// MOEA business registration (GCIS) open data
    Gcis,
    /// Yahoo Finance chart API (spot commodities)
    YahooFinance,
    /// alternative.me crypto sentiment API
    AlternativeMe,
}

/// Per-source connection metadata.
pub trait ToSourceInfo {
    fn env_var(&self) -> &str;
    fn default_base_url(&self) -> &str;
}

impl ToSourceInfo for SourceId {
    fn env_var(&self) -> &str {
        match self {
            Self::Twse => "TAIFIN_TWSE_BASE",
            Self::Tpex => "TAIFIN_TPEX_BASE",
            Self::Taifex => "TAIFIN_TAIFEX_BASE",
            Self::ExchangeRate => "TAIFIN_FOREX_BASE",
            Self::CoinGecko => "TAIFIN_COINGECKO_BASE",
            Self::GovData => "TAIFIN_GOV_DATA_BASE",
            Self::Gcis => "TAIFIN_GCIS_BASE",
            Self::YahooFinance => "TAIFIN_YAHOO_BASE",
            Self::AlternativeMe => "TAIFIN_ALTERNATIVE_BASE",
        }
    }

    fn default_base_url(&self) -> &str {
        match self {
            Self::Twse => "https://openapi.twse.com.tw/v1",
            Self::Tpex => "https://openapi.tpex.org.tw/v1",
            Self::Taifex => "https://openapi.taifex.com.tw/v1",
            Self::ExchangeRate => "https://open.er-api.com/v6",
            Self::CoinGecko => "https://api.coingecko.com/api/v3",
            Self::GovData => "https://quality.data.gov.tw",
            Self::Gcis => "https://data.gcis.nat.gov.tw",
            Self::YahooFinance => "https://query1.finance.yahoo.com",
            Self::AlternativeMe => "https://api.alternative.me",
        }
    }
}

/// How an operation's payload is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpstreamKind {
    /// HTTP GET returning a JSON document.
    Json,
    /// HTTP GET returning a raw CSV file, normalized to records first.
    Csv,
    /// Computed locally; no network involvement.
    Derived,
}

/// Dataset family an operation belongs to.
///
/// The historical operation-id strings imply a category by naming convention
/// (`get_stock_*`, `get_forex_*`, ...). That convention is enforced as a
/// table invariant by the registry tests; at runtime nothing inspects the id
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Stock,
    Derivatives,
    Forex,
    Commodity,
    Macro,
    Tax,
    Corporate,
    Bank,
    Crypto,
    Common,
}

impl Category {
    /// Prefix the operation id must carry for this category.
    pub fn id_prefixes(&self) -> &'static [&'static str] {
        match self {
            Self::Stock => &["get_stock_"],
            Self::Derivatives => &["get_futures_"],
            Self::Forex => &["get_forex_"],
            Self::Commodity => &["get_commodity_"],
            Self::Macro => &["get_macro_"],
            Self::Tax => &["get_tax_"],
            Self::Corporate => &["get_corp_"],
            Self::Bank => &["get_bank_"],
            Self::Crypto => &["get_crypto_"],
            Self::Common => &["get_current_"],
        }
    }
}

/// What happens to a decoded payload before it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Narrow a record list with the two-phase candidate-key filter.
    /// Without a lookup value the list passes through, capped.
    FilterRecords { candidate_keys: &'static [&'static str] },
    /// Read one statistic from the newest record via keyword fragments that
    /// survive column renames across dataset releases.
    LatestIndicator { keywords: &'static [&'static str] },
    /// Cross rate for a fixed currency pair, derived through the pivot table.
    CrossRate {
        base: &'static str,
        target: &'static str,
    },
    /// Cross rate with the pair parsed from the lookup value
    /// (`"BASE/TARGET"`, or `"BASE"` against TWD).
    CrossRateFromLookup,
    /// Extract one coin's quote block from the CoinGecko simple-price payload.
    CoinQuote { coin: &'static str },
    /// Pull the `chart.result[0].meta` block out of a Yahoo Finance chart
    /// payload (spot commodity quotes).
    ChartMeta,
    /// Return the decoded payload as-is (lists still capped).
    Passthrough,
    /// Current wall-clock time in Asia/Taipei (UTC+8, no DST).
    TaipeiClock,
    /// Canned Baltic Dry Index summary; the index has no public JSON feed.
    BalticDry,
}

/// One row of the dispatch table: everything needed to execute an operation.
///
/// Entries are plain static data. The table is built once at startup and
/// never mutated; upstream quirks (extra headers, server-side lookup
/// parameters) live here instead of in per-handler conditionals.
#[derive(Debug, Clone, Copy)]
pub struct DispatchEntry {
    /// Stable external identifier, e.g. `get_stock_quotes_realtime_all`.
    pub operation_id: &'static str,
    pub category: Category,
    /// Human-readable one-liner shown in catalog listings.
    pub summary: &'static str,
    /// `None` only for derived entries, which never touch the network.
    pub source: Option<SourceId>,
    /// Path template appended to the source base URL. May contain a fixed
    /// query string. Empty for derived entries.
    pub endpoint: &'static str,
    pub upstream: UpstreamKind,
    pub policy: PostProcess,
    /// Extra request headers this upstream requires.
    pub headers: &'static [(&'static str, &'static str)],
    /// Optional server-side lookup: (query parameter, value template with a
    /// `{lookup}` placeholder) added when the caller supplies a lookup value.
    pub lookup_query: Option<(&'static str, &'static str)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_info_is_complete() {
        let sources = [
            SourceId::Twse,
            SourceId::Tpex,
            SourceId::Taifex,
            SourceId::ExchangeRate,
            SourceId::CoinGecko,
            SourceId::GovData,
            SourceId::Gcis,
            SourceId::YahooFinance,
            SourceId::AlternativeMe,
        ];
        for source in sources {
            assert!(source.default_base_url().starts_with("https://"));
            assert!(source.env_var().starts_with("TAIFIN_"));
            assert!(
                !source.default_base_url().ends_with('/'),
                "base urls must not carry a trailing slash; endpoints start with one"
            );
        }
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::Corporate).expect("serialize category");
        assert_eq!(json, "\"corporate\"");
    }
}
