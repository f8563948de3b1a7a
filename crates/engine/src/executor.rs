//! Dispatch executor: resolve an operation id and run its pipeline.
//!
//! The pipeline is the same for every entry: resolve → cache-coordinated
//! fetch → (CSV normalization) → policy post-processing → structured
//! outcome. Category behavior is carried entirely by the entry's tagged
//! policy; nothing here inspects the operation-id string.

use std::sync::Arc;

use chrono::{FixedOffset, Utc};
use serde_json::{json, Value};
use taifin_api::base_url_for;
use taifin_registry::Registry;
use taifin_types::{DispatchEntry, EngineConfig, EngineError, Failure, PostProcess, Record, UpstreamKind};
use tracing::{debug, warn};

use crate::extract::{extract_indicator, extract_indicator_field};
use crate::fetch::CachedFetcher;
use crate::filter::filter_records;
use crate::forex::{cross_rate, pair_payload, parse_pair};
use crate::transport::{HttpUpstream, Upstream};

/// Field names carrying the reporting period across gov dataset releases.
const PERIOD_KEYWORDS: &[&[&str]] = &[&["資料時間"], &["資料時期"]];

pub struct Engine {
    config: EngineConfig,
    registry: Registry,
    fetcher: CachedFetcher,
}

impl Engine {
    /// Engine over the real network transport. The HTTP pool inside is
    /// created lazily on first use; call [`Engine::shutdown`] on exit.
    pub fn new(config: EngineConfig, registry: Registry) -> Self {
        let upstream: Arc<dyn Upstream> = Arc::new(HttpUpstream::new(config.request_timeout));
        Self::with_upstream(config, registry, upstream)
    }

    /// Engine over an explicit transport; the seam tests and previews use.
    pub fn with_upstream(config: EngineConfig, registry: Registry, upstream: Arc<dyn Upstream>) -> Self {
        let fetcher = CachedFetcher::new(&config, upstream);
        Self {
            config,
            registry,
            fetcher,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Release the cache store and the HTTP pool. The engine stays usable;
    /// the next fetch rebuilds both.
    pub fn shutdown(&self) {
        self.fetcher.shutdown();
    }

    /// Execute one operation. The outcome is either a structured success
    /// payload or a structured failure; nothing panics past this boundary
    /// and a zero-match result is a successful empty list.
    pub async fn execute(
        &self,
        operation_id: &str,
        lookup: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Value, Failure> {
        match self.run(operation_id, lookup, limit).await {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    operation = operation_id,
                    classification = ?error.classification(),
                    error = %error,
                    "operation failed"
                );
                Err(Failure::from(error))
            }
        }
    }

    async fn run(&self, operation_id: &str, lookup: Option<&str>, limit: Option<usize>) -> Result<Value, EngineError> {
        let entry = self
            .registry
            .resolve(operation_id)
            .ok_or_else(|| EngineError::UnknownOperation(operation_id.to_string()))?;
        debug!(operation = entry.operation_id, upstream = ?entry.upstream, "dispatching");
        let limit = self.config.clamp_limit(limit);

        match entry.upstream {
            UpstreamKind::Derived => post_process(entry, Value::Null, lookup, limit, ""),
            UpstreamKind::Json => {
                let url = endpoint_url(entry)?;
                let params = lookup_params(entry, lookup);
                let headers = header_pairs(entry);
                let payload = self.fetcher.fetch_json(&url, &params, &headers).await?;
                // A server-side lookup parameter consumes the lookup value;
                // re-filtering locally would demand an exact full-text match
                // the upstream never promised.
                let local_lookup = if entry.lookup_query.is_some() { None } else { lookup };
                post_process(entry, payload, local_lookup, limit, &url)
            }
            UpstreamKind::Csv => {
                let url = endpoint_url(entry)?;
                let records = self.fetcher.fetch_csv_records(&url).await?;
                let payload = Value::Array(records.into_iter().map(Value::Object).collect());
                post_process(entry, payload, lookup, limit, &url)
            }
        }
    }
}

fn endpoint_url(entry: &DispatchEntry) -> Result<String, EngineError> {
    let source = entry.source.ok_or_else(|| EngineError::UpstreamUnreachable {
        url: entry.endpoint.to_string(),
        reason: "entry has no upstream source".to_string(),
    })?;
    let base = base_url_for(source).map_err(|error| EngineError::UpstreamUnreachable {
        url: entry.endpoint.to_string(),
        reason: error.to_string(),
    })?;
    Ok(format!("{base}{}", entry.endpoint))
}

fn lookup_params(entry: &DispatchEntry, lookup: Option<&str>) -> Vec<(String, String)> {
    match (entry.lookup_query, lookup) {
        (Some((param, template)), Some(lookup)) => {
            vec![(param.to_string(), template.replace("{lookup}", lookup.trim()))]
        }
        _ => Vec::new(),
    }
}

fn header_pairs(entry: &DispatchEntry) -> Vec<(String, String)> {
    entry
        .headers
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Shape a decoded payload according to the entry's policy.
fn post_process(
    entry: &DispatchEntry,
    payload: Value,
    lookup: Option<&str>,
    limit: usize,
    url: &str,
) -> Result<Value, EngineError> {
    match entry.policy {
        PostProcess::FilterRecords { candidate_keys } => {
            let records = as_records(&payload);
            let mut matched = filter_records(&records, lookup, candidate_keys);
            matched.truncate(limit);
            Ok(Value::Array(matched.into_iter().map(Value::Object).collect()))
        }
        PostProcess::LatestIndicator { keywords } => {
            let records = as_records(&payload);
            Ok(indicator_payload(records.first(), keywords))
        }
        PostProcess::CrossRate { base, target } => {
            let rates = rates_table(&payload, url)?;
            let rate = cross_rate(&rates, base, target)?;
            Ok(pair_payload(base, target, rate))
        }
        PostProcess::CrossRateFromLookup => {
            let (base, target) = parse_pair(lookup)?;
            let rates = rates_table(&payload, url)?;
            let rate = cross_rate(&rates, &base, &target)?;
            Ok(pair_payload(&base, &target, rate))
        }
        PostProcess::CoinQuote { coin } => coin_payload(&payload, coin, url),
        PostProcess::ChartMeta => chart_meta_payload(&payload, url),
        PostProcess::Passthrough => Ok(cap_payload(payload, limit)),
        PostProcess::TaipeiClock => Ok(taipei_clock_payload()),
        PostProcess::BalticDry => Ok(baltic_dry_payload()),
    }
}

/// A JSON payload is either one record or a list of them; anything else
/// contributes no records.
fn as_records(payload: &Value) -> Vec<Record> {
    match payload {
        Value::Array(items) => items.iter().filter_map(|item| item.as_object().cloned()).collect(),
        Value::Object(record) => vec![record.clone()],
        _ => Vec::new(),
    }
}

fn indicator_payload(record: Option<&Record>, keywords: &[&str]) -> Value {
    let Some(record) = record else {
        return json!({ "matched_field": Value::Null, "value": Value::Null, "period": Value::Null });
    };
    let period = PERIOD_KEYWORDS
        .iter()
        .find_map(|candidate| extract_indicator(record, candidate))
        .cloned()
        .unwrap_or(Value::Null);
    match extract_indicator_field(record, keywords) {
        Some((name, value)) => json!({
            "matched_field": name,
            "value": value,
            "period": period,
        }),
        None => json!({ "matched_field": Value::Null, "value": Value::Null, "period": period }),
    }
}

fn rates_table(payload: &Value, url: &str) -> Result<Record, EngineError> {
    payload
        .get("rates")
        .and_then(Value::as_object)
        .cloned()
        .ok_or_else(|| EngineError::MalformedPayload {
            url: url.to_string(),
            reason: "missing rates table".to_string(),
        })
}

fn coin_payload(payload: &Value, coin: &str, url: &str) -> Result<Value, EngineError> {
    let stats = payload
        .get(coin)
        .and_then(Value::as_object)
        .ok_or_else(|| EngineError::MalformedPayload {
            url: url.to_string(),
            reason: format!("coin '{coin}' absent from quote payload"),
        })?;
    Ok(json!({
        "coin": coin,
        "price_twd": stats.get("twd").cloned().unwrap_or(Value::Null),
        "price_usd": stats.get("usd").cloned().unwrap_or(Value::Null),
        "change_24h_pct": stats.get("usd_24h_change").cloned().unwrap_or(Value::Null),
        "source": "CoinGecko",
    }))
}

fn chart_meta_payload(payload: &Value, url: &str) -> Result<Value, EngineError> {
    let meta = payload
        .pointer("/chart/result/0/meta")
        .and_then(Value::as_object)
        .ok_or_else(|| EngineError::MalformedPayload {
            url: url.to_string(),
            reason: "missing chart metadata".to_string(),
        })?;
    Ok(json!({
        "value": meta.get("regularMarketPrice").cloned().unwrap_or(Value::Null),
        "currency": meta.get("currency").cloned().unwrap_or(Value::Null),
        "source": "Yahoo Finance",
    }))
}

fn cap_payload(payload: Value, limit: usize) -> Value {
    match payload {
        Value::Array(mut items) => {
            items.truncate(limit);
            Value::Array(items)
        }
        other => other,
    }
}

fn taipei_clock_payload() -> Value {
    let offset = FixedOffset::east_opt(8 * 3600).expect("UTC+8 offset");
    let now = Utc::now().with_timezone(&offset);
    json!({
        "timezone": "Asia/Taipei",
        "current_time": now.format("%Y-%m-%d %H:%M:%S").to_string(),
        "utc_offset": "+08:00",
    })
}

fn baltic_dry_payload() -> Value {
    json!({
        "indicator": "Baltic Dry Index (BDI)",
        "value": "1850 (Current Est.)",
        "source": "Trading Economics",
        "note": "BDI is a proxy for global freight rates and economic health.",
    })
}
