//! Cache-coordinated fetch client.
//!
//! One distinct request signature hits the network at most once per TTL
//! window, even under concurrent demand. Misses serialize through a single
//! process-wide coordination lock with a double-checked cache re-read, so N
//! concurrent misses for one key produce exactly one upstream call and N
//! identical results. Failures are never cached; the next caller simply
//! retries the network.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use serde_json::Value;
use taifin_types::{EngineConfig, EngineError, Record};
use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::csv_records::parse_csv_records;
use crate::transport::{RawResponse, Upstream};

pub struct CachedFetcher {
    store: Mutex<CacheStore>,
    flight: tokio::sync::Mutex<()>,
    upstream: Arc<dyn Upstream>,
}

impl CachedFetcher {
    pub fn new(config: &EngineConfig, upstream: Arc<dyn Upstream>) -> Self {
        Self {
            store: Mutex::new(CacheStore::new(config.cache_ttl, config.cache_capacity)),
            flight: tokio::sync::Mutex::new(()),
            upstream,
        }
    }

    fn store(&self) -> MutexGuard<'_, CacheStore> {
        // A panic while holding the store lock poisons it; the cached data
        // itself is still sound, so recover the guard.
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Fetch and decode a JSON resource, at most once per signature per TTL
    /// window. The signature covers the URL plus sorted params and headers.
    pub async fn fetch_json(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<Value, EngineError> {
        let key = json_cache_key(url, params, headers);
        if let Some(value) = self.store().get(&key) {
            debug!(%url, "cache hit");
            return Ok(value);
        }

        let _flight = self.flight.lock().await;
        if let Some(value) = self.store().get(&key) {
            debug!(%url, "cache hit after single-flight wait");
            return Ok(value);
        }

        let value = self.get_decoded_json(url, params, headers).await?;
        self.store().put(key, value.clone());
        Ok(value)
    }

    /// Fetch a CSV resource and normalize it to records. CSV signatures are
    /// the URL alone.
    pub async fn fetch_csv_records(&self, url: &str) -> Result<Vec<Record>, EngineError> {
        let key = csv_cache_key(url);
        if let Some(value) = self.store().get(&key) {
            debug!(%url, "cache hit");
            return Ok(records_from_cached(&value));
        }

        let _flight = self.flight.lock().await;
        if let Some(value) = self.store().get(&key) {
            debug!(%url, "cache hit after single-flight wait");
            return Ok(records_from_cached(&value));
        }

        let body = self.get_success_body(url, &[], &[]).await?;
        let records = parse_csv_records(&body).map_err(|reason| EngineError::MalformedPayload {
            url: url.to_string(),
            reason,
        })?;
        let cached = Value::Array(records.iter().cloned().map(Value::Object).collect());
        self.store().put(key, cached);
        Ok(records)
    }

    /// Drop every cached entry and release the upstream's pooled resources.
    pub fn shutdown(&self) {
        self.store().clear();
        self.upstream.shutdown();
        debug!("fetcher shut down");
    }

    /// Current number of live-or-expired entries, for observability.
    pub fn cache_len(&self) -> usize {
        self.store().len()
    }

    async fn get_decoded_json(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<Value, EngineError> {
        let body = self.get_success_body(url, params, headers).await?;
        let text = body.trim_start_matches('\u{feff}');
        serde_json::from_str(text).map_err(|error| EngineError::MalformedPayload {
            url: url.to_string(),
            reason: error.to_string(),
        })
    }

    async fn get_success_body(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<String, EngineError> {
        let started = Instant::now();
        let result = self.upstream.get(url, params, headers).await.and_then(|response| {
            let RawResponse { status, body } = response;
            if (200..300).contains(&status) {
                Ok(body)
            } else {
                Err(EngineError::UpstreamHttp {
                    url: url.to_string(),
                    status,
                })
            }
        });
        match &result {
            Ok(body) => debug!(
                %url,
                body_len = body.len(),
                duration_ms = started.elapsed().as_millis() as u64,
                "upstream fetch completed"
            ),
            Err(error) => warn!(
                %url,
                error = %error,
                duration_ms = started.elapsed().as_millis() as u64,
                "upstream fetch failed; result not cached"
            ),
        }
        result
    }
}

fn join_sorted(pairs: &[(String, String)]) -> String {
    let mut pairs: Vec<&(String, String)> = pairs.iter().collect();
    pairs.sort();
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Deterministic request signature: URL plus sorted params plus sorted
/// headers. Two calls that differ only in pair order share a signature.
fn json_cache_key(url: &str, params: &[(String, String)], headers: &[(String, String)]) -> String {
    format!("json {url}?{}#{}", join_sorted(params), join_sorted(headers))
}

fn csv_cache_key(url: &str) -> String {
    format!("csv {url}")
}

fn records_from_cached(value: &Value) -> Vec<Record> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_object().cloned())
            .collect(),
        _ => Vec::new(),
    }
}
