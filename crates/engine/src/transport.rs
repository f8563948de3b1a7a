//! Upstream transport seam.
//!
//! Engines talk to the network through the [`Upstream`] trait so the cache
//! and dispatch layers can be exercised against canned payloads. The real
//! implementation is [`HttpUpstream`]; [`StaticUpstream`] serves routed
//! fixtures and counts calls for tests and offline previews.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use taifin_api::HubClient;
use taifin_types::EngineError;
use tracing::debug;

/// Raw upstream response: final status plus body text. Decoding happens in
/// the fetch layer so this seam stays trivially mockable.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Perform one HTTP GET against an absolute URL.
///
/// Implementations must map transport-level failures to the typed taxonomy
/// and never panic past this boundary. Non-2xx responses are returned as
/// `Ok` with their status; classification is the fetch layer's job.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<RawResponse, EngineError>;

    /// Release any pooled resources. Default is a no-op for test doubles.
    fn shutdown(&self) {}
}

/// Network-backed upstream. The underlying [`HubClient`] (and its connection
/// pool) is constructed lazily on first use and dropped by [`shutdown`],
/// preserving single-pool-per-process semantics without hidden global state.
///
/// [`shutdown`]: Upstream::shutdown
pub struct HttpUpstream {
    request_timeout: Duration,
    client: Mutex<Option<HubClient>>,
}

impl HttpUpstream {
    pub fn new(request_timeout: Duration) -> Self {
        Self {
            request_timeout,
            client: Mutex::new(None),
        }
    }

    fn client(&self, url: &str) -> Result<HubClient, EngineError> {
        let mut slot = self.client.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }
        debug!(timeout_ms = self.request_timeout.as_millis() as u64, "constructing http client");
        let client = HubClient::new(self.request_timeout).map_err(|error| EngineError::UpstreamUnreachable {
            url: url.to_string(),
            reason: error.to_string(),
        })?;
        *slot = Some(client.clone());
        Ok(client)
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn get(
        &self,
        url: &str,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<RawResponse, EngineError> {
        let client = self.client(url)?;
        let mut request = client.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let timeout_ms = self.request_timeout.as_millis() as u64;
        let map_error = |error: reqwest::Error| {
            if error.is_timeout() {
                EngineError::UpstreamTimeout {
                    url: url.to_string(),
                    timeout_ms,
                }
            } else {
                EngineError::UpstreamUnreachable {
                    url: url.to_string(),
                    reason: error.to_string(),
                }
            }
        };

        let response = request.send().await.map_err(map_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_error)?;
        Ok(RawResponse { status, body })
    }

    fn shutdown(&self) {
        let mut slot = self.client.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if slot.take().is_some() {
            debug!("http client released");
        }
    }
}

/// Upstream façade serving canned bodies from a route table. No side
/// effects; counts calls. This is what tests and previews run against.
#[derive(Default)]
pub struct StaticUpstream {
    routes: Vec<(String, RawResponse)>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StaticUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 for any URL containing `fragment`.
    pub fn route(mut self, fragment: &str, body: &str) -> Self {
        self.routes.push((
            fragment.to_string(),
            RawResponse {
                status: 200,
                body: body.to_string(),
            },
        ));
        self
    }

    /// Serve an arbitrary status for any URL containing `fragment`.
    pub fn route_status(mut self, fragment: &str, status: u16, body: &str) -> Self {
        self.routes.push((
            fragment.to_string(),
            RawResponse {
                status,
                body: body.to_string(),
            },
        ));
        self
    }

    /// Simulate upstream latency before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of requests that reached this upstream.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Upstream for StaticUpstream {
    async fn get(
        &self,
        url: &str,
        _params: &[(String, String)],
        _headers: &[(String, String)],
    ) -> Result<RawResponse, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let matched = self.routes.iter().find(|(fragment, _)| url.contains(fragment.as_str()));
        Ok(match matched {
            Some((_, response)) => response.clone(),
            None => RawResponse {
                status: 404,
                body: "no route".to_string(),
            },
        })
    }
}
