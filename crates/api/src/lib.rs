//! Upstream HTTP client utilities.
//!
//! This crate provides a lightweight client for the open-data upstreams the
//! engine reads from. It focuses on:
//!
//! - Constructing an HTTP client with sensible defaults (uniform timeout,
//!   JSON/CSV Accept header, compressed transfer)
//! - Resolving per-source base URLs from the environment or built-in defaults
//! - Validating base URLs against an allow-list of open-data domains
//! - Building GET requests with a consistent User-Agent
//!
//! The primary entry point is [`HubClient`]. Create an instance via
//! [`HubClient::new`], resolve a source's base with [`base_url_for`], and
//! build requests with [`HubClient::get`].

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::{header, Client, RequestBuilder, Url};
use taifin_types::{SourceId, ToSourceInfo};
use tracing::debug;

/// Base domains requests may target. Subdomains of these domains are also
/// allowed. Everything the engine reads is public open data; a stray base-URL
/// override must not be able to point the process at an arbitrary host.
const ALLOWED_UPSTREAM_DOMAINS: &[&str] = &[
    "twse.com.tw",
    "tpex.org.tw",
    "taifex.com.tw",
    "er-api.com",
    "coingecko.com",
    "data.gov.tw",
    "gcis.nat.gov.tw",
    "yahoo.com",
    "alternative.me",
];
/// Hostnames allowed for local development and tests regardless of scheme.
const LOCALHOST_DOMAINS: &[&str] = &["localhost", "127.0.0.1"];

/// Accept header sent with every request; upstreams serve JSON or raw CSV.
const ACCEPT_VALUE: &str = "application/json, text/csv;q=0.9, text/plain;q=0.8";

#[derive(Debug, Clone)]
/// Thin wrapper around a configured `reqwest::Client` for upstream access.
///
/// One instance per process: the connection pool inside `reqwest::Client` is
/// the process-wide pool the resource model calls for. All upstreams are
/// read-only GET targets; no credentials are ever attached.
pub struct HubClient {
    pub http: Client,
    pub user_agent: String,
}

impl HubClient {
    /// Build the client with the uniform request timeout.
    ///
    /// Redirects are followed (several gov download endpoints bounce through
    /// one) and compressed transfer encodings are negotiated.
    pub fn new(request_timeout: Duration) -> Result<Self> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT_VALUE));

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(request_timeout)
            .build()
            .context("build http client")?;

        Ok(Self {
            http,
            user_agent: format!("taifin/0.1; {}", env::consts::OS),
        })
    }

    /// Build a GET `reqwest::RequestBuilder` for an absolute URL.
    pub fn get(&self, url: &str) -> RequestBuilder {
        debug!(%url, "building request");
        self.http.get(url).header(header::USER_AGENT, &self.user_agent)
    }
}

/// Resolve the base URL for a source: its env-var override when set,
/// otherwise the built-in default. The result is validated either way.
pub fn base_url_for(source: SourceId) -> Result<String> {
    let base_url = env::var(source.env_var()).unwrap_or_else(|_| source.default_base_url().into());
    validate_base_url(&base_url)?;
    Ok(base_url)
}

/// Validate that a base URL is acceptable for use by the client.
///
/// Rules:
/// - `localhost` or `127.0.0.1`: any scheme is allowed
/// - otherwise: scheme must be HTTPS, and host must be one of the allowed
///   open-data domains or a subdomain thereof
pub fn validate_base_url(base: &str) -> Result<()> {
    let parsed_base_url = Url::parse(base).map_err(|e| anyhow!("invalid base URL '{}': {}", base, e))?;

    let host_name = parsed_base_url
        .host_str()
        .ok_or_else(|| anyhow!("base URL must include a host"))?;

    if LOCALHOST_DOMAINS
        .iter()
        .any(|&allowed| host_name.eq_ignore_ascii_case(allowed))
    {
        return Ok(());
    }

    if parsed_base_url.scheme() != "https" {
        return Err(anyhow!(
            "base URL must use https for non-localhost hosts; got '{}://'",
            parsed_base_url.scheme()
        ));
    }

    let is_allowed_domain = ALLOWED_UPSTREAM_DOMAINS.iter().any(|&allowed_domain| {
        host_name.eq_ignore_ascii_case(allowed_domain) || host_name.ends_with(&format!(".{}", allowed_domain))
    });
    if !is_allowed_domain {
        return Err(anyhow!(
            "base URL host '{}' is not allowed; must be one of {:?} or a subdomain, or localhost",
            host_name,
            ALLOWED_UPSTREAM_DOMAINS
        ));
    }

    Ok(())
}
