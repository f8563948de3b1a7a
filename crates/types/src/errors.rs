//! Typed failure taxonomy for the retrieval engine.
//!
//! Every layer returns these instead of panicking or raising; failures
//! propagate verbatim to the caller without automatic retry. A zero-match
//! result is NOT a failure — it is a successful empty list, which is why no
//! `EmptyResult` variant exists here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine-internal error type. Carries enough context for logs; callers see
/// the rendered [`Failure`] payload instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("upstream request timed out after {timeout_ms} ms: {url}")]
    UpstreamTimeout { url: String, timeout_ms: u64 },

    #[error("upstream returned HTTP {status} for {url}")]
    UpstreamHttp { url: String, status: u16 },

    #[error("upstream unreachable: {url}: {reason}")]
    UpstreamUnreachable { url: String, reason: String },

    #[error("malformed payload from {url}: {reason}")]
    MalformedPayload { url: String, reason: String },

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("unsupported lookup value '{value}': {reason}")]
    UnsupportedLookup { value: String, reason: String },
}

impl EngineError {
    pub fn classification(&self) -> Classification {
        match self {
            Self::UpstreamTimeout { .. } => Classification::UpstreamTimeout,
            Self::UpstreamHttp { .. } => Classification::UpstreamHttpError,
            Self::UpstreamUnreachable { .. } => Classification::UpstreamUnreachable,
            Self::MalformedPayload { .. } => Classification::UpstreamMalformedPayload,
            Self::UnknownOperation(_) => Classification::UnknownOperation,
            Self::UnsupportedLookup { .. } => Classification::UnsupportedLookupValue,
        }
    }
}

/// Machine-readable failure class, stable across releases. Callers branch on
/// this (e.g. degrade on `UpstreamTimeout` instead of hammering retries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    UpstreamTimeout,
    UpstreamHttpError,
    UpstreamUnreachable,
    UpstreamMalformedPayload,
    UnknownOperation,
    UnsupportedLookupValue,
}

/// Structured failure payload rendered to callers: a human-readable message
/// plus the machine-readable classification. Never a raw backtrace, never
/// partially-decoded data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Failure {
    pub message: String,
    pub classification: Classification,
}

impl From<EngineError> for Failure {
    fn from(error: EngineError) -> Self {
        Failure {
            classification: error.classification(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_payload_shape() {
        let failure = Failure::from(EngineError::UpstreamHttp {
            url: "https://openapi.twse.com.tw/v1/exchangeReport/STOCK_DAY_ALL".into(),
            status: 503,
        });
        let value = serde_json::to_value(&failure).expect("serialize failure");
        assert_eq!(value["classification"], "upstream_http_error");
        assert!(value["message"].as_str().unwrap().contains("503"));
    }

    #[test]
    fn timeout_classifies_distinctly() {
        let error = EngineError::UpstreamTimeout {
            url: "https://open.er-api.com/v6/latest/JPY".into(),
            timeout_ms: 15_000,
        };
        assert_eq!(error.classification(), Classification::UpstreamTimeout);
    }

    #[test]
    fn unknown_operation_message_names_the_id() {
        let failure = Failure::from(EngineError::UnknownOperation("get_stock_nope".into()));
        assert_eq!(failure.classification, Classification::UnknownOperation);
        assert!(failure.message.contains("get_stock_nope"));
    }
}
