//! Engine configuration with environment overrides.

use std::env;
use std::time::Duration;

/// Uniform timeout applied to every upstream request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
/// Single TTL window shared by all cache entries.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);
/// Entry-count bound of the cache store.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;
/// Records returned for a list operation when the caller supplies neither a
/// lookup value nor an explicit limit.
pub const DEFAULT_RESULT_LIMIT: usize = 50;
/// Hard ceiling on caller-supplied result limits.
pub const MAX_RESULT_LIMIT: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub request_timeout: Duration,
    pub cache_ttl: Duration,
    pub cache_capacity: usize,
    pub default_result_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            default_result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Defaults overlaid with `TAIFIN_HTTP_TIMEOUT_SECS`,
    /// `TAIFIN_CACHE_TTL_SECS` and `TAIFIN_CACHE_CAPACITY` when set and
    /// parseable; anything else is ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(secs) = env_u64("TAIFIN_HTTP_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = env_u64("TAIFIN_CACHE_TTL_SECS") {
            config.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(capacity) = env_u64("TAIFIN_CACHE_CAPACITY") {
            config.cache_capacity = capacity as usize;
        }
        config
    }

    /// Clamp a caller-supplied result limit into `1..=MAX_RESULT_LIMIT`,
    /// falling back to the configured default when absent.
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_result_limit)
            .clamp(1, MAX_RESULT_LIMIT)
    }
}

fn env_u64(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|raw| raw.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limit_defaults_and_bounds() {
        let config = EngineConfig::default();
        assert_eq!(config.clamp_limit(None), DEFAULT_RESULT_LIMIT);
        assert_eq!(config.clamp_limit(Some(10)), 10);
        assert_eq!(config.clamp_limit(Some(0)), 1);
        assert_eq!(config.clamp_limit(Some(10_000)), MAX_RESULT_LIMIT);
    }
}
