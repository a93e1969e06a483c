//! Search executor configuration

use std::time::Duration;

/// Configuration for batched, rate-limited search execution
///
/// The defaults are deliberately small: the external service enforces a
/// requests-per-minute ceiling and the calling environment enforces a
/// maximum single-execution-unit duration, so each batch must finish well
/// inside both.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Tasks per checkpointed batch
    pub batch_size: usize,

    /// Maximum simultaneous in-flight requests within a batch
    pub max_concurrent: usize,

    /// Maximum hits requested per query
    pub max_results_per_query: usize,

    /// Per-request timeout in milliseconds; a timed-out request is recorded
    /// as a task failure, never retried automatically
    pub request_timeout_ms: u64,

    /// Delay between request launches within a batch, in milliseconds
    pub inter_request_delay_ms: u64,

    /// Mandatory delay between batches, in milliseconds
    pub inter_batch_delay_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            batch_size: 4,
            max_concurrent: 3,
            max_results_per_query: 20,
            request_timeout_ms: 20_000,
            inter_request_delay_ms: 250,
            inter_batch_delay_ms: 1_000,
        }
    }
}

impl SearchConfig {
    /// Per-request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Intra-batch launch delay as a Duration
    pub fn inter_request_delay(&self) -> Duration {
        Duration::from_millis(self.inter_request_delay_ms)
    }

    /// Inter-batch delay as a Duration
    pub fn inter_batch_delay(&self) -> Duration {
        Duration::from_millis(self.inter_batch_delay_ms)
    }

    /// A configuration suited to tests: tiny timeouts, no pacing delays
    pub fn fast() -> Self {
        Self {
            batch_size: 4,
            max_concurrent: 3,
            max_results_per_query: 20,
            request_timeout_ms: 200,
            inter_request_delay_ms: 0,
            inter_batch_delay_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.batch_size, 4);
        assert_eq!(config.max_concurrent, 3);
        assert_eq!(config.request_timeout(), Duration::from_secs(20));
    }

    #[test]
    fn test_fast_config_has_no_delays() {
        let config = SearchConfig::fast();
        assert_eq!(config.inter_request_delay(), Duration::ZERO);
        assert_eq!(config.inter_batch_delay(), Duration::ZERO);
    }
}
