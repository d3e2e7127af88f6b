//! Outbound HTTP client used to reach the weather provider.
//!
//! Wraps a pooled `reqwest::Client` with:
//! - a bounded per-request timeout
//! - optional exponential backoff retries with jitter (off unless configured)
//! - structured logging and Prometheus metrics per destination host

use chrono::Utc;
use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_retry::{Retry, strategy::ExponentialBackoff};
use tracing::{error, info, warn};

/// Configuration for the outbound HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResilientClientConfig {
    /// Total timeout for one attempt (in seconds)
    pub timeout_seconds: u64,

    /// Connection timeout (in seconds)
    pub connect_timeout_seconds: u64,

    pub retry: RetryConfig,

    /// Log every attempt with its outcome
    pub enable_detailed_logging: bool,
}

/// Retry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt; 0 sends exactly one request
    pub max_attempts: usize,

    /// Initial retry delay in milliseconds
    pub initial_delay_ms: u64,

    /// Maximum retry delay in milliseconds
    pub max_delay_ms: u64,

    /// Retry on these HTTP status codes
    pub retry_on_status: Vec<u16>,
}

impl Default for ResilientClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            connect_timeout_seconds: 3,
            retry: RetryConfig::default(),
            enable_detailed_logging: true,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 0,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            retry_on_status: vec![429, 500, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// A status only counts as retryable when retries are enabled at all,
    /// otherwise the response is handed back for the caller to interpret.
    fn is_retryable(&self, status: u16) -> bool {
        self.max_attempts > 0 && self.retry_on_status.contains(&status)
    }
}

/// Metrics for outbound HTTP requests
#[derive(Clone)]
pub struct ResilientClientMetrics {
    /// Requests by destination and outcome
    pub http_requests_total: CounterVec,

    /// Request duration by destination, retries included
    pub http_request_duration_seconds: HistogramVec,

    /// Failed attempts by destination and reason
    pub failed_attempts_total: CounterVec,
}

impl ResilientClientMetrics {
    /// Create the collectors and register them with `registry`
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let http_requests_total = CounterVec::new(
            Opts::new(
                "outbound_http_requests_total",
                "Total outbound HTTP requests by destination and outcome",
            ),
            &["destination", "outcome"],
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "outbound_http_request_duration_seconds",
                "Duration of outbound HTTP requests",
            )
            .buckets(vec![0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
            &["destination"],
        )?;

        let failed_attempts_total = CounterVec::new(
            Opts::new(
                "outbound_http_failed_attempts_total",
                "Failed outbound HTTP attempts by destination and reason",
            ),
            &["destination", "reason"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(failed_attempts_total.clone()))?;

        Ok(Self {
            http_requests_total,
            http_request_duration_seconds,
            failed_attempts_total,
        })
    }
}

/// HTTP client with timeouts and optional retries
pub struct ResilientClient {
    client: Client,
    config: ResilientClientConfig,
    metrics: Option<ResilientClientMetrics>,
}

impl ResilientClient {
    pub fn new(
        config: ResilientClientConfig,
        metrics: Option<ResilientClientMetrics>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            config,
            metrics,
        })
    }

    /// Send a GET request to `url` with the given query parameters.
    ///
    /// Query values are never logged, so credentials may travel in them.
    pub async fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Response, ResilientClientError> {
        let destination = extract_destination(url);
        let started = Utc::now();
        let timeout = Duration::from_secs(self.config.timeout_seconds);

        let retry_strategy = ExponentialBackoff::from_millis(self.config.retry.initial_delay_ms)
            .max_delay(Duration::from_millis(self.config.retry.max_delay_ms))
            .map(tokio_retry::strategy::jitter)
            .take(self.config.retry.max_attempts);

        let result = Retry::spawn(retry_strategy, || {
            self.attempt(url, query, &destination, timeout)
        })
        .await;

        let elapsed = (Utc::now() - started).to_std().unwrap_or_default();
        let outcome = match &result {
            Ok(_) => "success",
            Err(ResilientClientError::RetryableStatus(_)) => "retry_exhausted",
            Err(ResilientClientError::NetworkError(_)) => "network_error",
            Err(ResilientClientError::Timeout) => "timeout",
        };
        self.record_request(&destination, outcome, elapsed);

        result
    }

    async fn attempt(
        &self,
        url: &str,
        query: &[(&str, &str)],
        destination: &str,
        timeout: Duration,
    ) -> Result<reqwest::Response, ResilientClientError> {
        let start = std::time::Instant::now();
        let send = self.client.get(url).query(query).send();

        match tokio::time::timeout(timeout, send).await {
            Ok(Ok(response)) => {
                let status = response.status().as_u16();
                let duration_ms = start.elapsed().as_millis();

                if self.config.retry.is_retryable(status) {
                    if self.config.enable_detailed_logging {
                        warn!(destination, url, status, duration_ms, "Request failed with retryable status");
                    }
                    self.record_failed_attempt(destination, "http_status");
                    return Err(ResilientClientError::RetryableStatus(status));
                }

                if self.config.enable_detailed_logging {
                    info!(destination, url, status, duration_ms, "Request completed");
                }
                Ok(response)
            }
            // reqwest errors carry the full request URL, query string included
            Ok(Err(e)) if e.is_timeout() => {
                let e = e.without_url();
                if self.config.enable_detailed_logging {
                    warn!(destination, url, error = %e, "Request timed out");
                }
                self.record_failed_attempt(destination, "timeout");
                Err(ResilientClientError::Timeout)
            }
            Ok(Err(e)) => {
                let e = e.without_url();
                if self.config.enable_detailed_logging {
                    error!(
                        destination,
                        url,
                        error = %e,
                        duration_ms = start.elapsed().as_millis(),
                        "Request failed with network error"
                    );
                }
                self.record_failed_attempt(destination, "network_error");
                Err(ResilientClientError::NetworkError(e))
            }
            Err(_) => {
                if self.config.enable_detailed_logging {
                    warn!(destination, url, timeout_seconds = timeout.as_secs(), "Request timed out");
                }
                self.record_failed_attempt(destination, "timeout");
                Err(ResilientClientError::Timeout)
            }
        }
    }

    fn record_request(&self, destination: &str, outcome: &str, duration: Duration) {
        if let Some(metrics) = &self.metrics {
            metrics
                .http_requests_total
                .with_label_values(&[destination, outcome])
                .inc();
            metrics
                .http_request_duration_seconds
                .with_label_values(&[destination])
                .observe(duration.as_secs_f64());
        }
    }

    fn record_failed_attempt(&self, destination: &str, reason: &str) {
        if let Some(metrics) = &self.metrics {
            metrics
                .failed_attempts_total
                .with_label_values(&[destination, reason])
                .inc();
        }
    }
}

/// Host part of `url`, used as the metrics and log grouping key
fn extract_destination(url: &str) -> String {
    url::Url::parse(url)
        .map(|u| u.host_str().unwrap_or("unknown").to_string())
        .unwrap_or_else(|_| "invalid_url".to_string())
}

/// Errors that can occur with the resilient client
#[derive(Debug, thiserror::Error)]
pub enum ResilientClientError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Retryable status code: {0}")]
    RetryableStatus(u16),
}

impl ResilientClientError {
    /// Message suitable for an API response
    pub fn user_message(&self) -> String {
        match self {
            ResilientClientError::NetworkError(_) => {
                "weather provider unreachable due to network issues".to_string()
            }
            ResilientClientError::Timeout => "weather provider did not respond before timeout".to_string(),
            ResilientClientError::RetryableStatus(status) => {
                format!("weather provider kept returning status {status}")
            }
        }
    }
}
