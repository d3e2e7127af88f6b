//! Business logic and service layer modules.
//!
//! `weather` talks to the provider through `resilient_client`, `forecast`
//! holds the per-day aggregation, and `metrics` owns the Prometheus registry.

pub mod forecast;
pub mod metrics;
pub mod resilient_client;
pub mod weather;

pub use forecast::*;
pub use metrics::*;
pub use resilient_client::{
    ResilientClient, ResilientClientConfig, ResilientClientError, ResilientClientMetrics,
    RetryConfig,
};
pub use weather::*;
