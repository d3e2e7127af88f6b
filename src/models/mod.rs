//! Data models for the weather proxy.
//!
//! `api` and `weather` hold the request/response types served to clients,
//! `provider` holds the payload records decoded from the weather provider.

pub mod api;
pub mod provider;
pub mod weather;

pub use api::*;
pub use provider::*;
pub use weather::*;
