//! Configuration structures and loading utilities.
//!
//! Every structure is read once at process start via `from_env()` and handed
//! to the app factory; nothing reads the environment while serving requests.

pub mod metrics;
pub mod resilient_client;
pub mod server;
pub mod weather;

pub use metrics::*;
pub use server::*;
pub use weather::*;

/// Serialises unit tests that mutate process environment variables
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
