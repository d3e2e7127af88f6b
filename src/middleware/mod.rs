//! Middleware shared by every route: request ids with access logging, and
//! request metrics.

pub mod metrics;
pub mod request_id;

pub use metrics::*;
pub use request_id::*;
