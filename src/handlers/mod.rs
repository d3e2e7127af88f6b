//! HTTP request handlers and the app factory.

pub mod health;
pub mod metrics;
pub mod openapi;
pub mod root;
pub mod version;
pub mod weather;

pub use health::*;
pub use metrics::*;
pub use openapi::*;
pub use root::*;
pub use version::*;
pub use weather::*;
