//! Response models for the fixed and operational endpoints.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Response model for the root endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct RootResponse {
    pub message: String,
}

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Body returned with every failed request
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorResponse {
    /// Human readable description of the failure
    pub detail: String,
}
