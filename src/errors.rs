//! Error types surfaced by the weather endpoints and by startup configuration.

use crate::models::ErrorResponse;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

/// Failures of a weather lookup, each mapped to a distinct HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("City name must not be empty")]
    InvalidCity,

    #[error("City '{city}' not found")]
    NotFound { city: String },

    #[error("Invalid weather provider API key")]
    Unauthorized,

    #[error("Weather provider error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl WeatherError {
    /// Label used for the `outcome` dimension of lookup metrics
    pub fn outcome(&self) -> &'static str {
        match self {
            WeatherError::InvalidCity => "invalid_city",
            WeatherError::NotFound { .. } => "not_found",
            WeatherError::Unauthorized => "unauthorized",
            WeatherError::Upstream { .. } => "upstream_error",
            WeatherError::Internal(_) => "internal_error",
        }
    }
}

impl ResponseError for WeatherError {
    fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::InvalidCity => StatusCode::UNPROCESSABLE_ENTITY,
            WeatherError::NotFound { .. } => StatusCode::NOT_FOUND,
            WeatherError::Unauthorized => StatusCode::UNAUTHORIZED,
            WeatherError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            WeatherError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.to_string(),
        })
    }
}

/// Errors raised while loading configuration at process start
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),

    #[error("{name} has an invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_distinct() {
        let errors = [
            WeatherError::InvalidCity,
            WeatherError::NotFound {
                city: "Atlantis".to_string(),
            },
            WeatherError::Unauthorized,
            WeatherError::Upstream {
                status: 500,
                message: "boom".to_string(),
            },
            WeatherError::Internal("bad payload".to_string()),
        ];

        let mut codes: Vec<u16> = errors.iter().map(|e| e.status_code().as_u16()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes, vec![401, 404, 422, 500, 502]);
    }

    #[test]
    fn test_not_found_names_city() {
        let err = WeatherError::NotFound {
            city: "Nonexistent_XYZ".to_string(),
        };
        assert!(err.to_string().contains("Nonexistent_XYZ"));
        assert_eq!(err.outcome(), "not_found");
    }

    #[test]
    fn test_upstream_carries_status() {
        let err = WeatherError::Upstream {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Weather provider error (503): Service Unavailable"
        );
    }
}
