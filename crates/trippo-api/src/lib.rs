//! Trippo API client library
//!
//! This crate provides the HTTP client for the Trippo backend, the wire
//! types for tours and organizers, the listing query payload, and the
//! third-party weather lookup shown on the home screen.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod de;
pub mod http;
pub mod query;
pub mod tours;
pub mod types;
pub mod weather;

pub use http::{ApiClient, ApiClientConfig, ApiRequest, ApiResponse};
pub use query::{Gender, Pagination, SortOption, TourQuery};
pub use tours::TourApi;
pub use types::{LocalizedText, MediaFile, Organizer, TourSummary};
pub use weather::{Coordinates, CurrentWeather, WeatherClient, WeatherConfig};

/// Result type for Trippo API operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Trippo API operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure (connection refused, timeout, TLS, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Non-success response from the server
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from server
        message: String,
    },
}

impl Error {
    /// HTTP status of the failed response, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Network(err) if err.status().is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let err = Error::InvalidInput("test".to_string());
        assert!(err.to_string().contains("Invalid input"));
        assert_eq!(err.status(), None);
        assert!(!err.is_transport());
    }

    #[test]
    fn test_api_error_status() {
        let err = Error::Api { status: 502, message: "Bad gateway".to_string() };
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.to_string(), "API error (502): Bad gateway");
    }
}
