//! Places error types

use thiserror::Error;

use crate::response::Status;

/// Errors that can occur during Places operations
#[derive(Debug, Error)]
pub enum PlacesError {
    /// The HTTP exchange failed (DNS, connect, TLS, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status
    #[error("Request failed: HTTP {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// The response body is not a valid Places envelope
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A details response reported success without a `result` object
    #[error("Decode error: response carries no result")]
    MissingResult,

    /// The provider rejected the request
    #[error("Places API error ({status}): {message}")]
    Api {
        /// Status reported by the provider
        status: Status,
        /// Provider message, or the status string when none was sent
        message: String,
    },

    /// Caller input rejected before any request was made
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Client configuration is invalid or the HTTP client could not be built
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Broad classification of a [`PlacesError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network-level failure or unexpected HTTP status
    Transport,
    /// Malformed or incomplete response body
    Decode,
    /// Provider-side failure status
    Api,
    /// Invalid caller input or configuration
    Invalid,
}

impl PlacesError {
    /// Classify this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) | Self::HttpStatus { .. } => ErrorKind::Transport,
            Self::Decode(_) | Self::MissingResult => ErrorKind::Decode,
            Self::Api { .. } => ErrorKind::Api,
            Self::InvalidParameter(_) | Self::Configuration(_) => ErrorKind::Invalid,
        }
    }

    /// Provider message of an API error
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Returns true if repeating the same request may succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::HttpStatus { status } => *status >= 500 || *status == 429,
            Self::Api { status, .. } => *status == Status::OverQueryLimit,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> PlacesError {
        PlacesError::from(serde_json::from_str::<serde_json::Value>("not json").unwrap_err())
    }

    #[test]
    fn test_kinds() {
        assert_eq!(PlacesError::HttpStatus { status: 502 }.kind(), ErrorKind::Transport);
        assert_eq!(decode_error().kind(), ErrorKind::Decode);
        assert_eq!(PlacesError::MissingResult.kind(), ErrorKind::Decode);
        assert_eq!(
            PlacesError::Api {
                status: Status::RequestDenied,
                message: "denied".to_string(),
            }
            .kind(),
            ErrorKind::Api
        );
        assert_eq!(
            PlacesError::InvalidParameter("radius".to_string()).kind(),
            ErrorKind::Invalid
        );
        assert_eq!(
            PlacesError::Configuration("timeout".to_string()).kind(),
            ErrorKind::Invalid
        );
    }

    #[test]
    fn test_retryable_errors() {
        assert!(PlacesError::HttpStatus { status: 503 }.is_retryable());
        assert!(PlacesError::HttpStatus { status: 429 }.is_retryable());
        assert!(
            PlacesError::Api {
                status: Status::OverQueryLimit,
                message: "quota exceeded".to_string(),
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!PlacesError::HttpStatus { status: 404 }.is_retryable());
        assert!(!decode_error().is_retryable());
        assert!(!PlacesError::MissingResult.is_retryable());
        assert!(
            !PlacesError::Api {
                status: Status::InvalidRequest,
                message: "missing input".to_string(),
            }
            .is_retryable()
        );
        assert!(!PlacesError::InvalidParameter("x".to_string()).is_retryable());
    }

    #[test]
    fn test_api_message() {
        let err = PlacesError::Api {
            status: Status::OverQueryLimit,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.api_message(), Some("quota exceeded"));
        assert!(PlacesError::MissingResult.api_message().is_none());
    }

    #[test]
    fn test_error_display() {
        let err = PlacesError::Api {
            status: Status::RequestDenied,
            message: "The provided API key is invalid.".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("REQUEST_DENIED"));
        assert!(text.contains("The provided API key is invalid."));

        let err = PlacesError::HttpStatus { status: 500 };
        assert!(err.to_string().contains("500"));
    }
}
