//! # Error Types for the Pairing API Client
//!
//! Every failure a caller can see is a [`PairingError`]. Variants are
//! grouped by [`ErrorKind`]: transport failures (network, timeout,
//! unexpected status), decode failures (malformed or incomplete JSON),
//! request failures detected locally, and configuration failures.

use thiserror::Error;

/// Main error type for the pairing client
#[derive(Error, Debug)]
pub enum PairingError {
    // =========================================================================
    // TRANSPORT ERRORS
    // =========================================================================

    /// The HTTP exchange could not be completed
    #[error("Request to '{url}' failed: {reason}")]
    NetworkError { url: String, reason: String },

    /// The transport gave up waiting for a response
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// The service answered with a status other than the expected one
    #[error("Unexpected status from '{url}': expected {expected}, got {actual}")]
    UnexpectedStatus {
        url: String,
        expected: u16,
        actual: u16,
        body: String,
    },

    // =========================================================================
    // DECODE ERRORS
    // =========================================================================

    /// Response body is not valid JSON or lacks a required field
    #[error("Failed to decode response: {0}")]
    DecodeError(String),

    // =========================================================================
    // REQUEST ERRORS
    // =========================================================================

    /// Request body could not be serialized
    #[error("Failed to encode request: {0}")]
    EncodeError(String),

    /// Request arguments rejected before any call was made
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // =========================================================================
    // CONFIGURATION ERRORS
    // =========================================================================

    /// Pairing URL is malformed or not http(s)
    #[error("Invalid pairing URL: {0}")]
    InvalidUrl(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Result type alias using PairingError
pub type PairingResult<T> = Result<T, PairingError>;

/// Coarse classification of a [`PairingError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure or unexpected HTTP status
    Transport,
    /// Malformed or incomplete JSON response
    Decode,
    /// Caller-supplied request could not be sent
    Request,
    /// Client could not be configured
    Configuration,
}

// =============================================================================
// ERROR CONVERSIONS
// =============================================================================

impl From<url::ParseError> for PairingError {
    fn from(err: url::ParseError) -> Self {
        PairingError::InvalidUrl(err.to_string())
    }
}

// =============================================================================
// ERROR CATEGORIES (for logging)
// =============================================================================

impl PairingError {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            PairingError::NetworkError { .. }
            | PairingError::Timeout { .. }
            | PairingError::UnexpectedStatus { .. } => ErrorKind::Transport,

            PairingError::DecodeError(_) => ErrorKind::Decode,

            PairingError::EncodeError(_) | PairingError::InvalidRequest(_) => ErrorKind::Request,

            PairingError::InvalidUrl(_) | PairingError::ConfigurationError(_) => {
                ErrorKind::Configuration
            }
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Transport => "transport",
            ErrorKind::Decode => "decode",
            ErrorKind::Request => "request",
            ErrorKind::Configuration => "config",
        }
    }

    /// Whether the error is a transport failure
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// Whether the error is a decode failure
    pub fn is_decode(&self) -> bool {
        self.kind() == ErrorKind::Decode
    }

    /// HTTP status returned by the service, if the failure carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            PairingError::UnexpectedStatus { actual, .. } => Some(*actual),
            _ => None,
        }
    }

    /// Check if the error is worth retrying by the caller.
    ///
    /// The client never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            PairingError::NetworkError { .. } | PairingError::Timeout { .. } => true,
            PairingError::UnexpectedStatus { actual, .. } => *actual >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unexpected(actual: u16) -> PairingError {
        PairingError::UnexpectedStatus {
            url: "http://localhost/v1/test/agent/devices".into(),
            expected: 201,
            actual,
            body: String::new(),
        }
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(unexpected(409).kind(), ErrorKind::Transport);
        assert_eq!(
            PairingError::DecodeError("missing field `data`".into()).kind(),
            ErrorKind::Decode
        );
        assert_eq!(
            PairingError::InvalidRequest("empty realm".into()).kind(),
            ErrorKind::Request
        );
        assert_eq!(
            PairingError::InvalidUrl("relative URL without a base".into()).kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn test_error_category() {
        assert_eq!(unexpected(404).category(), "transport");
        assert_eq!(PairingError::DecodeError("x".into()).category(), "decode");
        assert_eq!(PairingError::ConfigurationError("bad timeout".into()).category(), "config");
    }

    #[test]
    fn test_is_retryable() {
        let err = PairingError::Timeout { url: "http://localhost".into() };
        assert!(err.is_retryable());

        assert!(unexpected(503).is_retryable());
        assert!(!unexpected(409).is_retryable());
        assert!(!PairingError::DecodeError("bad json".into()).is_retryable());
    }

    #[test]
    fn test_status() {
        assert_eq!(unexpected(409).status(), Some(409));
        assert_eq!(PairingError::DecodeError("x".into()).status(), None);
    }

    #[test]
    fn test_display_mentions_statuses() {
        let msg = unexpected(409).to_string();
        assert!(msg.contains("expected 201"));
        assert!(msg.contains("got 409"));
    }

    #[test]
    fn test_url_parse_error_conversion() {
        let err: PairingError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
