//! Error types and user-facing message classification.

use thiserror::Error;

/// Errors that can occur during a movie search request.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Request failed client-side before reaching any server.
    #[error("Request error: {reason}")]
    Request {
        /// The reason the request could not be constructed or sent
        reason: String,
    },

    /// Request settled with a server-reported HTTP status.
    ///
    /// `status` is `0` when the connection failed before any status was
    /// received, matching the XHR convention the upstream contract runs on.
    #[error("Status {status}: {message}")]
    Status {
        /// HTTP status code, or `0` when no response arrived
        status: u16,
        /// Status text accompanying the code
        message: String,
    },

    /// Response body could not be decoded.
    #[error("Decode error: {reason}")]
    Decode {
        /// The reason the body could not be parsed
        reason: String,
    },
}

impl SearchError {
    /// Maps a failure onto the exact message shown in the error toast.
    ///
    /// Classification is pure; the notification itself is a separate
    /// effect owned by the orchestration layer.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Request { reason } | SearchError::Decode { reason } => {
                format!("Error: {reason}")
            }
            SearchError::Status { status: 0, .. } => "Something Went Wrong".to_string(),
            SearchError::Status { status: 404, .. } => "Resource not found".to_string(),
            SearchError::Status { status: 500, .. } => {
                "Server error. Please try again later".to_string()
            }
            SearchError::Status { status, message } => format!("Error {status}: {message}"),
        }
    }

    /// Classifies a transport-level failure from the HTTP client.
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return Self::Status {
                status: status.as_u16(),
                message: error.to_string(),
            };
        }
        if error.is_connect() || error.is_timeout() {
            return Self::Status {
                status: 0,
                message: error.to_string(),
            };
        }
        if error.is_decode() {
            return Self::Decode {
                reason: error.to_string(),
            };
        }
        Self::Request {
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_side_errors_prefix_underlying_message() {
        let error = SearchError::Request {
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(error.user_message(), "Error: relative URL without a base");

        let error = SearchError::Decode {
            reason: "expected value at line 1".to_string(),
        };
        assert_eq!(error.user_message(), "Error: expected value at line 1");
    }

    #[test]
    fn test_status_mapping_is_exact() {
        let cases: &[(u16, &str, &str)] = &[
            (0, "connection refused", "Something Went Wrong"),
            (404, "Not Found", "Resource not found"),
            (500, "Internal Server Error", "Server error. Please try again later"),
        ];

        for (status, message, expected) in cases {
            let error = SearchError::Status {
                status: *status,
                message: (*message).to_string(),
            };
            assert_eq!(error.user_message(), *expected);
        }
    }

    #[test]
    fn test_unmapped_status_falls_back_to_generic_format() {
        let error = SearchError::Status {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(error.user_message(), "Error 503: Service Unavailable");

        let error = SearchError::Status {
            status: 418,
            message: "I'm a teapot".to_string(),
        };
        assert_eq!(error.user_message(), "Error 418: I'm a teapot");
    }
}
