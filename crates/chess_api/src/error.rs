//! Error types for the chess API client
//!
//! Every failure of a best-move query surfaces as a single [`ChessApiError`].
//! Callers that need to branch on the failure class use [`ChessApiError::kind`]
//! rather than matching on message text.

use std::fmt;
use thiserror::Error;

/// Boxed error produced by a transport that failed before returning a response
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while querying the chess API
#[derive(Error, Debug)]
pub enum ChessApiError {
    /// The service answered with a status outside `200..300`
    #[error("API request failed with status code {status}")]
    Transport { status: u16 },

    /// The transport could not deliver the request or read the reply
    #[error("API request could not be sent: {source}")]
    Send {
        #[source]
        source: BoxError,
    },

    /// The response body is not the JSON shape the service documents
    #[error("{message}")]
    InvalidResponse { message: String },

    /// The service reported an error inline in a successful response
    #[error("{message}")]
    Api { message: String },

    /// The request payload could not be serialized
    #[error("Failed to encode API request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Discriminator for [`ChessApiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChessApiErrorKind {
    /// Non-2xx status or a request that never got a response
    Transport,
    /// Malformed or incomplete response body
    InvalidResponse,
    /// Inline error text from the remote engine
    ApiError,
    /// Payload serialization failure
    InvalidRequest,
}

impl ChessApiError {
    pub(crate) fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Wraps any transport-level failure
    pub fn send(source: impl Into<BoxError>) -> Self {
        Self::Send {
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ChessApiErrorKind {
        match self {
            Self::Transport { .. } | Self::Send { .. } => ChessApiErrorKind::Transport,
            Self::InvalidResponse { .. } => ChessApiErrorKind::InvalidResponse,
            Self::Api { .. } => ChessApiErrorKind::ApiError,
            Self::Encode(_) => ChessApiErrorKind::InvalidRequest,
        }
    }

    /// HTTP status code, present only for non-2xx responses
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport { status } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ChessApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transport => "transport",
            Self::InvalidResponse => "invalid_response",
            Self::ApiError => "api_error",
            Self::InvalidRequest => "invalid_request",
        };
        f.write_str(name)
    }
}

/// Result type alias for chess API operations
pub type ChessApiResult<T> = Result<T, ChessApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_message_contains_status() {
        let err = ChessApiError::Transport { status: 503 };
        assert_eq!(err.to_string(), "API request failed with status code 503");
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(err.kind(), ChessApiErrorKind::Transport);
    }

    #[test]
    fn test_api_error_message_is_verbatim() {
        let err = ChessApiError::Api {
            message: "error: Invalid FEN".to_string(),
        };
        assert_eq!(err.to_string(), "error: Invalid FEN");
        assert_eq!(err.status_code(), None);
        assert_eq!(err.kind(), ChessApiErrorKind::ApiError);
    }

    #[test]
    fn test_send_error_is_transport_kind_without_status() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ChessApiError::send(io);
        assert_eq!(err.kind(), ChessApiErrorKind::Transport);
        assert_eq!(err.status_code(), None);
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_kind_display_names() {
        assert_eq!(ChessApiErrorKind::Transport.to_string(), "transport");
        assert_eq!(
            ChessApiErrorKind::InvalidResponse.to_string(),
            "invalid_response"
        );
        assert_eq!(ChessApiErrorKind::ApiError.to_string(), "api_error");
    }
}
