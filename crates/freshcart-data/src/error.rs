//! Data-boundary error types.

use freshcart_commerce::CommerceError;
use thiserror::Error;

/// Errors from the remote record store.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The requested record does not exist. Surfaced to pages as a
    /// display-level error state with a retry affordance.
    #[error("{record_type} not found: {id}")]
    NotFound {
        record_type: &'static str,
        id: String,
    },

    /// The service answered with an error status.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// The request did not complete in time.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The service could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The response body could not be decoded.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// A record decoded but failed domain normalization.
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] CommerceError),
}

impl FetchError {
    /// Whether retrying the same request could plausibly succeed.
    ///
    /// Missing records and malformed payloads never become valid by
    /// asking again.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Http { status, .. } => (500..600).contains(status),
            FetchError::Timeout(_) | FetchError::Connection(_) => true,
            FetchError::NotFound { .. }
            | FetchError::Deserialization(_)
            | FetchError::InvalidRecord(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryability() {
        assert!(FetchError::Timeout("products".into()).is_retryable());
        assert!(FetchError::Http {
            status: 503,
            url: "/products".into()
        }
        .is_retryable());
        assert!(!FetchError::Http {
            status: 404,
            url: "/products".into()
        }
        .is_retryable());
        assert!(!FetchError::NotFound {
            record_type: "product",
            id: "9".into()
        }
        .is_retryable());
    }
}
