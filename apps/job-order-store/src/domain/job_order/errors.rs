//! Order store errors.

use thiserror::Error;

/// Errors surfaced by order store writes and backend construction.
///
/// Reads never fail: unreadable or malformed data degrades to an empty
/// collection and is logged instead.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The remote request could not be sent.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The local key-value store rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The collection could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend could not be built from its configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StoreError {
    /// Whether the failure happened before anything reached the backend.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            StoreError::Transport("connection refused".to_string()).to_string(),
            "Transport error: connection refused"
        );
        assert_eq!(
            StoreError::Storage("disk full".to_string()).to_string(),
            "Storage error: disk full"
        );
    }

    #[test]
    fn serde_errors_convert() {
        let err = serde_json::from_str::<Vec<u8>>("nope").unwrap_err();
        let store_err: StoreError = err.into();
        assert!(matches!(store_err, StoreError::Serialization(_)));
        assert!(!store_err.is_transport());
    }
}
