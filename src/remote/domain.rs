//! Internal domain types for the remote layer.
//!
//! These types are OUR types - they don't change when the backend changes.
//! External API responses get converted into these via the per-module
//! adapters; DTO types never leave their client modules.

/// Outcome of adding a track to a persisted playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTrackOutcome {
    /// The server already had this track; the count did not grow
    pub already_exists: bool,
    /// Optional human-readable detail from the server
    pub message: Option<String>,
}

/// Errors from the remote REST services.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoteError {
    /// The operation requires a signed-in session
    #[error("authentication required")]
    Unauthenticated,

    /// The request never completed (DNS, connect, TLS, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with an error; carries its message when present
    #[error("API request failed: {0}")]
    Api(String),

    /// The response body did not match the wire contract
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The addressed resource does not exist
    #[error("not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RemoteError::Unauthenticated.to_string(),
            "authentication required"
        );
        assert!(
            RemoteError::Api("playlist name taken".to_string())
                .to_string()
                .contains("playlist name taken")
        );
    }
}
