use thiserror::Error;

/// Why a load cycle failed.
///
/// The `Display` text is what the user sees; the store does not
/// distinguish between variants beyond that.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Connection refused, DNS failure, reset, TLS failure.
    #[error("{0}")]
    Network(String),

    #[error("Connection timed out after {seconds}s")]
    ConnectTimeout { seconds: u64 },

    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Endpoint answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    /// Body was not a JSON array of records.
    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}
