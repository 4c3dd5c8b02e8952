//! The seam to the external RPC channel.

use async_trait::async_trait;

/// An already-connected, bidirectional RPC channel to the runtime.
///
/// Implementations own connection lifecycle, request/response
/// correlation, and timeouts. This core treats the channel as an opaque
/// capability: it sends one encoded request, suspends for the paired
/// response, and never reconnects or retries. A handle may be shared
/// across sequential calls within a session; concurrent calls are allowed
/// if the implementation correlates them.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one encoded request and suspend until its response or a
    /// channel failure arrives.
    async fn call(&self, request: Vec<u8>) -> Result<Vec<u8>, TransportError>;

    /// Release the channel. Idempotence is the implementation's choice;
    /// callers invoke this exactly once per handle.
    async fn close(&self) -> Result<(), TransportError>;
}

/// Channel-level failures. Surfaced as-is; recovery is the transport
/// implementation's responsibility.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The connection dropped or was closed under us.
    #[error("connection closed: {0}")]
    Closed(String),
    /// No response arrived within the transport's deadline.
    #[error("request timed out")]
    Timeout,
    /// An I/O level failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Anything implementation-specific.
    #[error("{0}")]
    Other(String),
}
