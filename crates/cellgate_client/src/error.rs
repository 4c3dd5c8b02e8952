//! The one failure taxonomy for everything a client can do.

use cellgate_hash::HashError;
use cellgate_types::{BuildError, InstalledAppId, Payload, PayloadError, WireError};

use crate::transport::TransportError;

/// Why a client operation failed. Exactly one variant per failure; no
/// partial results, nothing swallowed, nothing retried here.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// An identifier failed validation before anything was sent. Local
    /// and non-retryable: fix the input.
    #[error(transparent)]
    MalformedIdentifier(#[from] HashError),

    /// The envelope could not be built from the given parts. Local and
    /// non-retryable.
    #[error(transparent)]
    InvalidRequest(#[from] BuildError),

    /// Our own request envelope failed to serialize. Local; indicates a
    /// bug rather than bad caller input.
    #[error("request envelope could not be serialized: {0}")]
    RequestEncoding(PayloadError),

    /// The response arrived but did not match the expected shape. The raw
    /// response rides along for diagnostics. Local, non-retryable.
    #[error("response did not match the expected schema: {source}")]
    SchemaMismatch {
        /// The undecodable response as received.
        raw: Payload,
        /// What the decoder objected to.
        source: PayloadError,
    },

    /// The runtime reports the remote function failed or the call was
    /// denied. Surfaced verbatim.
    #[error("remote call failed: {0:?}")]
    Remote(WireError),

    /// The channel failed underneath the call. Recovery belongs to the
    /// transport, not this layer.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// Discovery found no app registered under the given id.
    #[error("no app installed with id {0:?}")]
    AppNotFound(InstalledAppId),

    /// Discovery found the app, but it has zero cells.
    #[error("app {0:?} has no cells installed")]
    NoCellsInstalled(InstalledAppId),

    /// The runtime answered with a response variant that does not answer
    /// the request we sent.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
