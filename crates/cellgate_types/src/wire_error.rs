//! The error shape the runtime reports over the wire.

/// Error detail that crosses the interface boundary when the remote side
/// rejects or fails a request. Intended to be application developer
/// facing, so it stays readable; it is surfaced verbatim, never retried.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "data")]
pub enum WireError {
    /// Any internal runtime error.
    InternalError(String),
    /// The request failed to deserialize on the remote side.
    Deserialization(String),
    /// The called function itself raised an error.
    RibosomeError(String),
    /// The provenance/capability pair was not authorized for the call.
    ZomeCallUnauthorized(String),
}

impl WireError {
    /// Convert any displayable error into the internal variant. Display
    /// format, because this text is meant for users.
    pub fn internal<T: std::fmt::Display>(error: T) -> Self {
        WireError::InternalError(error.to_string())
    }
}
