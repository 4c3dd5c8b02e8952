//! Decode failures for identifier text and bytes.

/// Everything that can go wrong while validating an identifier. Each
/// variant keeps the offending input so callers can report which
/// identifier failed without re-deriving context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    /// The text form did not start with the `u` prefix character. This is
    /// the classic symptom of a caller that stripped the prefix once
    /// already and is decoding the remainder a second time.
    #[error("identifier text {0:?} is missing the leading 'u' prefix")]
    MissingPrefix(String),

    /// The text after the prefix was not valid base64url-without-padding.
    #[error("identifier text {0:?} is not valid base64url")]
    BadBase64(String),

    /// The decoded byte count was not the expected 39.
    #[error("identifier has {got} bytes, expected 39")]
    BadSize {
        /// Byte count actually found.
        got: usize,
    },

    /// The leading kind marker did not match the declared kind.
    #[error("identifier kind marker {found:?} does not match expected kind {expected}")]
    BadKind {
        /// Name of the kind the caller declared.
        expected: &'static str,
        /// Marker bytes actually found.
        found: [u8; 3],
    },

    /// The trailing checksum bytes did not match a recomputation over the
    /// core bytes.
    #[error("identifier text {0:?} failed its checksum")]
    BadChecksum(String),
}

/// Result alias for identifier validation.
pub type HashResult<T> = Result<T, HashError>;
