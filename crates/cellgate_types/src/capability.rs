//! Capability secrets.

/// Byte length of a capability secret.
pub const CAP_SECRET_LEN: usize = 64;

/// An opaque authorization token, required by some remote functions and
/// omitted (wire-null) for functions granted unrestricted access. This
/// core never inspects or enforces it; the runtime does.
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CapSecret(#[serde(with = "serde_bytes")] [u8; CAP_SECRET_LEN]);

impl CapSecret {
    /// The raw secret bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; CAP_SECRET_LEN]> for CapSecret {
    fn from(bytes: [u8; CAP_SECRET_LEN]) -> Self {
        Self(bytes)
    }
}

// Secrets stay out of logs.
impl std::fmt::Debug for CapSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CapSecret(..)")
    }
}
