//! The canonical textual codec: `u` + base64url-without-padding.
//!
//! The text form is a de facto interop format; other systems parse it
//! byte-for-byte. The single `u` prefix marks "base64url, no padding, raw
//! bytes follow" and is never itself part of the base64 body.

use base64::prelude::*;

use crate::error::{HashError, HashResult};
use crate::hash::{TypedHash, CHECKSUM_LEN, CORE_LEN, FULL_LEN, KIND_PREFIX_LEN};
use crate::kind::HashKind;

/// Encode raw identifier bytes into the canonical text form.
pub fn encode_raw_bytes(bytes: &[u8]) -> String {
    format!("u{}", BASE64_URL_SAFE_NO_PAD.encode(bytes))
}

/// Decode canonical text into raw identifier bytes, validating prefix,
/// base64 body, length, and checksum. Kind-agnostic; the typed entry
/// point is [`TypedHash::from_b64_str`].
pub fn decode_raw_bytes(text: &str) -> HashResult<Vec<u8>> {
    let body = text
        .strip_prefix('u')
        .ok_or_else(|| HashError::MissingPrefix(text.to_string()))?;
    let bytes = BASE64_URL_SAFE_NO_PAD
        .decode(body)
        .map_err(|_| HashError::BadBase64(text.to_string()))?;
    if bytes.len() != FULL_LEN {
        return Err(HashError::BadSize { got: bytes.len() });
    }
    let core = &bytes[KIND_PREFIX_LEN..KIND_PREFIX_LEN + CORE_LEN];
    if bytes[KIND_PREFIX_LEN + CORE_LEN..] != checksum(core) {
        return Err(HashError::BadChecksum(text.to_string()));
    }
    Ok(bytes)
}

/// The 4 byte integrity check the runtime appends to every identifier:
/// a 16 byte blake2b digest of the core bytes, XOR-folded down to 4.
pub(crate) fn checksum(core: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = blake2b_simd::Params::new()
        .hash_length(16)
        .hash(core);
    let digest = digest.as_bytes();
    let mut out = [digest[0], digest[1], digest[2], digest[3]];
    for chunk in digest[CHECKSUM_LEN..].chunks_exact(CHECKSUM_LEN) {
        for (out_byte, digest_byte) in out.iter_mut().zip(chunk) {
            *out_byte ^= digest_byte;
        }
    }
    out
}

impl<K: HashKind> TypedHash<K> {
    /// Parse the canonical text form, validating everything including the
    /// kind marker.
    pub fn from_b64_str(text: &str) -> HashResult<Self> {
        let bytes = decode_raw_bytes(text)?;
        Self::from_raw_bytes(bytes)
    }
}

impl<K: HashKind> std::fmt::Display for TypedHash<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&encode_raw_bytes(self.as_raw_bytes()))
    }
}

impl<K: HashKind> std::str::FromStr for TypedHash<K> {
    type Err = HashError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_b64_str(text)
    }
}

impl<K: HashKind> TryFrom<&str> for TypedHash<K> {
    type Error = HashError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::from_b64_str(text)
    }
}

impl<K: HashKind> TryFrom<String> for TypedHash<K> {
    type Error = HashError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::from_b64_str(&text)
    }
}
