//! The typed identifier value itself.

use std::marker::PhantomData;

use crate::error::{HashError, HashResult};
use crate::kind::HashKind;

/// Length of the kind marker leading the raw bytes.
pub const KIND_PREFIX_LEN: usize = 3;
/// Length of the core bytes (the digest, or key material for agent keys).
pub const CORE_LEN: usize = 32;
/// Length of the trailing checksum over the core bytes.
pub const CHECKSUM_LEN: usize = 4;
/// Length of the full raw identifier (39 = 3 + 32 + 4).
pub const FULL_LEN: usize = KIND_PREFIX_LEN + CORE_LEN + CHECKSUM_LEN;

/// A typed, content-addressed identifier as issued by the runtime.
///
/// Owns the full 39 raw bytes, kind marker and checksum included. The kind
/// lives in the type parameter, so a `TypedHash<kind::Dna>` can never be
/// passed where a `TypedHash<kind::Agent>` is expected. Immutable once
/// constructed.
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TypedHash<K: HashKind> {
    bytes: Vec<u8>,
    kind: PhantomData<K>,
}

impl<K: HashKind> TypedHash<K> {
    /// Build an identifier from bare core bytes, computing the checksum
    /// and prepending this kind's marker. Use this when minting fixtures
    /// or re-wrapping a digest that arrived without its framing.
    pub fn from_core_bytes(core: [u8; CORE_LEN]) -> Self {
        let mut bytes = Vec::with_capacity(FULL_LEN);
        bytes.extend_from_slice(&K::PREFIX);
        bytes.extend_from_slice(&core);
        bytes.extend_from_slice(&crate::encode::checksum(&core));
        Self {
            bytes,
            kind: PhantomData,
        }
    }

    /// Wrap full raw bytes already carrying a marker and checksum, as they
    /// arrive off the wire. Validates length and kind marker; the checksum
    /// is trusted as minted by the runtime.
    pub fn from_raw_bytes(bytes: Vec<u8>) -> HashResult<Self> {
        if bytes.len() != FULL_LEN {
            return Err(HashError::BadSize { got: bytes.len() });
        }
        K::check_marker([bytes[0], bytes[1], bytes[2]])?;
        Ok(Self {
            bytes,
            kind: PhantomData,
        })
    }

    /// The full 39 raw bytes.
    pub fn as_raw_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The 32 core bytes, without marker or checksum.
    pub fn core_bytes(&self) -> &[u8] {
        &self.bytes[KIND_PREFIX_LEN..KIND_PREFIX_LEN + CORE_LEN]
    }

    /// The 4 trailing checksum bytes.
    pub fn checksum_bytes(&self) -> &[u8] {
        &self.bytes[KIND_PREFIX_LEN + CORE_LEN..]
    }

    /// Consume into the raw byte vector.
    pub fn into_raw_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

// NB: Display lives in the encode module alongside the codec.
impl<K: HashKind> std::fmt::Debug for TypedHash<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", K::NAME, self)
    }
}
