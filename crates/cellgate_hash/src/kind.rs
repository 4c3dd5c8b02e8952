//! Identifier kinds.
//!
//! The runtime marks every identifier it issues with a 3 byte kind marker.
//! Kinds are zero-sized types implementing [`HashKind`], so a
//! [`TypedHash`](crate::TypedHash) of one kind is a distinct Rust type from
//! a hash of another and the two cannot be confused at compile time.
//! Adding a kind means adding a ZST and its two associated consts.

use crate::error::HashError;
use crate::hash::KIND_PREFIX_LEN;

/// A marker for what an identifier identifies.
pub trait HashKind:
    Copy
    + Clone
    + std::fmt::Debug
    + Default
    + std::hash::Hash
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Send
    + Sync
{
    /// The 3 byte marker leading the raw identifier bytes.
    const PREFIX: [u8; KIND_PREFIX_LEN];

    /// Human-readable kind name, used in Debug output and errors.
    const NAME: &'static str;

    /// Check that `marker` is this kind's marker.
    fn check_marker(marker: [u8; KIND_PREFIX_LEN]) -> Result<(), HashError> {
        if marker == Self::PREFIX {
            Ok(())
        } else {
            Err(HashError::BadKind {
                expected: Self::NAME,
                found: marker,
            })
        }
    }
}

/// The DNA kind: identifies a DNA definition. Text form starts `uhC0k`.
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Dna;

impl HashKind for Dna {
    const PREFIX: [u8; KIND_PREFIX_LEN] = [0x84, 0x2d, 0x24];
    const NAME: &'static str = "DnaHash";
}

/// The agent kind: a public signing key standing in for an identity.
/// Not a digest of anything, but carried in the same format. Text form
/// starts `uhCAk`.
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Agent;

impl HashKind for Agent {
    const PREFIX: [u8; KIND_PREFIX_LEN] = [0x84, 0x20, 0x24];
    const NAME: &'static str = "AgentPubKey";
}

/// The entry kind: identifies a piece of content. Text form starts `uhCEk`.
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Entry;

impl HashKind for Entry {
    const PREFIX: [u8; KIND_PREFIX_LEN] = [0x84, 0x21, 0x24];
    const NAME: &'static str = "EntryHash";
}
