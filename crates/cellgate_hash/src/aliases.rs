//! Type aliases for the concrete identifier kinds.

use crate::hash::TypedHash;
use crate::kind;

/// Identifies a DNA definition: one half of a cell address.
pub type DnaHash = TypedHash<kind::Dna>;

/// An agent's public signing key: the other half of a cell address, and
/// the provenance asserted on calls. An "identity hash" rather than a
/// digest.
pub type AgentPubKey = TypedHash<kind::Agent>;

/// Identifies a piece of addressable content.
pub type EntryHash = TypedHash<kind::Entry>;
