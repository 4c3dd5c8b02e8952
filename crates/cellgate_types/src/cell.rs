//! Cell addressing.

use cellgate_hash::{AgentPubKey, DnaHash};

/// The address of a cell: a DNA instance operated by a specific agent.
///
/// The pair is ordered, DNA identity first and agent identity second, and
/// serializes in that order. The components are distinct hash types, so a
/// swapped construction does not type-check.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct CellId(DnaHash, AgentPubKey);

impl CellId {
    /// Address the cell running `dna_hash` on behalf of `agent_pub_key`.
    pub fn new(dna_hash: DnaHash, agent_pub_key: AgentPubKey) -> Self {
        Self(dna_hash, agent_pub_key)
    }

    /// The DNA identity half of the address.
    pub fn dna_hash(&self) -> &DnaHash {
        &self.0
    }

    /// The agent identity half of the address.
    pub fn agent_pub_key(&self) -> &AgentPubKey {
        &self.1
    }

    /// Split back into the component identifiers.
    pub fn into_dna_and_agent(self) -> (DnaHash, AgentPubKey) {
        (self.0, self.1)
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellgate_hash::TypedHash;

    #[test]
    fn component_order_is_significant() {
        let dna = DnaHash::from_core_bytes([1; 32]);
        let agent = AgentPubKey::from_core_bytes([2; 32]);
        let cell_id = CellId::new(dna.clone(), agent.clone());

        // Same core bytes framed the other way around yield a different
        // address, not an accidentally equal one.
        let swapped = CellId::new(
            TypedHash::from_core_bytes([2; 32]),
            TypedHash::from_core_bytes([1; 32]),
        );
        assert_ne!(cell_id, swapped);

        assert_eq!(cell_id.dna_hash(), &dna);
        assert_eq!(cell_id.agent_pub_key(), &agent);
    }

    #[test]
    fn wire_form_is_a_pair_of_raw_identifiers() {
        let dna = DnaHash::from_core_bytes([1; 32]);
        let agent = AgentPubKey::from_core_bytes([2; 32]);
        let cell_id = CellId::new(dna.clone(), agent.clone());

        let wire = rmp_serde::to_vec_named(&cell_id).unwrap();
        let (dna_bytes, agent_bytes): (serde_bytes::ByteBuf, serde_bytes::ByteBuf) =
            rmp_serde::from_slice(&wire).unwrap();
        assert_eq!(dna_bytes.as_ref(), dna.as_raw_bytes());
        assert_eq!(agent_bytes.as_ref(), agent.as_raw_bytes());
    }
}
