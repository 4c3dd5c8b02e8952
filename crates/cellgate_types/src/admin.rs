//! The admin interface: runtime housekeeping queries.
//!
//! Only the listing operations a client needs to find things to call are
//! modeled here; installing and enabling apps is operator tooling, not
//! client business.

use cellgate_hash::DnaHash;

use crate::cell::CellId;
use crate::wire_error::WireError;

/// The requests available over an admin interface. Variants follow the
/// `verb_noun` convention; responses answer in `noun_verb`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "data")]
pub enum AdminRequest {
    /// List the hashes of every DNA the runtime has registered.
    ListDnas,
    /// List the addresses of every cell the runtime is running.
    ListCellIds,
}

/// The responses to an [`AdminRequest`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "data")]
pub enum AdminResponse {
    /// The request failed on the remote side.
    Error(WireError),
    /// The answer to [`AdminRequest::ListDnas`].
    DnasListed(Vec<DnaHash>),
    /// The answer to [`AdminRequest::ListCellIds`].
    CellIdsListed(Vec<CellId>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellgate_hash::AgentPubKey;

    #[test]
    fn listings_round_trip() {
        let request = AdminRequest::ListDnas;
        let wire = rmp_serde::to_vec_named(&request).unwrap();
        let back: AdminRequest = rmp_serde::from_slice(&wire).unwrap();
        assert_eq!(back, request);

        let response = AdminResponse::CellIdsListed(vec![CellId::new(
            DnaHash::from_core_bytes([1; 32]),
            AgentPubKey::from_core_bytes([2; 32]),
        )]);
        let wire = rmp_serde::to_vec_named(&response).unwrap();
        let back: AdminResponse = rmp_serde::from_slice(&wire).unwrap();
        assert_eq!(back, response);
    }
}
