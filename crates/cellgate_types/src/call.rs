//! The outbound call envelope.

use cellgate_hash::AgentPubKey;
use serde::Serialize;

use crate::capability::CapSecret;
use crate::cell::CellId;
use crate::payload::{Payload, PayloadError};
use crate::zome::{FunctionName, ZomeName};

/// The data provided over the app interface to invoke a zome function.
///
/// Field names are the wire keys; identifiers travel as raw bytes. The
/// envelope is an immutable value and performs no I/O. Build it with
/// [`ZomeCall::build`], then hand it to a client to submit.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ZomeCall {
    /// The cell containing the zome to call.
    pub cell_id: CellId,
    /// The zome containing the function.
    pub zome_name: ZomeName,
    /// The function to call.
    pub fn_name: FunctionName,
    /// The serialized argument document.
    pub payload: Payload,
    /// Authorization token. `None` (wire-null) suffices where the target
    /// function has been granted unrestricted access; the runtime decides,
    /// this core just carries it.
    pub cap_secret: Option<CapSecret>,
    /// The identity asserted as the caller. The runtime trusts this
    /// assertion at this interface; authorization is its concern.
    pub provenance: AgentPubKey,
}

impl ZomeCall {
    /// Validate the parts and serialize the payload into an envelope.
    /// Equal inputs build equal envelopes.
    pub fn build<P: Serialize>(
        cell_id: CellId,
        zome_name: ZomeName,
        fn_name: FunctionName,
        provenance: AgentPubKey,
        cap_secret: Option<CapSecret>,
        payload: &P,
    ) -> Result<Self, BuildError> {
        if zome_name.as_str().is_empty() {
            return Err(BuildError::EmptyZomeName);
        }
        if fn_name.as_str().is_empty() {
            return Err(BuildError::EmptyFunctionName);
        }
        let payload = Payload::encode(payload)?;
        Ok(Self {
            cell_id,
            zome_name,
            fn_name,
            payload,
            cap_secret,
            provenance,
        })
    }
}

/// Rejections from [`ZomeCall::build`]. Local, caller errors; nothing was
/// sent.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The zome name was empty.
    #[error("zome name must not be empty")]
    EmptyZomeName,
    /// The function name was empty.
    #[error("function name must not be empty")]
    EmptyFunctionName,
    /// The payload value could not be serialized.
    #[error(transparent)]
    Payload(#[from] PayloadError),
}
