//! A transport-agnostic client core for a conductor runtime.
//!
//! The pieces: a [`Transport`] trait standing in for an already-connected
//! RPC channel (request/response pairing and reconnection are its
//! problem, not ours), an [`AppClient`] that builds and submits zome call
//! envelopes over it, an [`AdminClient`] for runtime listings, and one
//! [`CallError`] taxonomy covering every way a call can fail. Every
//! operation is single-attempt and fail-fast; retries belong to the
//! transport or the caller.
//!
//! ```no_run
//! # async fn example(transport: impl cellgate_client::Transport) -> Result<(), cellgate_client::CallError> {
//! use cellgate_client::{AppClient, ZomeCall};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize)]
//! struct ZomeInput { number: i32 }
//! #[derive(Deserialize)]
//! struct ZomeOutput { other_number: i32 }
//!
//! let client = AppClient::new(transport);
//! let cell_id = client.discover_cell_id("numbers").await?;
//! let call = ZomeCall::build(
//!     cell_id,
//!     "numbers".into(),
//!     "add_ten".into(),
//!     "uhCAkPXiK-DI-fY9erjy68FFQn7L4eyjtjkRH51r8URPFFUX6JLpM".parse()?,
//!     None,
//!     &ZomeInput { number: 10 },
//! )?;
//! let output: ZomeOutput = client.call_zome_typed(call).await?;
//! client.close().await?;
//! # Ok(())
//! # }
//! ```

mod admin_client;
mod app_client;
mod error;
mod transport;

pub use admin_client::AdminClient;
pub use app_client::{call_zome_once, AppClient};
pub use error::CallError;
pub use transport::{Transport, TransportError};

pub use cellgate_hash::{AgentPubKey, DnaHash, EntryHash, HashError};
pub use cellgate_types::{
    AdminRequest, AdminResponse, AppInfo, AppRequest, AppResponse, AppStatus, BuildError,
    CapSecret, CellId, FunctionName, InstalledAppId, InstalledCell, Payload, PayloadError,
    WireError, ZomeCall, ZomeName,
};
