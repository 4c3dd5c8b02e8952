//! The admin interface client.

use tracing::instrument;

use cellgate_hash::DnaHash;
use cellgate_types::{AdminRequest, AdminResponse, CellId, Payload};

use crate::error::CallError;
use crate::transport::Transport;

/// A client for one admin interface session. Same shape as
/// [`AppClient`](crate::AppClient), different endpoint vocabulary.
#[derive(Debug)]
pub struct AdminClient<T: Transport> {
    transport: T,
}

impl<T: Transport> AdminClient<T> {
    /// Wrap an already-connected transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// List every DNA hash the runtime has registered.
    #[instrument(skip(self))]
    pub async fn list_dnas(&self) -> Result<Vec<DnaHash>, CallError> {
        let response = self.send(&AdminRequest::ListDnas).await?;
        match response {
            AdminResponse::DnasListed(dnas) => Ok(dnas),
            AdminResponse::Error(error) => Err(CallError::Remote(error)),
            other => Err(CallError::UnexpectedResponse(format!("{other:?}"))),
        }
    }

    /// List the address of every running cell.
    #[instrument(skip(self))]
    pub async fn list_cell_ids(&self) -> Result<Vec<CellId>, CallError> {
        let response = self.send(&AdminRequest::ListCellIds).await?;
        match response {
            AdminResponse::CellIdsListed(cell_ids) => Ok(cell_ids),
            AdminResponse::Error(error) => Err(CallError::Remote(error)),
            other => Err(CallError::UnexpectedResponse(format!("{other:?}"))),
        }
    }

    /// Release the transport handle.
    pub async fn close(self) -> Result<(), CallError> {
        self.transport.close().await.map_err(CallError::from)
    }

    async fn send(&self, request: &AdminRequest) -> Result<AdminResponse, CallError> {
        let request = Payload::encode(request).map_err(CallError::RequestEncoding)?;
        tracing::trace!(request_len = request.bytes().len(), "sending admin request");
        let raw = self.transport.call(request.into_vec()).await?;
        let raw = Payload::from_vec(raw);
        raw.decode()
            .map_err(|source| CallError::SchemaMismatch { raw, source })
    }
}
