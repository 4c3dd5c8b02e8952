//! The app interface client.

use serde::de::DeserializeOwned;
use tracing::instrument;

use cellgate_types::{
    AppInfo, AppRequest, AppResponse, CellId, InstalledAppId, Payload, ZomeCall,
};

use crate::error::CallError;
use crate::transport::Transport;

/// A client for one app interface session.
///
/// Holds the transport handle for a sequence of calls; every operation is
/// one request, one suspension, one response. Drop or [`close`](Self::close)
/// the client to end the session.
#[derive(Debug)]
pub struct AppClient<T: Transport> {
    transport: T,
}

impl<T: Transport> AppClient<T> {
    /// Wrap an already-connected transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Invoke a zome function and return its raw response document.
    #[instrument(skip(self, call), fields(zome = %call.zome_name, function = %call.fn_name))]
    pub async fn call_zome(&self, call: ZomeCall) -> Result<Payload, CallError> {
        let response = self.send(&AppRequest::ZomeCall(Box::new(call))).await?;
        match response {
            AppResponse::ZomeCall(payload) => Ok(*payload),
            AppResponse::Error(error) => Err(CallError::Remote(error)),
            other => Err(CallError::UnexpectedResponse(format!("{other:?}"))),
        }
    }

    /// Invoke a zome function and decode its response into the declared
    /// output type. A response of the wrong shape surfaces as
    /// [`CallError::SchemaMismatch`] with the raw document attached.
    pub async fn call_zome_typed<O>(&self, call: ZomeCall) -> Result<O, CallError>
    where
        O: DeserializeOwned,
    {
        let payload = self.call_zome(call).await?;
        match payload.decode() {
            Ok(output) => Ok(output),
            Err(source) => Err(CallError::SchemaMismatch {
                raw: payload,
                source,
            }),
        }
    }

    /// Fetch info about an installed app. `Ok(None)` means the runtime has
    /// no app under that id.
    #[instrument(skip(self))]
    pub async fn app_info(
        &self,
        installed_app_id: impl Into<InstalledAppId> + std::fmt::Debug,
    ) -> Result<Option<AppInfo>, CallError> {
        let response = self
            .send(&AppRequest::AppInfo {
                installed_app_id: installed_app_id.into(),
            })
            .await?;
        match response {
            AppResponse::AppInfo(info) => Ok(info),
            AppResponse::Error(error) => Err(CallError::Remote(error)),
            other => Err(CallError::UnexpectedResponse(format!("{other:?}"))),
        }
    }

    /// Find the address of an app's first cell, in the runtime's stable
    /// reported order. Picking among multiple cells is the caller's
    /// business; this resolves the common one-cell case.
    pub async fn discover_cell_id(
        &self,
        installed_app_id: impl Into<InstalledAppId> + std::fmt::Debug,
    ) -> Result<CellId, CallError> {
        let app_id: InstalledAppId = installed_app_id.into();
        let info = self
            .app_info(app_id.clone())
            .await?
            .ok_or_else(|| CallError::AppNotFound(app_id.clone()))?;
        let cell = info
            .cell_data
            .first()
            .ok_or(CallError::NoCellsInstalled(app_id))?;
        Ok(cell.cell_id.clone())
    }

    /// Release the transport handle.
    pub async fn close(self) -> Result<(), CallError> {
        self.transport.close().await.map_err(CallError::from)
    }

    async fn send(&self, request: &AppRequest) -> Result<AppResponse, CallError> {
        let request = Payload::encode(request).map_err(CallError::RequestEncoding)?;
        tracing::trace!(request_len = request.bytes().len(), "sending app request");
        let raw = self.transport.call(request.into_vec()).await?;
        let raw = Payload::from_vec(raw);
        raw.decode()
            .map_err(|source| CallError::SchemaMismatch { raw, source })
    }
}

/// Make exactly one zome call over a transport obtained for that purpose,
/// releasing the handle on every exit path, successful or not. When both
/// the call and the close fail, the call's error wins.
pub async fn call_zome_once<T: Transport>(
    transport: T,
    call: ZomeCall,
) -> Result<Payload, CallError> {
    let client = AppClient::new(transport);
    let result = client.call_zome(call).await;
    match client.close().await {
        Ok(()) => result,
        Err(close_error) => result.and(Err(close_error)),
    }
}
