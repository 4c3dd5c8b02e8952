//! The app interface: requests a client makes on behalf of an installed
//! app, and the responses the runtime sends back.

use crate::call::ZomeCall;
use crate::cell::CellId;
use crate::payload::Payload;
use crate::wire_error::WireError;

/// The unique identifier of an installed app within one runtime.
pub type InstalledAppId = String;

/// The requests available over an app interface. Each resolves to the
/// correspondingly named [`AppResponse`] variant, or to
/// [`AppResponse::Error`].
// Wire form: a map with the variant on key `type` and its contents on key
// `data`, e.g. `{ type: "app_info", data: { installed_app_id: "numbers" } }`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "data")]
pub enum AppRequest {
    /// Get info about an installed app, including its cells.
    ///
    /// Takes the app id because one interface can serve several apps.
    AppInfo {
        /// The app to look up.
        installed_app_id: InstalledAppId,
    },
    /// Call a zome function. See [`ZomeCall`] for the data to provide.
    ZomeCall(Box<ZomeCall>),
}

/// The responses to an [`AppRequest`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "data")]
pub enum AppResponse {
    /// The request failed on the remote side.
    Error(WireError),
    /// The answer to [`AppRequest::AppInfo`]. `None` when no app with the
    /// requested id is installed.
    AppInfo(Option<AppInfo>),
    /// The answer to [`AppRequest::ZomeCall`]: the function's return value
    /// as an encoded document the caller decodes against its declared
    /// output type.
    ZomeCall(Box<Payload>),
}

/// Info about an installed app.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AppInfo {
    /// The app's unique identifier.
    pub installed_app_id: InstalledAppId,
    /// The app's cells, in the runtime's stable reported order.
    pub cell_data: Vec<InstalledCell>,
    /// The app's current status.
    pub status: AppStatus,
}

/// One cell of an installed app.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InstalledCell {
    /// The cell's address.
    pub cell_id: CellId,
    /// The role this cell fills within the app.
    pub role_name: String,
}

/// An installed app's lifecycle state, in an API-friendly shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppStatus {
    /// The app is running and its cells accept calls.
    Running,
    /// The app is paused by the runtime and may resume.
    Paused,
    /// The app is disabled and will not run until re-enabled.
    Disabled,
}
