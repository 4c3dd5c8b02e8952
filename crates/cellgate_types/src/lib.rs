//! Wire data model for talking to a conductor runtime.
//!
//! Everything here is a plain immutable value: the opaque [`Payload`]
//! document wrapper, the [`CellId`] address pair, the [`ZomeCall`]
//! envelope, and the tagged request/response enums for the app and admin
//! interfaces. No I/O happens in this crate.

mod admin;
mod app;
mod call;
mod capability;
mod cell;
mod payload;
mod wire_error;
mod zome;

pub use admin::{AdminRequest, AdminResponse};
pub use app::{AppInfo, AppRequest, AppResponse, AppStatus, InstalledAppId, InstalledCell};
pub use call::{BuildError, ZomeCall};
pub use capability::{CapSecret, CAP_SECRET_LEN};
pub use cell::CellId;
pub use payload::{Payload, PayloadError};
pub use wire_error::WireError;
pub use zome::{FunctionName, ZomeName};
