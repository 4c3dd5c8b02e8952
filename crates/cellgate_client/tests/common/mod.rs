//! A stub transport: decodes real request envelopes, answers from a
//! canned handler, and records whether the handle was released.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use cellgate_client::{
    AdminRequest, AdminResponse, AgentPubKey, AppRequest, AppResponse, CellId, DnaHash, Payload,
    Transport, TransportError,
};

pub struct StubTransport<F> {
    handler: F,
    closed: Arc<AtomicBool>,
}

impl<F> StubTransport<F>
where
    F: Fn(Vec<u8>) -> Result<Vec<u8>, TransportError> + Send + Sync,
{
    pub fn new(handler: F) -> (Self, Arc<AtomicBool>) {
        let closed = Arc::new(AtomicBool::new(false));
        (
            Self {
                handler,
                closed: closed.clone(),
            },
            closed,
        )
    }
}

#[async_trait]
impl<F> Transport for StubTransport<F>
where
    F: Fn(Vec<u8>) -> Result<Vec<u8>, TransportError> + Send + Sync,
{
    async fn call(&self, request: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        (self.handler)(request)
    }

    async fn close(&self) -> Result<(), TransportError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Lift a typed app-interface handler into the byte-level transport.
pub fn app_handler<F>(handler: F) -> impl Fn(Vec<u8>) -> Result<Vec<u8>, TransportError>
where
    F: Fn(AppRequest) -> Result<AppResponse, TransportError>,
{
    move |request| {
        let request: AppRequest = Payload::from_vec(request)
            .decode()
            .map_err(|error| TransportError::Other(error.to_string()))?;
        let response = handler(request)?;
        Ok(Payload::encode(&response).unwrap().into_vec())
    }
}

/// Lift a typed admin-interface handler into the byte-level transport.
pub fn admin_handler<F>(handler: F) -> impl Fn(Vec<u8>) -> Result<Vec<u8>, TransportError>
where
    F: Fn(AdminRequest) -> Result<AdminResponse, TransportError>,
{
    move |request| {
        let request: AdminRequest = Payload::from_vec(request)
            .decode()
            .map_err(|error| TransportError::Other(error.to_string()))?;
        let response = handler(request)?;
        Ok(Payload::encode(&response).unwrap().into_vec())
    }
}

pub fn test_dna_hash() -> DnaHash {
    DnaHash::from_core_bytes([1; 32])
}

pub fn test_agent_key() -> AgentPubKey {
    AgentPubKey::from_core_bytes([2; 32])
}

pub fn test_cell_id() -> CellId {
    CellId::new(test_dna_hash(), test_agent_key())
}
