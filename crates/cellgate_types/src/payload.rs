//! The opaque payload document passed to and returned by remote functions.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A value serialized into the self-describing binary map format the
/// runtime speaks (MessagePack with named fields). Callers encode their
/// input type on the way in and declare an output type on the way out;
/// the shape check happens at [`Payload::decode`].
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Payload(#[serde(with = "serde_bytes")] Vec<u8>);

impl Payload {
    /// Serialize a value into a payload document.
    pub fn encode<T: Serialize>(value: &T) -> Result<Self, PayloadError> {
        Ok(Self(rmp_serde::to_vec_named(value)?))
    }

    /// Deserialize the document into the caller's declared type. Fails if
    /// fields are missing or of the wrong shape.
    pub fn decode<O: DeserializeOwned>(&self) -> Result<O, PayloadError> {
        Ok(rmp_serde::from_slice(&self.0)?)
    }

    /// Wrap bytes that are already an encoded document.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the encoded bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl std::fmt::Debug for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Payload({} bytes)", self.0.len())
    }
}

/// Payload (de)serialization failures.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The value could not be serialized.
    #[error("payload serialization failed: {0}")]
    Serialize(#[from] rmp_serde::encode::Error),
    /// The document did not deserialize into the declared type.
    #[error("payload deserialization failed: {0}")]
    Deserialize(#[from] rmp_serde::decode::Error),
}
