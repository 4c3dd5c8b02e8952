//! serde support: identifiers travel as their raw 39 bytes.
//!
//! The textual form is for humans and display surfaces only; every wire
//! format carries the raw bytes. Deserialization validates through
//! [`TypedHash::from_raw_bytes`], so a corrupt wire value surfaces as a
//! serde error instead of a panic.

use crate::hash::TypedHash;
use crate::kind::HashKind;

impl<K: HashKind> serde::Serialize for TypedHash<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bytes(self.as_raw_bytes())
    }
}

impl<'de, K: HashKind> serde::Deserialize<'de> for TypedHash<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = serde_bytes::ByteBuf::deserialize(deserializer)?;
        TypedHash::from_raw_bytes(bytes.into_vec()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn wire_form_is_raw_bytes_not_text() {
        let hash = DnaHash::from_core_bytes([0xdb; 32]);
        let wire = rmp_serde::to_vec_named(&hash).unwrap();
        // msgpack bin 8 header + length, then the raw bytes
        assert_eq!(&wire[2..], hash.as_raw_bytes());

        let back: DnaHash = rmp_serde::from_slice(&wire).unwrap();
        assert_eq!(back, hash);
    }

    #[test]
    fn wire_kind_mismatch_is_a_deserialize_error() {
        let agent = AgentPubKey::from_core_bytes([0xdb; 32]);
        let wire = rmp_serde::to_vec_named(&agent).unwrap();
        assert!(rmp_serde::from_slice::<DnaHash>(&wire).is_err());
    }
}
