//! Typed, content-addressed identifiers as issued by a conductor runtime.
//!
//! An identifier is 39 raw bytes: a 3 byte kind marker, a 32 byte core, and
//! a 4 byte checksum over the core. The canonical textual form is the
//! literal character `u` followed by the base64url-without-padding encoding
//! of the raw bytes. The `u` is part of the text form only, never of the
//! bytes, and is stripped before decoding.
//!
//! ```
//! use cellgate_hash::DnaHash;
//!
//! let text = "uhC0kaiJKjACG1NunHwWUTXr3RER72PkxT62W4GNa3qOuwJWe1gUQ";
//! let hash: DnaHash = text.parse().unwrap();
//! assert_eq!(hash.to_string(), text);
//! ```

#![deny(missing_docs)]

mod aliases;
mod encode;
mod error;
mod hash;
pub mod kind;
mod ser;

pub use aliases::*;
pub use encode::{encode_raw_bytes, decode_raw_bytes};
pub use error::{HashError, HashResult};
pub use hash::*;
pub use kind::HashKind;
