//! The `Scalar` message and its wire encoding.
//!
//! Wire layout for a conforming 32-byte payload:
//! ```text
//! ┌───────────┬──────────┬───────────────┐
//! │ Field key │ Length   │ Payload       │
//! │ 0x0A      │ 0x20     │ 32 bytes      │
//! │ 1 byte    │ varint   │ big-endian    │
//! └───────────┴──────────┴───────────────┘
//! ```
//! Field key `0x0A` is field number 1 with the length-delimited wire type.
//!
//! This struct mirrors what `prost-build` would generate for
//! `protos/types.proto`; it is written out by hand so the build needs no
//! protoc toolchain. Any schema change must land in both places.

use bytes::{Bytes, BytesMut};
use prost::Message;

use crate::error::Result;

/// The shared contract message: a single opaque binary field.
///
/// By writer convention `data` holds a non-negative integer, big-endian,
/// zero-padded to exactly 32 bytes. The message is constructed once and
/// never mutated: fresh from an integer in write mode, by deserialization
/// in read mode.
#[derive(Clone, PartialEq, Message)]
pub struct Scalar {
    /// The scalar payload bytes.
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
}

impl Scalar {
    /// Create a message wrapping the given payload bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Serialize to protobuf wire bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot hold the encoding; with a
    /// growable buffer this does not happen in practice, but the failure
    /// is propagated rather than swallowed.
    ///
    /// # Example
    ///
    /// ```
    /// use contract_check::wire::Scalar;
    ///
    /// let message = Scalar::new(vec![0xAB; 32]);
    /// let wire = message.to_wire_bytes().unwrap();
    /// assert_eq!(wire.len(), 2 + 32); // key + length + payload
    /// ```
    pub fn to_wire_bytes(&self) -> Result<Bytes> {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        self.encode(&mut buf)?;
        Ok(buf.freeze())
    }

    /// Deserialize from protobuf wire bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ContractError::Decode`] on malformed input.
    ///
    /// # Example
    ///
    /// ```
    /// use contract_check::wire::Scalar;
    ///
    /// let wire = [0x0A, 0x03, 0x01, 0x02, 0x03];
    /// let message = Scalar::from_wire_bytes(&wire).unwrap();
    /// assert_eq!(message.data, vec![0x01, 0x02, 0x03]);
    /// ```
    pub fn from_wire_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::decode(bytes)?)
    }

    /// Get the payload length in bytes.
    #[inline]
    pub fn payload_len(&self) -> usize {
        self.data.len()
    }
}
