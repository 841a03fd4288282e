//! Fixed-width big-endian scalar codec.
//!
//! Implements the 32-byte payload convention:
//! ```text
//! ┌────────────────────────┬──────────────────┐
//! │ zero padding           │ magnitude        │
//! │ 32 - len(magnitude)    │ big-endian bytes │
//! └────────────────────────┴──────────────────┘
//! ```
//!
//! The most significant byte comes first; values narrower than 32 bytes
//! are left-padded with zeros, values wider than 32 bytes are rejected.

use num_bigint::BigUint;

use crate::error::{ContractError, Result};

/// Scalar payload width in bytes (fixed, exactly 32).
pub const SCALAR_WIDTH: usize = 32;

/// Codec for the contract's fixed-width unsigned integer convention.
///
/// Encoding is range-checked: any value that does not fit in 256 bits
/// fails with [`ContractError::ValueTooWide`]. Decoding is width-agnostic
/// because big-endian interpretation does not depend on padding; callers
/// that care about the convention check the payload length themselves.
pub struct ScalarCodec;

impl ScalarCodec {
    /// Encode a non-negative integer to 32 bytes big-endian.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::ValueTooWide`] if the value exceeds
    /// `2^256 - 1`. Truncation is never an option.
    ///
    /// # Example
    ///
    /// ```
    /// use contract_check::codec::ScalarCodec;
    /// use num_bigint::BigUint;
    ///
    /// let encoded = ScalarCodec::encode(&BigUint::from(1u32)).unwrap();
    /// assert_eq!(encoded[31], 0x01);
    /// assert!(encoded[..31].iter().all(|&b| b == 0));
    /// ```
    pub fn encode(n: &BigUint) -> Result<[u8; SCALAR_WIDTH]> {
        let magnitude = n.to_bytes_be();
        if magnitude.len() > SCALAR_WIDTH {
            return Err(ContractError::ValueTooWide { bits: n.bits() });
        }

        let mut buf = [0u8; SCALAR_WIDTH];
        buf[SCALAR_WIDTH - magnitude.len()..].copy_from_slice(&magnitude);
        Ok(buf)
    }

    /// Decode big-endian bytes to a non-negative integer.
    ///
    /// Accepts any byte length; leading zeros do not change the value.
    #[inline]
    pub fn decode(bytes: &[u8]) -> BigUint {
        BigUint::from_bytes_be(bytes)
    }
}
