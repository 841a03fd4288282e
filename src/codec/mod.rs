//! Codec module - fixed-width scalar encoding/decoding.
//!
//! This module provides the byte-level codec for the contract's scalar
//! convention:
//!
//! - [`ScalarCodec`] - 32-byte big-endian unsigned integer codec
//!
//! # Design
//!
//! The codec is implemented as a marker struct with static methods rather
//! than a trait object. The width is a runtime-checked convention: the
//! schema's `bytes` field carries no length constraint, so the encoder
//! enforces the 32-byte shape and rejects anything wider instead of
//! truncating.
//!
//! # Example
//!
//! ```
//! use contract_check::codec::{ScalarCodec, SCALAR_WIDTH};
//! use num_bigint::BigUint;
//!
//! let n = BigUint::from(7u32);
//! let encoded = ScalarCodec::encode(&n).unwrap();
//! assert_eq!(encoded.len(), SCALAR_WIDTH);
//! assert_eq!(ScalarCodec::decode(&encoded), n);
//! ```

mod scalar;

pub use scalar::{ScalarCodec, SCALAR_WIDTH};
