//! # contract-check
//!
//! Round-trip checker for the shared `Scalar` data contract.
//!
//! Independent implementations of the contract (Go, Python, Rust, ...)
//! prove they agree on the wire by exchanging one file: a serialized
//! protobuf message whose single binary field holds a 256-bit integer,
//! big-endian, zero-padded to 32 bytes. One process writes the file, a
//! second decodes it and compares the value against the shared constant.
//! The exit status is the verdict.
//!
//! ## Architecture
//!
//! - **codec**: fixed-width big-endian integer codec (the 32-byte convention)
//! - **wire**: the `Scalar` protobuf message, in sync with `protos/types.proto`
//! - **checker**: the write/read round trip over the interchange file
//!
//! ## Example
//!
//! ```no_run
//! use std::str::FromStr;
//!
//! use contract_check::{Mode, RoundTrip, DEFAULT_SCALAR_DECIMAL};
//! use num_bigint::BigUint;
//!
//! fn main() -> contract_check::Result<()> {
//!     let expected = BigUint::from_str(DEFAULT_SCALAR_DECIMAL)?;
//!     let check = RoundTrip::new("serialized.bin", expected);
//!
//!     check.run(Mode::Write)?;
//!     check.run(Mode::Read)
//! }
//! ```

pub mod checker;
pub mod codec;
pub mod error;
pub mod wire;

pub use checker::{CheckReport, Mode, RoundTrip, DEFAULT_SCALAR_DECIMAL};
pub use error::{ContractError, Result};
