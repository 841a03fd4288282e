//! Wire module - the shared `Scalar` contract message.
//!
//! This module implements the protobuf wire form of the data contract:
//! - The `Scalar` message type (one `bytes data = 1` field)
//! - Serialize/deserialize helpers to and from raw wire bytes
//!
//! The binding is hand-maintained and must stay in sync with
//! `protos/types.proto`, the language-independent contract of record.

mod message;

pub use message::Scalar;
