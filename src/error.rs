//! Error types for contract-check.

use num_bigint::BigUint;
use thiserror::Error;

use crate::codec::SCALAR_WIDTH;

/// Main error type for all contract-check operations.
///
/// Every failure terminates the run; nothing is retried. The CLI maps each
/// variant to a process exit code via [`ContractError::exit_code`].
#[derive(Debug, Error)]
pub enum ContractError {
    /// I/O error reading or writing the interchange file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed wire bytes that do not parse as a `Scalar` message.
    #[error("decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Wire encoding failure while serializing the `Scalar` message.
    #[error("encode error: {0}")]
    Encode(#[from] prost::EncodeError),

    /// JSON serialization error (report output only).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected value is not a non-negative decimal integer.
    #[error("invalid scalar value: {0}")]
    InvalidValue(#[from] num_bigint::ParseBigIntError),

    /// Integer too wide for the fixed scalar field.
    #[error("value needs {bits} bits, scalar field holds at most {max}", max = SCALAR_WIDTH * 8)]
    ValueTooWide {
        /// Bit length of the rejected value.
        bits: u64,
    },

    /// Decoded scalar differs from the expected constant.
    #[error("scalar mismatch: want {expected}, got {actual}")]
    Mismatch {
        /// The value the file was supposed to contain.
        expected: BigUint,
        /// The value it actually contained.
        actual: BigUint,
    },
}

impl ContractError {
    /// Process exit code for this failure.
    ///
    /// A value mismatch is the verdict the checker exists to report and
    /// gets its own code; every other failure means the check could not
    /// be carried out at all.
    pub fn exit_code(&self) -> i32 {
        match self {
            ContractError::Mismatch { .. } => 1,
            _ => 2,
        }
    }
}

/// Result type alias using ContractError.
pub type Result<T> = std::result::Result<T, ContractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_names_both_values() {
        let err = ContractError::Mismatch {
            expected: BigUint::from(1234u32),
            actual: BigUint::from(5678u32),
        };
        let msg = err.to_string();
        assert!(msg.contains("1234"));
        assert!(msg.contains("5678"));
    }

    #[test]
    fn test_exit_code_mapping() {
        let mismatch = ContractError::Mismatch {
            expected: BigUint::from(1u32),
            actual: BigUint::from(2u32),
        };
        assert_eq!(mismatch.exit_code(), 1);

        let io = ContractError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(io.exit_code(), 2);

        let range = ContractError::ValueTooWide { bits: 257 };
        assert_eq!(range.exit_code(), 2);
    }

    #[test]
    fn test_value_too_wide_message_names_limit() {
        let err = ContractError::ValueTooWide { bits: 260 };
        let msg = err.to_string();
        assert!(msg.contains("260"));
        assert!(msg.contains("256"));
    }
}
