//! Round-trip checker over the interchange file.
//!
//! One side of a cross-language pair writes the serialized [`Scalar`] to a
//! file; the other side reads it back and verifies the decoded integer
//! against the expected constant. Write and read are separate process
//! runs, so the whole operation is a single synchronous pass with no
//! locking.
//!
//! # Example
//!
//! ```no_run
//! use std::str::FromStr;
//!
//! use contract_check::{RoundTrip, DEFAULT_SCALAR_DECIMAL};
//! use num_bigint::BigUint;
//!
//! let expected = BigUint::from_str(DEFAULT_SCALAR_DECIMAL).unwrap();
//! let check = RoundTrip::new("serialized.bin", expected);
//!
//! check.write().unwrap();
//! check.verify().unwrap();
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use num_bigint::BigUint;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::codec::{ScalarCodec, SCALAR_WIDTH};
use crate::error::{ContractError, Result};
use crate::wire::Scalar;

/// The fixture constant shared by every language implementation of the
/// contract check (65 decimal digits, well inside 256 bits).
pub const DEFAULT_SCALAR_DECIMAL: &str =
    "123400000000000000000000000000050000000000000000000000000006789";

/// Which side of the round trip this invocation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Produce the interchange file from the expected value.
    Write,
    /// Consume the interchange file and verify it against the expected value.
    Read,
}

/// A single round-trip check: one file path, one expected value.
///
/// Both inputs are explicit so the same checker serves any path/value
/// pair; nothing lives in process-wide state.
#[derive(Debug, Clone)]
pub struct RoundTrip {
    path: PathBuf,
    expected: BigUint,
}

impl RoundTrip {
    /// Create a checker for the given interchange path and expected value.
    pub fn new(path: impl Into<PathBuf>, expected: BigUint) -> Self {
        Self {
            path: path.into(),
            expected,
        }
    }

    /// The interchange file path.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The expected scalar value.
    #[inline]
    pub fn expected(&self) -> &BigUint {
        &self.expected
    }

    /// Run one side of the round trip.
    pub fn run(&self, mode: Mode) -> Result<()> {
        match mode {
            Mode::Write => self.write(),
            Mode::Read => self.verify(),
        }
    }

    /// Encode the expected value and persist the serialized message,
    /// creating or truncating the file.
    ///
    /// The range check happens before the file is touched, so an
    /// out-of-range value never leaves a partial artifact behind.
    pub fn write(&self) -> Result<()> {
        let payload = ScalarCodec::encode(&self.expected)?;
        let message = Scalar::new(payload.to_vec());
        let wire = message.to_wire_bytes()?;

        fs::write(&self.path, &wire)?;
        info!(
            path = %self.path.display(),
            bytes = wire.len(),
            "wrote serialized scalar"
        );
        Ok(())
    }

    /// Read the interchange file and decode the scalar it carries.
    ///
    /// # Errors
    ///
    /// Fails with [`ContractError::Io`] if the file is missing or
    /// unreadable, and [`ContractError::Decode`] if its bytes are not a
    /// valid `Scalar` message.
    pub fn read(&self) -> Result<BigUint> {
        let contents = fs::read(&self.path)?;
        let message = Scalar::from_wire_bytes(&contents)?;

        if message.payload_len() != SCALAR_WIDTH {
            // Still decodable; the width is a writer convention.
            warn!(
                path = %self.path.display(),
                len = message.payload_len(),
                expected = SCALAR_WIDTH,
                "scalar payload is not the conventional width"
            );
        }
        debug!(
            path = %self.path.display(),
            payload_len = message.payload_len(),
            "decoded scalar message"
        );

        Ok(ScalarCodec::decode(&message.data))
    }

    /// Read the interchange file and compare against the expected value.
    ///
    /// Succeeds silently on a match; a mismatch fails with
    /// [`ContractError::Mismatch`] naming both values.
    pub fn verify(&self) -> Result<()> {
        let actual = self.read()?;
        if actual != self.expected {
            return Err(ContractError::Mismatch {
                expected: self.expected.clone(),
                actual,
            });
        }
        Ok(())
    }
}

/// Machine-readable outcome of a verify run, for `--json` output.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether the decoded value matched the expected one.
    pub ok: bool,
    /// The interchange file that was checked.
    pub path: String,
    /// Expected value, decimal.
    pub expected: String,
    /// Actually decoded value, decimal.
    pub actual: String,
}

impl CheckReport {
    /// Report for a successful verify.
    pub fn pass(path: &Path, expected: &BigUint) -> Self {
        Self {
            ok: true,
            path: path.display().to_string(),
            expected: expected.to_string(),
            actual: expected.to_string(),
        }
    }

    /// Report for a detected mismatch.
    pub fn mismatch(path: &Path, expected: &BigUint, actual: &BigUint) -> Self {
        Self {
            ok: false,
            path: path.display().to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
