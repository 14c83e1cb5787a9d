//! Error taxonomy for the license key engine.

use thiserror::Error;

/// Everything that can go wrong while generating or validating a key.
#[derive(Debug, Error)]
pub enum Error {
    /// The Product ID is shorter than 23 bytes, or its SPK-ID field does not
    /// parse as a decimal integer.
    #[error("invalid PID: {0}")]
    InvalidPid(String),

    /// A decoded key string (after dashes are stripped) has a length that is
    /// not a multiple of 5.
    #[error("key has bad length")]
    BadKeyLength,

    /// A key string contains a character outside the base-24 alphabet.
    #[error("key contains an invalid character: {0:?}")]
    BadKeyCharacter(char),

    /// A license triple is malformed, or `count` is out of `[1, 9999]`.
    #[error("invalid license: {0}")]
    InvalidLicense(String),

    /// A caller-supplied SPK failed to validate against the given PID.
    #[error("provided SPK does not match the PID")]
    SpkMismatch,

    /// The signature generator made 1000 attempts without producing a
    /// signature that fits the wire format. Under correct curve parameters
    /// this is astronomically unlikely; its presence indicates a bug.
    #[error("failed to generate a valid key after the attempt budget was exhausted")]
    KeyGenExhausted,

    /// A lower-level arithmetic invariant was violated (e.g. an inverse of
    /// zero was requested). Verification callers catch this and report
    /// `Invalid` instead of propagating it.
    #[error("internal arithmetic failure: {0}")]
    InternalArithmeticFailure(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
