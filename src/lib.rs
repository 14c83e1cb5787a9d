//! Generator and verifier for Remote Desktop Services license keys.
//!
//! Two key kinds share one engine: a Service Provider Key (SPK, also called
//! License Server ID) and a License Key Pack (LKP). Both are textual keys
//! encoding a 7-byte payload and a Schnorr-style elliptic-curve signature,
//! obfuscated with RC4 under a key derived from an external Product ID.
//!
//! See [`facade::process`] for the single public entry point.

pub mod bigint;
pub mod cipher;
pub mod codec;
pub mod curve;
pub mod error;
pub mod facade;
pub mod license;
pub mod payload;
pub mod pid;
pub mod signature;

pub use error::{Error, Result};
pub use facade::{process, ProcessOutcome, Request};
