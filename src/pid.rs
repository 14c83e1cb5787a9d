//! Product ID parsing: SPK-ID extraction and RC4 key derivation.

use md5::{Digest, Md5};
use num_bigint::BigUint;
use zeroize::Zeroize;

use crate::{
    cipher::KEY_LEN,
    error::{Error, Result},
};

/// Minimum byte length a PID must have for its SPK-ID slices to exist.
const MIN_PID_LEN: usize = 23;

/// Extracts the SPK ID from a Product ID.
///
/// Per the reference format, the SPK-ID digits live across two slices of
/// the PID, `pid[10..16)` and `pid[18..23)`; they are concatenated, split on
/// `'-'`, and the first field is parsed as a decimal integer.
pub fn spk_id(pid: &str) -> Result<BigUint> {
    let bytes = pid.as_bytes();
    if bytes.len() < MIN_PID_LEN {
        return Err(Error::InvalidPid(format!(
            "PID must be at least {MIN_PID_LEN} bytes, got {}",
            bytes.len()
        )));
    }

    let part1 = &pid[10..16];
    let part2 = &pid[18..23];
    let combined = format!("{part1}{part2}");
    let digits = combined.split('-').next().unwrap_or("");

    digits
        .parse::<BigUint>()
        .map_err(|_| Error::InvalidPid(format!("SPK-ID field {digits:?} is not a decimal integer")))
}

/// Derives the 16-byte RC4 key from a Product ID.
///
/// The PID is re-encoded as UTF-16LE (every ASCII byte becomes that byte
/// followed by a zero byte), hashed with MD5, and the first 5 digest bytes
/// are zero-extended on the right to 16 bytes.
pub fn rc4_key(pid: &str) -> Result<[u8; KEY_LEN]> {
    if pid.as_bytes().len() < MIN_PID_LEN {
        return Err(Error::InvalidPid(format!(
            "PID must be at least {MIN_PID_LEN} bytes, got {}",
            pid.as_bytes().len()
        )));
    }

    let mut utf16le = Vec::with_capacity(pid.len() * 2);
    for unit in pid.encode_utf16() {
        utf16le.extend_from_slice(&unit.to_le_bytes());
    }

    let digest = Md5::digest(&utf16le);
    utf16le.zeroize();

    let mut key = [0u8; KEY_LEN];
    key[..5].copy_from_slice(&digest[..5]);
    Ok(key)
}
