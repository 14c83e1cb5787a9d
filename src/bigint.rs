//! Thin wrapper around `num-bigint` supplying the handful of operations the
//! rest of this crate needs but that `BigUint` does not expose directly:
//! fixed-width little-endian (de)serialisation and modular inversion.
//!
//! Everything else (add, sub, mul, rem, shifts, bit masks) is used straight
//! off `BigUint`/`BigInt`.

use num_bigint::{BigInt, BigUint, ToBigInt};
use num_integer::Integer;
use num_traits::One;

use crate::error::{Error, Result};

/// Serialise `n` as exactly `width` little-endian bytes.
///
/// Fails if `n` does not fit, mirroring a fixed-width integer type's
/// infallible-by-construction serialisation falling back to a checked one
/// when the width is externally mandated (as it is here: 7, 14, 21 and 48
/// bytes all come from the wire format, not from the value's natural size).
pub fn to_bytes_le_fixed(n: &BigUint, width: usize) -> Result<Vec<u8>> {
    let mut bytes = n.to_bytes_le();
    if bytes.len() > width {
        return Err(Error::InternalArithmeticFailure(format!(
            "value needs {} bytes but only {width} are available",
            bytes.len()
        )));
    }
    bytes.resize(width, 0);
    Ok(bytes)
}

/// Parse a little-endian byte slice into an unbounded non-negative integer.
pub fn from_bytes_le(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

/// Compute `a^-1 mod m` via the extended Euclidean algorithm.
///
/// Returns `InternalArithmeticFailure` if `a` and `m` are not coprime
/// (in particular if `a` is zero), the signal used throughout the curve
/// layer for a denominator that collapsed to zero.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let a = a.to_bigint().expect("BigUint always converts to BigInt");
    let m = m.to_bigint().expect("BigUint always converts to BigInt");

    let egcd = a.extended_gcd(&m);
    if egcd.gcd != BigInt::one() {
        return Err(Error::InternalArithmeticFailure(
            "modular inverse does not exist (gcd != 1)".to_string(),
        ));
    }

    let inv = egcd.x.mod_floor(&m);
    inv.to_biguint()
        .ok_or_else(|| Error::InternalArithmeticFailure("inverse reduction failed".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_fixed_width() {
        let n = BigUint::from(0x1234u32);
        let bytes = to_bytes_le_fixed(&n, 7).unwrap();
        assert_eq!(bytes.len(), 7);
        assert_eq!(from_bytes_le(&bytes), n);
    }

    #[test]
    fn rejects_oversized_values() {
        let n = BigUint::from(u64::MAX);
        assert!(to_bytes_le_fixed(&n, 2).is_err());
    }

    #[test]
    fn inverts_mod_prime() {
        let a = BigUint::from(7u32);
        let m = BigUint::from(31u32);
        let inv = mod_inverse(&a, &m).unwrap();
        assert_eq!((&a * &inv) % &m, BigUint::one());
    }

    #[test]
    fn rejects_non_coprime() {
        let a = BigUint::from(6u32);
        let m = BigUint::from(9u32);
        assert!(mod_inverse(&a, &m).is_err());
    }
}
