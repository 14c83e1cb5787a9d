//! Schnorr-style signature engine: packs `(h, s)` into 14 bytes and signs
//! over a 7-byte inner payload, identically for both curves.

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use sha1::{Digest, Sha1};
use tracing::debug;

use crate::{
    bigint::{from_bytes_le, to_bytes_le_fixed},
    cipher,
    curve::{CurveParams, Point},
    error::{Error, Result},
};

/// Width in bytes of a serialised curve coordinate, per the wire format.
const COORD_LEN: usize = 48;

/// Width in bytes of the packed `(h, s)` signature.
const SIGDATA_LEN: usize = 14;

/// 35-bit mask for `h`.
fn mask35() -> BigUint {
    (BigUint::one() << 35) - BigUint::one()
}

/// 69-bit mask for `s`.
fn mask69() -> BigUint {
    (BigUint::one() << 69) - BigUint::one()
}

/// Hard cap on signing attempts before giving up with `KeyGenExhausted`.
const MAX_ATTEMPTS: usize = 1000;

/// Computes the Schnorr-style challenge `h` from the inner payload and a
/// curve point, per the wire format: `SHA-1(M || Rx_48le || Ry_48le)`, then
/// `h = ((hi4 >> 29) << 32) | lo`, where `lo`/`hi4` are the first two
/// little-endian u32s of the digest.
fn challenge(payload: &[u8], r: &Point) -> Result<BigUint> {
    let (rx, ry) = r
        .xy()
        .ok_or_else(|| Error::InternalArithmeticFailure("challenge point is infinity".to_string()))?;
    let rx_bytes = to_bytes_le_fixed(rx, COORD_LEN)?;
    let ry_bytes = to_bytes_le_fixed(ry, COORD_LEN)?;

    let mut hasher = Sha1::new();
    hasher.update(payload);
    hasher.update(&rx_bytes);
    hasher.update(&ry_bytes);
    let md = hasher.finalize();

    let lo = u32::from_le_bytes(md[0..4].try_into().expect("4 bytes"));
    let hi4 = u32::from_le_bytes(md[4..8].try_into().expect("4 bytes"));
    let h = (BigUint::from(hi4 >> 29) << 32) | BigUint::from(lo);
    Ok(h)
}

/// Packs `(h, s)` into a little-endian 14-byte buffer: `(s << 35) | h`.
fn pack_sigdata(h: &BigUint, s: &BigUint) -> Result<Vec<u8>> {
    let sigdata = (s << 35u32) | (h & mask35());
    to_bytes_le_fixed(&sigdata, SIGDATA_LEN)
}

/// Unpacks a 14-byte little-endian buffer into `(h, s)`.
fn unpack_sigdata(bytes: &[u8]) -> (BigUint, BigUint) {
    let sigdata = from_bytes_le(bytes);
    let h = &sigdata & mask35();
    let s = (&sigdata >> 35u32) & mask69();
    (h, s)
}

/// Signs a 7-byte inner payload under the given curve and PID-derived RC4
/// key, returning the 29-character textual key.
///
/// Retries (drawing a fresh nonce each time) on `R == infinity` and on `s`
/// failing to fit the 69-bit mask, up to [`MAX_ATTEMPTS`] attempts; a final
/// self-verification also triggers a retry on failure, matching the
/// reference tool's generate-then-validate loop.
pub fn sign(payload: &[u8], curve: &CurveParams, rc4_key: &[u8; 16], spk_id_for_self_check: Option<&BigUint>) -> Result<String> {
    let mut rng = rand::thread_rng();

    for attempt in 0..MAX_ATTEMPTS {
        let c = rng.gen_biguint_range(&BigUint::one(), &curve.n);
        let r = curve.scalar_mul(&curve.g, &c)?;
        if r.is_infinity() {
            continue;
        }

        let h = challenge(payload, &r)?;
        let s = sub_mod_n(&c, &((&curve.priv_key * &h) % &curve.n), &curve.n);

        let s_masked = &s & mask69();
        if s_masked != s || s >= mask69() {
            continue;
        }

        let sigdata = pack_sigdata(&h, &s)?;
        let mut body = Vec::with_capacity(payload.len() + sigdata.len());
        body.extend_from_slice(payload);
        body.extend_from_slice(&sigdata);

        let encrypted = cipher::apply(rc4_key, &body);
        let key_int = from_bytes_le(&encrypted[..20]);
        let text = crate::codec::encode(&key_int);

        if self_check(payload, &h, &s, curve, spk_id_for_self_check) {
            debug!(attempt, "signature accepted");
            return Ok(text);
        }
    }

    Err(Error::KeyGenExhausted)
}

/// Re-derives `h` from a freshly produced `(h, s)` pair and checks it
/// matches, exactly mirroring what `verify` will do once the key is decoded
/// back from its textual form. Used as the generator's internal
/// self-validation step (§4.6, step 10).
fn self_check(payload: &[u8], h: &BigUint, s: &BigUint, curve: &CurveParams, spk_id: Option<&BigUint>) -> bool {
    let Ok(r) = recover_r(h, s, curve) else {
        return false;
    };
    if r.is_infinity() {
        return false;
    }
    let Ok(h_prime) = challenge(payload, &r) else {
        return false;
    };
    if &h_prime != h {
        return false;
    }
    if let Some(expected) = spk_id {
        let mask41 = (BigUint::one() << 41u32) - BigUint::one();
        let actual = from_bytes_le(payload) & &mask41;
        return &actual == expected;
    }
    true
}

/// Computes `R' = h*K + s*G`.
fn recover_r(h: &BigUint, s: &BigUint, curve: &CurveParams) -> Result<Point> {
    let hk = curve.scalar_mul(&curve.k, h)?;
    let sg = curve.scalar_mul(&curve.g, s)?;
    curve.add(&hk, &sg)
}

/// Verifies a textual key against a PID on the given curve.
///
/// Never propagates an error: any internal failure (malformed key, point at
/// infinity, arithmetic failure) is reported simply as `false`.
pub fn verify(payload_check: Option<&BigUint>, key: &str, curve: &CurveParams, rc4_key: &[u8; 16]) -> bool {
    verify_inner(payload_check, key, curve, rc4_key).unwrap_or(false)
}

fn verify_inner(payload_check: Option<&BigUint>, key: &str, curve: &CurveParams, rc4_key: &[u8; 16]) -> Result<bool> {
    let decoded = crate::codec::decode(key)?;
    let encrypted = to_bytes_le_fixed(&decoded, 21)?;
    let decrypted = cipher::apply(rc4_key, &encrypted);

    if decrypted.len() < 21 {
        return Ok(false);
    }

    let payload = &decrypted[..7];
    let (h, s) = unpack_sigdata(&decrypted[7..21]);

    let r = recover_r(&h, &s, curve)?;
    if r.is_infinity() {
        return Ok(false);
    }

    let h_prime = challenge(payload, &r)?;
    if h_prime != h {
        return Ok(false);
    }

    if let Some(expected) = payload_check {
        let mask41 = (BigUint::one() << 41u32) - BigUint::one();
        let actual = from_bytes_le(payload) & &mask41;
        if &actual != expected {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Subtraction mod `n`, wrapping around when `lhs < rhs`.
fn sub_mod_n(lhs: &BigUint, rhs: &BigUint, n: &BigUint) -> BigUint {
    let lhs = lhs % n;
    let rhs = rhs % n;
    if lhs >= rhs {
        (&lhs - &rhs) % n
    } else {
        n - ((&rhs - &lhs) % n)
    }
}
