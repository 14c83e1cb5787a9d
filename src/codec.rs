//! Base-24 textual key codec.
//!
//! Encodes a non-negative integer as characters drawn from a fixed
//! alphabet (25 of them for the canonical small-value case), grouped into
//! dash-separated blocks of five, and decodes the inverse.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::error::{Error, Result};

/// The 24-character alphabet used by product keys, in digit order
/// (index 0 == `'B'`).
pub const ALPHABET: &str = "BCDFGHJKMPQRTVWXY2346789";

/// Number of data characters in a key, before dashes are inserted.
const DATA_LEN: usize = 25;

/// Size of each dash-separated group.
const GROUP_LEN: usize = 5;

/// Encodes `n` as a dashed base-24 key string.
///
/// `n = 0` yields 25 copies of the alphabet's first character (the canonical
/// `"BBBBB-BBBBB-BBBBB-BBBBB-BBBBB"`). Otherwise the base-24 digits of `n`
/// are produced least-significant first, then left-padded with the first
/// alphabet character up to the next multiple of 5 characters at or above
/// 25. A value needing more than 25 digits to round-trip still comes out
/// grouped cleanly; it is just longer than the canonical 29 characters.
pub fn encode(n: &BigUint) -> String {
    let alphabet: Vec<char> = ALPHABET.chars().collect();
    let base = BigUint::from(24u32);

    let mut digits = Vec::new();
    let mut rest = n.clone();
    if rest.is_zero() {
        digits.push(0usize);
    }
    while !rest.is_zero() {
        let (q, r) = (&rest / &base, &rest % &base);
        digits.push(r.to_usize().expect("remainder mod 24 fits in usize"));
        rest = q;
    }
    let floor = digits.len().max(DATA_LEN);
    let target_len = floor + (GROUP_LEN - floor % GROUP_LEN) % GROUP_LEN;
    while digits.len() < target_len {
        digits.push(0);
    }
    digits.reverse();

    let data: String = digits.iter().map(|&d| alphabet[d]).collect();
    group_with_dashes(&data)
}

/// Inserts a dash after every fifth character.
fn group_with_dashes(data: &str) -> String {
    data.as_bytes()
        .chunks(GROUP_LEN)
        .map(|chunk| std::str::from_utf8(chunk).expect("ASCII alphabet"))
        .collect::<Vec<_>>()
        .join("-")
}

/// Decodes a dashed (or dash-free) key string back to its integer value.
///
/// Fails with [`Error::BadKeyLength`] if the dash-stripped length is not a
/// multiple of 5, or [`Error::BadKeyCharacter`] if any character is outside
/// [`ALPHABET`].
pub fn decode(key: &str) -> Result<BigUint> {
    let stripped: String = key.chars().filter(|&c| c != '-').collect();
    if stripped.len() % GROUP_LEN != 0 {
        return Err(Error::BadKeyLength);
    }

    let base = BigUint::from(24u32);
    let mut value = BigUint::zero();
    for c in stripped.chars() {
        let digit = ALPHABET
            .find(c)
            .ok_or(Error::BadKeyCharacter(c))?;
        value = value * &base + BigUint::from(digit as u32);
    }
    Ok(value)
}
