//! Inner payload encoders: the 7-byte messages that get signed.

use num_bigint::BigUint;

use crate::{bigint::to_bytes_le_fixed, error::Result};

/// Width in bytes of an inner payload.
pub const PAYLOAD_LEN: usize = 7;

/// Computes the version code from a major/minor pair.
///
/// `(5, 0)` is special-cased to `1`; every other pair encodes to
/// `(major << 3) | minor`.
pub fn version_code(major: u32, minor: u32) -> u32 {
    if major == 5 && minor == 0 {
        1
    } else {
        (major << 3) | minor
    }
}

/// Builds the 7-byte SPK inner payload: the SPK ID held in the low 41 bits.
pub fn spk_payload(spk_id: &BigUint) -> Result<Vec<u8>> {
    to_bytes_le_fixed(spk_id, PAYLOAD_LEN)
}

/// Builds the 7-byte LKP inner payload from its constituent fields.
///
/// Bit layout (MSB to LSB of the 56-bit little-endian integer):
/// `chid(10) | count(14) | 2(14, of which only bits 19..18 are nonzero)
/// | 144(8) | version(7) | 0(3)`, i.e.
/// `(chid << 46) | (count << 32) | (2 << 18) | (144 << 10) | (version << 3)`.
pub fn lkp_payload(chid: u32, count: u32, major: u32, minor: u32) -> Result<Vec<u8>> {
    let version = version_code(major, minor);
    let info: u64 = ((chid as u64) << 46)
        | ((count as u64) << 32)
        | (2u64 << 18)
        | (144u64 << 10)
        | ((version as u64) << 3);
    to_bytes_le_fixed(&BigUint::from(info), PAYLOAD_LEN)
}

#[cfg(test)]
mod tests {
    use num_traits::ToPrimitive;

    use super::*;
    use crate::bigint::from_bytes_le;

    #[test]
    fn version_special_cases_five_zero() {
        assert_eq!(version_code(5, 0), 1);
        assert_eq!(version_code(10, 2), (10 << 3) | 2);
        assert_eq!(version_code(5, 1), (5 << 3) | 1);
    }

    #[test]
    fn lkp_payload_round_trips_fields() {
        let bytes = lkp_payload(29, 1234, 10, 2).unwrap();
        assert_eq!(bytes.len(), PAYLOAD_LEN);

        let info = from_bytes_le(&bytes).to_u64().unwrap();

        let chid = (info >> 46) & 0x3FF;
        let count = (info >> 32) & 0x3FFF;
        let version = (info >> 3) & 0x7F;
        let const144 = (info >> 10) & 0xFF;
        let reserved2 = (info >> 18) & 0x3FFF;
        let low3 = info & 0x7;

        assert_eq!(chid, 29);
        assert_eq!(count, 1234);
        assert_eq!(version, 82);
        assert_eq!(const144, 144);
        assert_eq!(reserved2, 2);
        assert_eq!(low3, 0);
    }

    #[test]
    fn spk_payload_carries_low_41_bits() {
        let id = BigUint::from(5u32);
        let bytes = spk_payload(&id).unwrap();
        assert_eq!(from_bytes_le(&bytes), id);
    }
}
