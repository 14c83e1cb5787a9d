//! License triple parsing and the advisory license-type catalogue.
//!
//! Neither of these touch the cryptographic core: a triple is three small
//! integers bound into the LKP payload by [`crate::payload::lkp_payload`],
//! and the catalogue is a human-readable name lookup with no bearing on the
//! algorithm.

use crate::error::{Error, Result};

/// Channel id, major version, and minor version parsed from a license
/// triple such as `"029_10_2"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LicenseTriple {
    pub chid: u32,
    pub major: u32,
    pub minor: u32,
}

/// Inclusive bounds on the license count field.
pub const COUNT_MIN: u32 = 1;
pub const COUNT_MAX: u32 = 9999;

/// Inclusive upper bound on the channel id field (10 bits).
pub const CHID_MAX: u32 = 1023;

/// Parses a `CHID_MAJOR_MINOR` triple, e.g. `"029_10_2"`.
pub fn parse_triple(triple: &str) -> Result<LicenseTriple> {
    let parts: Vec<&str> = triple.split('_').collect();
    let [chid, major, minor] = parts.as_slice() else {
        return Err(Error::InvalidLicense(format!(
            "license triple must be CHID_MAJOR_MINOR, got {triple:?}"
        )));
    };

    let chid: u32 = chid
        .parse()
        .map_err(|_| Error::InvalidLicense(format!("channel id {chid:?} is not a non-negative integer")))?;
    let major: u32 = major
        .parse()
        .map_err(|_| Error::InvalidLicense(format!("major version {major:?} is not a non-negative integer")))?;
    let minor: u32 = minor
        .parse()
        .map_err(|_| Error::InvalidLicense(format!("minor version {minor:?} is not a non-negative integer")))?;

    if chid > CHID_MAX {
        return Err(Error::InvalidLicense(format!(
            "channel id {chid} exceeds {CHID_MAX}"
        )));
    }

    Ok(LicenseTriple { chid, major, minor })
}

/// Checks a license count is within `[COUNT_MIN, COUNT_MAX]`.
pub fn validate_count(count: u32) -> Result<()> {
    if (COUNT_MIN..=COUNT_MAX).contains(&count) {
        Ok(())
    } else {
        Err(Error::InvalidLicense(format!(
            "count {count} is outside [{COUNT_MIN}, {COUNT_MAX}]"
        )))
    }
}

/// One entry of the advisory license-type catalogue: the triple string as
/// written in the wild, and its human-readable description.
pub struct LicenseType {
    pub code: &'static str,
    pub description: &'static str,
}

/// The full catalogue of recognised license triples, sorted by code.
///
/// Advisory only: looking a code up here has no effect on key generation.
/// A triple absent from this table still parses and signs correctly; it is
/// simply unnamed.
pub const LICENSE_TYPES: &[LicenseType] = &[
    LicenseType { code: "001_5_0", description: "Windows 2000 Per Device" },
    LicenseType { code: "002_5_0", description: "Windows 2000 Internet Connector" },
    LicenseType { code: "003_5_2", description: "Windows Server 2003 Per User" },
    LicenseType { code: "004_5_2", description: "Windows Server 2003 Per Device" },
    LicenseType { code: "005_6_0", description: "Windows Server 2008 (R2) Per Device" },
    LicenseType { code: "006_6_0", description: "Windows Server 2008 (R2) Per User" },
    LicenseType { code: "009_6_0", description: "Windows Server 2008 (R2) VDI Standard" },
    LicenseType { code: "010_6_0", description: "Windows Server 2008 (R2) VDI Premium" },
    LicenseType { code: "011_6_2", description: "Windows Server 2012 (R2) Per Device" },
    LicenseType { code: "012_6_2", description: "Windows Server 2012 (R2) Per User" },
    LicenseType { code: "015_6_2", description: "Windows Server 2012 (R2) VDI Suite" },
    LicenseType { code: "016_6_0", description: "Windows Server 2008 (R2) VDI Suite" },
    LicenseType { code: "020_10_0", description: "Windows Server 2016 Per Device" },
    LicenseType { code: "021_10_0", description: "Windows Server 2016 Per User" },
    LicenseType { code: "022_10_0", description: "Windows Server 2016 VDI Suite" },
    LicenseType { code: "026_10_1", description: "Windows Server 2019 Per Device" },
    LicenseType { code: "027_10_1", description: "Windows Server 2019 Per User" },
    LicenseType { code: "028_10_1", description: "Windows Server 2019 VDI Suite" },
    LicenseType { code: "029_10_2", description: "Windows Server 2022 Per Device" },
    LicenseType { code: "030_10_2", description: "Windows Server 2022 Per User" },
    LicenseType { code: "031_10_2", description: "Windows Server 2022 VDI Suite" },
    LicenseType { code: "032_10_3", description: "Windows Server 2025 Per Device" },
    LicenseType { code: "033_10_3", description: "Windows Server 2025 Per User" },
    LicenseType { code: "034_10_3", description: "Windows Server 2025 VDI Suite" },
];

/// Looks up the human-readable description for a license code, if known.
pub fn describe(code: &str) -> Option<&'static str> {
    LICENSE_TYPES
        .iter()
        .find(|entry| entry.code == code)
        .map(|entry| entry.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_triple() {
        let t = parse_triple("029_10_2").unwrap();
        assert_eq!(t, LicenseTriple { chid: 29, major: 10, minor: 2 });
    }

    #[test]
    fn rejects_malformed_triple() {
        assert!(parse_triple("029_10").is_err());
        assert!(parse_triple("029_10_2_extra").is_err());
        assert!(parse_triple("abc_10_2").is_err());
    }

    #[test]
    fn rejects_chid_out_of_range() {
        assert!(parse_triple("1024_10_2").is_err());
        assert!(parse_triple("1023_10_2").is_ok());
    }

    #[test]
    fn count_bounds_are_inclusive() {
        assert!(validate_count(1).is_ok());
        assert!(validate_count(9999).is_ok());
        assert!(validate_count(0).is_err());
        assert!(validate_count(10000).is_err());
    }

    #[test]
    fn looks_up_known_and_unknown_codes() {
        assert_eq!(describe("029_10_2"), Some("Windows Server 2022 Per Device"));
        assert_eq!(describe("999_0_0"), None);
    }

    #[test]
    fn catalogue_is_sorted_by_code() {
        let codes: Vec<&str> = LICENSE_TYPES.iter().map(|e| e.code).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }
}
