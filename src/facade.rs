//! End-to-end orchestration: turns a request into an SPK and, optionally,
//! an LKP.

use tracing::{debug, info};

use crate::{
    curve::params::{lkp_curve, spk_curve},
    error::{Error, Result},
    license::{self, LicenseTriple},
    payload, pid, signature,
};

/// Everything needed to drive one `process` call.
#[derive(Clone, Debug, Default)]
pub struct Request {
    /// Product ID; required.
    pub pid: String,
    /// An SPK to validate and reuse instead of generating a fresh one.
    pub existing_spk: Option<String>,
    /// License count, paired with `license_triple`.
    pub count: Option<u32>,
    /// License triple, paired with `count`.
    pub license_triple: Option<String>,
}

/// Result of a successful `process` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub spk: String,
    pub lkp: Option<String>,
}

/// Drives the SPK (and optional LKP) generate/validate flow for one request.
///
/// `count` and `license_triple` must both be present or both absent;
/// violating this is reported as [`Error::InvalidLicense`].
pub fn process(request: &Request) -> Result<ProcessOutcome> {
    info!(pid = %request.pid, "processing request");

    let spk_curve = spk_curve();
    let rc4_key = pid::rc4_key(&request.pid)?;
    let spk_id = pid::spk_id(&request.pid)?;

    let spk = match &request.existing_spk {
        Some(candidate) => {
            debug!("validating caller-supplied SPK");
            if signature::verify(Some(&spk_id), candidate, spk_curve, &rc4_key) {
                candidate.clone()
            } else {
                return Err(Error::SpkMismatch);
            }
        }
        None => {
            debug!("generating fresh SPK");
            let payload = payload::spk_payload(&spk_id)?;
            signature::sign(&payload, spk_curve, &rc4_key, Some(&spk_id))?
        }
    };

    let lkp = match (request.count, &request.license_triple) {
        (Some(count), Some(triple)) => Some(generate_lkp(&rc4_key, count, triple)?),
        (None, None) => None,
        _ => {
            return Err(Error::InvalidLicense(
                "count and license_triple must both be present or both absent".to_string(),
            ))
        }
    };

    info!(has_lkp = lkp.is_some(), "request complete");
    Ok(ProcessOutcome { spk, lkp })
}

fn generate_lkp(rc4_key: &[u8; 16], count: u32, triple: &str) -> Result<String> {
    license::validate_count(count)?;
    let LicenseTriple { chid, major, minor } = license::parse_triple(triple)?;

    debug!(chid, count, major, minor, "generating LKP");
    let payload = payload::lkp_payload(chid, count, major, minor)?;
    signature::sign(&payload, lkp_curve(), rc4_key, None)
}
