//! End-to-end scenarios against a fixed pair of Product IDs, matching the
//! worked examples used to validate the wire format during development.

use rds_keygen::{
    curve::params::{lkp_curve, spk_curve},
    facade::{self, Request},
    payload, pid, signature, Error,
};

const PID_A: &str = "00490-92005-99454-AT527";
const PID_B: &str = "11111-22222-33333-AT527";

#[test]
fn generates_a_verifiable_spk() {
    let outcome = facade::process(&Request {
        pid: PID_A.to_string(),
        existing_spk: None,
        count: None,
        license_triple: None,
    })
    .unwrap();

    let rc4_key = pid::rc4_key(PID_A).unwrap();
    let spk_id = pid::spk_id(PID_A).unwrap();
    assert!(signature::verify(Some(&spk_id), &outcome.spk, spk_curve(), &rc4_key));
    assert!(outcome.lkp.is_none());
}

#[test]
fn generates_an_lkp_with_the_requested_fields() {
    let outcome = facade::process(&Request {
        pid: PID_A.to_string(),
        existing_spk: None,
        count: Some(1234),
        license_triple: Some("029_10_2".to_string()),
    })
    .unwrap();

    let lkp = outcome.lkp.expect("LKP was requested");
    let rc4_key = pid::rc4_key(PID_A).unwrap();
    assert!(signature::verify(None, &lkp, lkp_curve(), &rc4_key));

    let expected_payload = payload::lkp_payload(29, 1234, 10, 2).unwrap();
    assert_eq!(expected_payload.len(), payload::PAYLOAD_LEN);
}

#[test]
fn validates_a_previously_generated_spk() {
    let first = facade::process(&Request {
        pid: PID_A.to_string(),
        existing_spk: None,
        count: None,
        license_triple: None,
    })
    .unwrap();

    let second = facade::process(&Request {
        pid: PID_A.to_string(),
        existing_spk: Some(first.spk.clone()),
        count: Some(1),
        license_triple: Some("029_10_2".to_string()),
    })
    .unwrap();

    assert_eq!(second.spk, first.spk);
}

#[test]
fn rejects_an_spk_generated_for_a_different_pid() {
    let first = facade::process(&Request {
        pid: PID_A.to_string(),
        existing_spk: None,
        count: None,
        license_triple: None,
    })
    .unwrap();

    let result = facade::process(&Request {
        pid: PID_B.to_string(),
        existing_spk: Some(first.spk),
        count: Some(1),
        license_triple: Some("029_10_2".to_string()),
    });

    assert!(matches!(result, Err(Error::SpkMismatch)));
}

#[test]
fn version_five_zero_is_the_special_case() {
    assert_eq!(payload::version_code(5, 0), 1);
}

#[test]
fn rejects_count_above_the_license_ceiling() {
    let result = facade::process(&Request {
        pid: PID_A.to_string(),
        existing_spk: None,
        count: Some(10_000),
        license_triple: Some("029_10_2".to_string()),
    });

    assert!(matches!(result, Err(Error::InvalidLicense(_))));
}
