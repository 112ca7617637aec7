//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::constants::SAK_CASCADE_BIT;
use crate::device::{Device, SessionState};
use crate::protocol::CrcA;
use crate::protocol::crc::append_crc;
use crate::transport::Link;
use crate::transport::mock::MockTransport;
use crate::types::{TagVariant, Uid};

/// UID used throughout the tests (NXP manufacturer byte 0x04).
#[doc(hidden)]
pub fn sample_uid() -> Uid {
    Uid::from_bytes([0x04, 0x6F, 0x11, 0x92, 0x3A, 0x5C, 0x80])
}

/// Append the CRC_A trailer, as a tag would on the air.
#[doc(hidden)]
pub fn with_crc(payload: &[u8]) -> Vec<u8> {
    append_crc(&CrcA, payload)
}

/// Session already in the `Connected` state with `sample_uid()`. No
/// frames are exchanged.
#[doc(hidden)]
pub fn connected_device<L: Link>(link: L, variant: TagVariant) -> Device<L> {
    let mut device = Device::new(link, variant);
    device.set_uid(Some(sample_uid()));
    device.set_state(SessionState::Connected);
    device
}

/// Queue the replies of WAKEUP/REQUEST + SELECT CL1 + SELECT CL2 for a
/// mock used directly as a hardware-CRC link.
#[doc(hidden)]
pub fn seed_connect(mock: &mut MockTransport) {
    mock.push_bytes(vec![0x44, 0x00]);
    mock.push_bytes(vec![SAK_CASCADE_BIT]);
    mock.push_bytes(vec![0x00]);
}

/// Same as [`seed_connect`] for a mock wrapped in `SoftwareCrc`: the SAK
/// frames carry their CRC.
#[doc(hidden)]
pub fn seed_connect_software(mock: &mut MockTransport) {
    mock.push_bytes(vec![0x44, 0x00]);
    mock.push_bytes(with_crc(&[SAK_CASCADE_BIT]));
    mock.push_bytes(with_crc(&[0x00]));
}

/// Queue the full REQUEST + anticollision + select exchange that resolves
/// `uid` (hardware-CRC mock).
#[doc(hidden)]
pub fn seed_auto_connect(mock: &mut MockTransport, uid: &Uid) {
    use crate::types::CascadeLevel;

    mock.push_bytes(vec![0x44, 0x00]);
    for (level, sak) in [(CascadeLevel::One, SAK_CASCADE_BIT), (CascadeLevel::Two, 0x00)] {
        let part = uid.cascade_part(level);
        let bcc = part.iter().fold(0u8, |acc, &b| acc ^ b);
        let mut cln = part.to_vec();
        cln.push(bcc);
        mock.push_bytes(cln);
        mock.push_bytes(vec![sak]);
    }
}
