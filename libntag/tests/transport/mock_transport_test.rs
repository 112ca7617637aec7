#[path = "../common/mod.rs"]
mod common;

use libntag::protocol::{AckCode, CrcMismatch};
use libntag::transport::mock::{MockReply, MockTransport, ReceiveRequest};
use libntag::transport::{CrcLink, Transport};

#[test]
fn replies_are_replayed_in_order() {
    let mut m = MockTransport::new();
    m.push_bytes(vec![0x44, 0x00]);
    m.push_ack(AckCode::NakWriteError);
    m.push_silence();

    let mut buf = [0u8; 2];
    assert_eq!(m.receive_bits(&mut buf, 16), 16);
    assert_eq!(buf, [0x44, 0x00]);
    assert_eq!(m.receive_bits(&mut buf, 4), 4);
    assert_eq!(buf[0], 0x05);
    assert_eq!(m.receive_bits(&mut buf, 16), 0);
    assert!(m.responses.is_empty());
}

#[test]
fn hardware_crc_failure() {
    let mut m = MockTransport::new();
    m.push_crc_error();
    assert_eq!(m.responses.front(), Some(&MockReply::CrcError));
    let mut buf = [0u8; 16];
    assert_eq!(m.receive_bits_with_crc(&mut buf, 128), Err(CrcMismatch));
    assert_eq!(
        m.receives,
        vec![ReceiveRequest {
            bits: 128,
            crc: true
        }]
    );
}

#[test]
fn collision_probe() {
    let mut m = MockTransport::new();
    assert!(!m.detect_collision());
    m.set_collision(true);
    assert!(m.detect_collision());
}

#[test]
fn transmissions_record_crc_path() {
    let mut m = MockTransport::new();
    m.transmit_bits(&[0x26], 7);
    m.transmit_bits_with_crc(&[0x30, 0x04], 16);
    assert_eq!(m.sent_frames(), vec![vec![0x26], vec![0x30, 0x04]]);
    assert!(!m.transmitted[0].crc);
    assert!(m.transmitted[1].crc);
    assert_eq!(m.calls(), 2);
}
