#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{frame, user_pages};
use common::with_crc;
use libntag::protocol::{CrcA, CrcMismatch};
use libntag::transport::mock::MockTransport;
use libntag::transport::{CrcLink, Link, SoftwareCrc, Transport};

#[test]
fn software_crc_frames_read_command() {
    let mut link = SoftwareCrc::new(MockTransport::new(), CrcA);
    assert_eq!(link.transmit_bits_with_crc(&[0x30, 0x04], 16), 32);
    assert_eq!(link.inner().sent_frames(), vec![frame("30 04 26 ee")]);
}

#[test]
fn software_crc_strips_valid_trailer() {
    let mut mock = MockTransport::new();
    mock.push_bytes(with_crc(&user_pages()));
    let mut link = SoftwareCrc::crc_a(mock);

    let mut buf = [0u8; 16];
    assert_eq!(link.receive_bits_with_crc(&mut buf, 128), Ok(128));
    assert_eq!(buf.to_vec(), user_pages());
    assert_eq!(link.inner().receives[0].bits, 144);
}

#[test]
fn software_crc_rejects_corruption() {
    let mut corrupted = with_crc(&user_pages());
    corrupted[7] ^= 0x80;
    let mut mock = MockTransport::new();
    mock.push_bytes(corrupted);
    let mut link = SoftwareCrc::crc_a(mock);

    let mut buf = [0u8; 16];
    assert_eq!(link.receive_bits_with_crc(&mut buf, 128), Err(CrcMismatch));
}

#[test]
fn raw_path_is_untouched() {
    let mut mock = MockTransport::new();
    mock.push_bytes(vec![0x44, 0x00]);
    let mut link = SoftwareCrc::crc_a(mock);
    assert_eq!(link.transmit_bits(&[0x26], 7), 7);
    let mut buf = [0u8; 2];
    assert_eq!(link.receive_bits(&mut buf, 16), 16);
    assert_eq!(link.into_inner().sent_frames(), vec![vec![0x26]]);
}

#[test]
fn boxed_software_link() {
    let mut mock = MockTransport::new();
    mock.push_bytes(with_crc(&[0x04]));
    let mut link: Box<dyn Link> = Box::new(SoftwareCrc::crc_a(mock));
    let mut buf = [0u8; 1];
    assert_eq!(link.receive_bits_with_crc(&mut buf, 8), Ok(8));
    assert_eq!(buf, [0x04]);
}
