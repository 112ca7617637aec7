#[path = "../common/mod.rs"]
mod common;

use common::fixtures::frame;
use libntag::protocol::crc::{append_crc, verify_crc};
use libntag::protocol::{Crc16, CrcA, CrcMismatch};

#[test]
fn crc_a_known_frames() {
    assert_eq!(append_crc(&CrcA, &[0x30, 0x00]), frame("30 00 02 a8"));
    assert_eq!(append_crc(&CrcA, &[0x30, 0x04]), frame("30 04 26 ee"));
    assert_eq!(append_crc(&CrcA, &[0x60]), frame("60 f8 32"));
    assert_eq!(append_crc(&CrcA, &[0x50]), frame("50 7b 03"));
    assert_eq!(CrcA.compute(&[0x3A, 0x04, 0x07]), 0x431F);
}

#[test]
fn round_trip_and_corruption() {
    let payload = frame("a2 04 de ad be ef");
    let mut framed = append_crc(&CrcA, &payload);
    assert_eq!(&framed[6..], &[0x22, 0x8B]);
    assert_eq!(verify_crc(&CrcA, &framed), Ok(&payload[..]));

    for i in 0..framed.len() {
        framed[i] ^= 0x40;
        assert_eq!(verify_crc(&CrcA, &framed), Err(CrcMismatch), "byte {i}");
        framed[i] ^= 0x40;
    }
}

#[test]
fn closures_are_crc_engines() {
    let xor = |d: &[u8]| d.iter().fold(0u16, |acc, &b| acc ^ u16::from(b));
    let framed = append_crc(&xor, &[0x0F, 0xF0]);
    assert_eq!(framed, vec![0x0F, 0xF0, 0xFF, 0x00]);
    assert!(verify_crc(&xor, &framed).is_ok());
}
