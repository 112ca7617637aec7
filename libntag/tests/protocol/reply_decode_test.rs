#[path = "../common/mod.rs"]
mod common;

use libntag::protocol::{AckCode, Reply, decode_reply};
use libntag::Error;

#[test]
fn bit_count_decides_the_shape() {
    assert_eq!(decode_reply(&[], 0).unwrap(), Reply::Silent);
    assert_eq!(decode_reply(&[0x0A], 4).unwrap(), Reply::Code(AckCode::Ack));
    assert_eq!(decode_reply(&[0x01], 4).unwrap(), Reply::Code(AckCode::NakCrc));
    assert_eq!(
        decode_reply(&[0x44, 0x00], 16).unwrap(),
        Reply::Data(vec![0x44, 0x00])
    );
}

#[test]
fn every_defined_nibble() {
    let table = [
        (0xA, AckCode::Ack),
        (0x0, AckCode::NakArgument),
        (0x1, AckCode::NakCrc),
        (0x4, AckCode::NakAuthOverflow),
        (0x5, AckCode::NakWriteError),
        (0xF, AckCode::NakTimeout),
        (0xC, AckCode::NakDisconnected),
    ];
    for (nibble, code) in table {
        assert_eq!(decode_reply(&[nibble], 4).unwrap(), Reply::Code(code));
    }
    assert_eq!(decode_reply(&[0x7], 4), Err(Error::UnknownAck(0x7)));
}

#[test]
fn odd_bit_counts_are_corrupt() {
    assert_eq!(
        decode_reply(&[0xFF, 0xFF], 12).unwrap(),
        Reply::Code(AckCode::NakCrc)
    );
}

#[test]
fn payload_and_ack_accessors() {
    assert_eq!(
        Reply::Silent.into_payload(16),
        Err(Error::Nak(AckCode::NakTimeout))
    );
    assert_eq!(
        Reply::Code(AckCode::Ack).into_payload(2),
        Err(Error::InvalidLength {
            expected: 2,
            actual: 0
        })
    );
    assert_eq!(Reply::Code(AckCode::Ack).into_ack(), Ok(()));
    assert_eq!(
        Reply::Code(AckCode::NakWriteError).into_ack(),
        Err(Error::Nak(AckCode::NakWriteError))
    );
}
