#[path = "../common/mod.rs"]
mod common;

use libntag::prelude::*;
use libntag::transport::mock::MockTransport;

fn protected() -> Settings {
    Settings {
        pwd_prot_base: 0x04,
        pwd_lock: true,
        auth_limit: 2,
        password: 0x1234_5678,
        pwd_ack: 0xCAFE,
        ..Settings::default()
    }
}

#[test]
fn write_settings_on_ntag216_stops_after_write_error() {
    common::init_logger();
    let mut mock = MockTransport::new();
    mock.push_ack(AckCode::Ack);
    mock.push_ack(AckCode::NakWriteError);
    mock.push_ack(AckCode::Ack);
    mock.push_ack(AckCode::Ack);
    let mut dev = common::connected_device(&mut mock, TagVariant::Ntag216);

    assert_eq!(
        dev.write_settings(&protected()),
        Err(Error::Nak(AckCode::NakWriteError))
    );
    drop(dev);

    assert_eq!(mock.transmitted.len(), 2);
    let frames = mock.sent_frames();
    assert_eq!(frames[0][..2], [0xA2, 0xE3]);
    assert_eq!(frames[1][..2], [0xA2, 0xE4]);
    assert_eq!(mock.responses.len(), 2);
}

#[test]
fn settings_survive_a_write_read_cycle() {
    let settings = protected();
    let mut readback = settings.pack();
    readback[8..14].fill(0);

    let mut mock = MockTransport::new();
    for _ in 0..4 {
        mock.push_ack(AckCode::Ack);
    }
    mock.push_bytes(readback.to_vec());
    mock.push_bytes(0xCAFEu16.to_le_bytes().to_vec());

    let mut dev = common::connected_device(&mut mock, TagVariant::Ntag215);
    dev.write_settings(&settings).unwrap();
    let read = dev.read_settings().unwrap();
    assert_eq!(read.password, 0);
    assert_eq!(dev.settings(), &settings);

    dev.pwd_auth(settings.password).unwrap();
    assert_eq!(dev.state(), SessionState::Authenticated);
    drop(dev);

    let frames = mock.sent_frames();
    assert_eq!(frames[4], vec![0x3A, 0x83, 0x86]);
    assert_eq!(frames[5], vec![0x1B, 0x78, 0x56, 0x34, 0x12]);
}

#[test]
fn pack_mismatch_is_distinct_from_nak() {
    let mut mock = MockTransport::new();
    mock.push_bytes(vec![0x00, 0x00]);
    let mut dev = common::connected_device(&mut mock, TagVariant::Ntag213);
    dev.set_settings(protected());

    let err = dev.pwd_auth(0x1234_5678).unwrap_err();
    assert_eq!(
        err,
        Error::AuthMismatch {
            expected: 0xCAFE,
            actual: 0x0000
        }
    );
    assert_eq!(err.ack_code(), None);
    assert_eq!(dev.state(), SessionState::Connected);
}
