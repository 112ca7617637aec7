#[path = "../common/mod.rs"]
mod common;

use libntag::prelude::*;
use libntag::transport::mock::MockTransport;

#[test]
fn not_connected_commands_never_reach_the_link() {
    common::init_logger();
    let mut mock = MockTransport::new();
    let mut dev = Device::new(&mut mock, TagVariant::Ntag213);

    assert_eq!(dev.get_version(), Err(Error::Nak(AckCode::NakDisconnected)));
    assert_eq!(dev.read(4), Err(Error::Nak(AckCode::NakDisconnected)));
    assert_eq!(
        dev.write(4, &[0; 4]),
        Err(Error::Nak(AckCode::NakDisconnected))
    );
    assert_eq!(dev.pwd_auth(0), Err(Error::Nak(AckCode::NakDisconnected)));
    assert_eq!(dev.halt(), Err(Error::Nak(AckCode::NakDisconnected)));
    drop(dev);
    assert_eq!(mock.calls(), 0);
}

#[test]
fn full_lifecycle() {
    common::init_logger();
    let uid = common::sample_uid();
    let mut mock = MockTransport::new();
    common::seed_auto_connect(&mut mock, &uid);
    mock.push_bytes(vec![0x00, 0x00]); // PACK
    mock.push_bytes(common::fixtures::ntag213_version());

    let mut dev = Device::new(&mut mock, TagVariant::Ntag213);
    assert_eq!(dev.state(), SessionState::Idle);
    assert_eq!(dev.auto_connect().unwrap(), uid);
    assert_eq!(dev.state(), SessionState::Connected);

    dev.pwd_auth(0xFFFF_FFFF).unwrap();
    assert_eq!(dev.state(), SessionState::Authenticated);

    let version = dev.get_version().unwrap();
    assert_eq!(version.variant().unwrap(), TagVariant::Ntag213);

    dev.halt().unwrap();
    assert_eq!(dev.state(), SessionState::Halted);
    assert_eq!(dev.read(0), Err(Error::Nak(AckCode::NakDisconnected)));

    common::seed_connect(dev.link_mut());
    dev.connect(uid).unwrap();
    assert!(dev.is_connected());

    dev.disconnect();
    assert_eq!(dev.state(), SessionState::Disconnected);
    assert!(dev.uid().is_none());
}

#[test]
fn timeout_mid_session_requires_reconnect() {
    let mut mock = MockTransport::new();
    mock.push_silence();
    let mut dev = common::connected_device(&mut mock, TagVariant::Ntag215);

    assert_eq!(dev.read_counter(2), Err(Error::Nak(AckCode::NakTimeout)));
    assert!(!dev.is_connected());
    assert!(Error::Nak(AckCode::NakTimeout).is_link_failure());
    assert_eq!(
        dev.read_signature(),
        Err(Error::Nak(AckCode::NakDisconnected))
    );
}

#[test]
fn tag_reported_disconnect_code_drops_session() {
    let mut mock = MockTransport::new();
    mock.push_ack(AckCode::NakDisconnected);
    let mut dev = common::connected_device(&mut mock, TagVariant::Ntag213);
    assert_eq!(dev.read(4), Err(Error::Nak(AckCode::NakDisconnected)));
    assert_eq!(dev.state(), SessionState::Disconnected);
}

#[test]
fn detect_reports_presence() {
    let mut mock = MockTransport::new();
    mock.push_bytes(vec![0x44, 0x00]);
    let mut dev = Device::new(&mut mock, TagVariant::Ntag213);
    assert!(dev.detect());
    assert!(dev.is_awake());
    assert!(!dev.detect());
}

#[test]
fn byte_noise_after_write_is_nak_crc() {
    let mut mock = MockTransport::new();
    mock.push_bytes(vec![0xFA]);
    let mut dev = common::connected_device(&mut mock, TagVariant::Ntag213);
    assert_eq!(
        dev.write(4, &[1, 2, 3, 4]),
        Err(Error::Nak(AckCode::NakCrc))
    );
    assert!(dev.is_connected());
    drop(dev);
    assert_eq!(mock.receives[0].bits, 8);
}
