#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{frame, sample_page0, user_pages};
use common::with_crc;
use libntag::prelude::*;
use libntag::transport::mock::MockTransport;

fn software_session(mock: MockTransport) -> Device<SoftwareCrc<MockTransport>> {
    common::connected_device(SoftwareCrc::new(mock, CrcA), TagVariant::Ntag213)
}

#[test]
fn read_page_four_with_software_crc() {
    common::init_logger();
    let mut mock = MockTransport::new();
    mock.push_bytes(with_crc(&user_pages()));
    let mut dev = software_session(mock);

    assert_eq!(dev.read(4).unwrap().to_vec(), user_pages());

    let raw = dev.into_link().into_inner();
    assert_eq!(raw.sent_frames(), vec![frame("30 04 26 ee")]);
    assert_eq!(raw.transmitted[0].bits, 32);
    assert!(!raw.transmitted[0].crc);
    assert_eq!(raw.receives[0].bits, 144);
}

#[test]
fn corrupted_read_is_nak_crc() {
    let mut bad = with_crc(&user_pages());
    bad[16] ^= 0xFF;
    let mut mock = MockTransport::new();
    mock.push_bytes(bad);
    let mut dev = software_session(mock);

    assert_eq!(dev.read(4), Err(Error::Nak(AckCode::NakCrc)));
    assert!(dev.is_connected());
}

#[test]
fn write_ack_through_software_crc() {
    let mut mock = MockTransport::new();
    mock.push_nibble(0x0A);
    let mut dev = software_session(mock);
    dev.write(4, &[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();

    let raw = dev.into_link().into_inner();
    assert_eq!(raw.sent_frames(), vec![frame("a2 04 de ad be ef 22 8b")]);
}

#[test]
fn fast_read_asks_for_payload_plus_crc() {
    let pages = [user_pages(), user_pages()].concat();
    let mut mock = MockTransport::new();
    mock.push_bytes(with_crc(&pages));
    let mut dev = software_session(mock);

    assert_eq!(dev.fast_read(4, 11).unwrap(), pages);
    let raw = dev.into_link().into_inner();
    assert_eq!(raw.receives[0].bits, (32 + 2) * 8);
}

#[test]
fn read_uid_and_connect_over_software_crc() {
    common::init_logger();
    let uid = common::sample_uid();
    let mut mock = MockTransport::new();
    common::seed_connect_software(&mut mock);
    mock.push_bytes(with_crc(&sample_page0()));

    let mut dev = Device::new(SoftwareCrc::crc_a(mock), TagVariant::Ntag213);
    dev.connect(uid).unwrap();
    assert_eq!(dev.read_uid().unwrap(), uid);

    let raw = dev.into_link().into_inner();
    let frames = raw.sent_frames();
    assert_eq!(frames[0], vec![0x52]);
    assert_eq!(raw.transmitted[0].bits, 7);
    assert_eq!(&frames[1][..7], &frame("93 70 88 04 6f 11 f2")[..]);
    assert_eq!(frames[1].len(), 9);
}

#[test]
fn builder_selects_software_crc_once() {
    let mut mock = MockTransport::new();
    mock.push_bytes(with_crc(&common::fixtures::ntag216_version()));
    let mut dev = DeviceBuilder::new()
        .with_software_crc(mock, CrcA)
        .variant(TagVariant::Ntag216)
        .build()
        .unwrap();
    assert_eq!(dev.get_version(), Err(Error::Nak(AckCode::NakDisconnected)));
    assert_eq!(dev.link().inner().calls(), 0);
}
