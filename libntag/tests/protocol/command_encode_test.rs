#[path = "../common/mod.rs"]
mod common;

use common::fixtures::frame;
use libntag::protocol::{Command, CrcA, Expect};
use libntag::CascadeLevel;

#[test]
fn read_page_four_on_the_air() {
    let cmd = Command::Read { page: 4 };
    let f = cmd.encode();
    assert_eq!(f.bytes(), &[0x30, 0x04]);
    assert_eq!(f.with_crc(&CrcA), frame("30 04 26 ee"));
    assert_eq!(cmd.expected_reply(), Expect::Data(16));
}

#[test]
fn short_frames_have_seven_bits() {
    for (cmd, code) in [(Command::Request, 0x26u8), (Command::Wakeup, 0x52u8)] {
        let f = cmd.encode();
        assert_eq!(f.bits(), 7);
        assert_eq!(f.bytes(), &[code]);
        assert!(!f.is_byte_aligned());
        assert!(!cmd.uses_crc());
    }
}

#[test]
fn fast_read_covers_config_block() {
    let cmd = Command::FastRead {
        start: 0xE3,
        stop: 0xE6,
    };
    assert_eq!(cmd.encode().bytes(), &[0x3A, 0xE3, 0xE6]);
    assert_eq!(cmd.expected_reply(), Expect::Data(16));
}

#[test]
fn pwd_auth_password_little_endian() {
    let cmd = Command::PwdAuth {
        password: 0xDEAD_BEEFu32.to_le_bytes(),
    };
    assert_eq!(cmd.encode().bytes(), &frame("1b ef be ad de")[..]);
    assert_eq!(cmd.expected_reply(), Expect::Data(2));
}

#[test]
fn select_carries_bcc() {
    let cmd = Command::Select {
        level: CascadeLevel::One,
        uid_part: [0x88, 0x04, 0x6F, 0x11],
    };
    assert_eq!(cmd.encode().bytes(), &frame("93 70 88 04 6f 11 f2")[..]);
    assert!(cmd.uses_crc());
    assert!(!cmd.requires_connection());
}

#[test]
#[should_panic(expected = "crc requested")]
fn crc_on_short_frame_panics() {
    let _ = Command::Request.encode().with_crc(&CrcA);
}
