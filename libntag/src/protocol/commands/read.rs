// libntag/src/protocol/commands/read.rs

use crate::constants::*;
use crate::protocol::Frame;

/// READ: 4 pages starting at `page` (16 bytes, wraps at the end of memory)
pub fn encode_read(page: u8) -> Frame {
    Frame::from_bytes(vec![CMD_READ, page])
}

/// FAST_READ: pages `start..=stop`
///
/// # Panics
///
/// Panics if `stop < start`.
pub fn encode_fast_read(start: u8, stop: u8) -> Frame {
    assert!(
        stop >= start,
        "fast read stop page {stop:#04x} before start page {start:#04x}"
    );
    Frame::from_bytes(vec![CMD_FAST_READ, start, stop])
}

/// Number of payload bytes answered to FAST_READ(start, stop).
///
/// # Panics
///
/// Panics if `stop < start`.
pub fn fast_read_len(start: u8, stop: u8) -> usize {
    assert!(
        stop >= start,
        "fast read stop page {stop:#04x} before start page {start:#04x}"
    );
    (usize::from(stop) - usize::from(start) + 1) * PAGE_SIZE
}

pub fn encode_get_version() -> Frame {
    Frame::from_bytes(vec![CMD_GET_VERSION])
}

pub fn encode_read_counter(counter: u8) -> Frame {
    Frame::from_bytes(vec![CMD_READ_CNT, counter])
}

/// READ_SIG carries a reserved address byte that must be zero
pub fn encode_read_signature() -> Frame {
    Frame::from_bytes(vec![CMD_READ_SIG, 0x00])
}
