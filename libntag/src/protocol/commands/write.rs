// libntag/src/protocol/commands/write.rs

use crate::constants::{CMD_COMP_WRITE, CMD_WRITE};
use crate::protocol::Frame;

/// WRITE layout: command_code(1) + page(1) + data(4)
pub fn encode_write(page: u8, data: &[u8; 4]) -> Frame {
    let mut buf = Vec::with_capacity(6);
    buf.push(CMD_WRITE);
    buf.push(page);
    buf.extend_from_slice(data);
    Frame::from_bytes(buf)
}

/// COMPATIBILITY_WRITE phase 1: command_code(1) + page(1)
pub fn encode_comp_write(page: u8) -> Frame {
    Frame::from_bytes(vec![CMD_COMP_WRITE, page])
}

/// COMPATIBILITY_WRITE phase 2: the 16 data bytes
pub fn encode_comp_write_data(data: &[u8; 16]) -> Frame {
    Frame::from_bytes(data.to_vec())
}

/// Build the 16-byte phase 2 payload for a 4-byte page write. Only bytes
/// 0..4 are written by the tag; the rest is padding.
pub fn comp_write_payload(data: &[u8; 4]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out[..4].copy_from_slice(data);
    out
}
