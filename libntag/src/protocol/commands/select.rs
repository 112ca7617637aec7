// libntag/src/protocol/commands/select.rs

use crate::constants::{NVB_ANTICOLLISION, NVB_SELECT};
use crate::protocol::Frame;
use crate::types::CascadeLevel;

/// ANTICOLLISION: SEL + NVB 0x20, no UID bits known yet
pub fn encode_anticollision(level: CascadeLevel) -> Frame {
    Frame::from_bytes(vec![level.select_code(), NVB_ANTICOLLISION])
}

/// SELECT layout: SEL(1) + NVB 0x70(1) + UID CLn(4) + BCC(1)
pub fn encode_select(level: CascadeLevel, uid_part: &[u8; 4]) -> Frame {
    let bcc = uid_part.iter().fold(0u8, |acc, &b| acc ^ b);
    let mut buf = Vec::with_capacity(7);
    buf.push(level.select_code());
    buf.push(NVB_SELECT);
    buf.extend_from_slice(uid_part);
    buf.push(bcc);
    Frame::from_bytes(buf)
}
