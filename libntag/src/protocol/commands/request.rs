// libntag/src/protocol/commands/request.rs

use crate::constants::{CMD_HALT, CMD_REQUEST, CMD_WAKEUP};
use crate::protocol::Frame;

/// REQA as a 7-bit short frame
pub fn encode_request() -> Frame {
    Frame::short(CMD_REQUEST)
}

/// WUPA as a 7-bit short frame
pub fn encode_wakeup() -> Frame {
    Frame::short(CMD_WAKEUP)
}

/// HALT: opcode only, CRC is attached on transmit. ISO/IEC 14443-3 HLTA
/// carries a second zero byte; NTAG21x accepts the opcode alone.
pub fn encode_halt() -> Frame {
    Frame::from_bytes(vec![CMD_HALT])
}
