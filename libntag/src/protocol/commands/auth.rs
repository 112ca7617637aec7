// libntag/src/protocol/commands/auth.rs

use crate::constants::CMD_PWD_AUTH;
use crate::protocol::Frame;

/// PWD_AUTH layout: command_code(1) + PWD0..PWD3
pub fn encode_pwd_auth(password: &[u8; 4]) -> Frame {
    let mut buf = Vec::with_capacity(5);
    buf.push(CMD_PWD_AUTH);
    buf.extend_from_slice(password);
    Frame::from_bytes(buf)
}
