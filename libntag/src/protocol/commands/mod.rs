// libntag/src/protocol/commands/mod.rs

pub mod auth;
pub mod read;
pub mod request;
pub mod select;
pub mod write;

pub use auth::encode_pwd_auth;
pub use read::{
    encode_fast_read, encode_get_version, encode_read, encode_read_counter, encode_read_signature,
    fast_read_len,
};
pub use request::{encode_halt, encode_request, encode_wakeup};
pub use select::{encode_anticollision, encode_select};
pub use write::{encode_comp_write, encode_comp_write_data, encode_write};

use crate::constants::*;
use crate::protocol::Frame;
use crate::types::CascadeLevel;

/// What the reader waits for after transmitting a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// Raw bits without CRC (ATQA, anticollision UID CLn).
    Raw(usize),
    /// CRC protected payload of this many bytes.
    Data(usize),
    /// 4-bit ACK/NAK, received in a one-byte window.
    Ack,
    /// Nothing: the tag stays silent on success (HALT).
    Silence,
}

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Request,
    Wakeup,
    Halt,
    GetVersion,
    Read {
        page: u8,
    },
    FastRead {
        start: u8,
        stop: u8,
    },
    Write {
        page: u8,
        data: [u8; 4],
    },
    /// First phase of COMPATIBILITY_WRITE: opcode and page only.
    CompWrite {
        page: u8,
    },
    /// Second phase of COMPATIBILITY_WRITE: the 16 data bytes.
    CompWriteData {
        data: [u8; 16],
    },
    ReadCounter {
        counter: u8,
    },
    PwdAuth {
        password: [u8; 4],
    },
    ReadSignature,
    Anticollision {
        level: CascadeLevel,
    },
    Select {
        level: CascadeLevel,
        uid_part: [u8; 4],
    },
}

impl Command {
    /// Opcode of the command. The compatibility write data phase reports
    /// the opcode of the command it belongs to.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Request => CMD_REQUEST,
            Self::Wakeup => CMD_WAKEUP,
            Self::Halt => CMD_HALT,
            Self::GetVersion => CMD_GET_VERSION,
            Self::Read { .. } => CMD_READ,
            Self::FastRead { .. } => CMD_FAST_READ,
            Self::Write { .. } => CMD_WRITE,
            Self::CompWrite { .. } | Self::CompWriteData { .. } => CMD_COMP_WRITE,
            Self::ReadCounter { .. } => CMD_READ_CNT,
            Self::PwdAuth { .. } => CMD_PWD_AUTH,
            Self::ReadSignature => CMD_READ_SIG,
            Self::Anticollision { level } | Self::Select { level, .. } => level.select_code(),
        }
    }

    /// Encode the command into its exact wire frame (CRC excluded).
    pub fn encode(&self) -> Frame {
        match self {
            Self::Request => encode_request(),
            Self::Wakeup => encode_wakeup(),
            Self::Halt => encode_halt(),
            Self::GetVersion => encode_get_version(),
            Self::Read { page } => encode_read(*page),
            Self::FastRead { start, stop } => encode_fast_read(*start, *stop),
            Self::Write { page, data } => encode_write(*page, data),
            Self::CompWrite { page } => encode_comp_write(*page),
            Self::CompWriteData { data } => encode_comp_write_data(data),
            Self::ReadCounter { counter } => encode_read_counter(*counter),
            Self::PwdAuth { password } => encode_pwd_auth(password),
            Self::ReadSignature => encode_read_signature(),
            Self::Anticollision { level } => encode_anticollision(*level),
            Self::Select { level, uid_part } => encode_select(*level, uid_part),
        }
    }

    /// Whether the frame is CRC protected on transmit.
    ///
    /// Only the short frames and the bit-oriented anticollision frame go
    /// out without a CRC.
    pub fn uses_crc(&self) -> bool {
        !matches!(
            self,
            Self::Request | Self::Wakeup | Self::Anticollision { .. }
        )
    }

    /// Whether the command may only be sent to a selected tag. REQUEST,
    /// WAKEUP and the select sequence are what establish the connection.
    pub fn requires_connection(&self) -> bool {
        !matches!(
            self,
            Self::Request | Self::Wakeup | Self::Anticollision { .. } | Self::Select { .. }
        )
    }

    pub fn expected_reply(&self) -> Expect {
        match self {
            Self::Request | Self::Wakeup => Expect::Raw(16),
            Self::Anticollision { .. } => Expect::Raw(40),
            Self::Halt => Expect::Silence,
            Self::GetVersion => Expect::Data(VERSION_LEN),
            Self::Read { .. } => Expect::Data(READ_LEN),
            Self::FastRead { start, stop } => Expect::Data(fast_read_len(*start, *stop)),
            Self::Write { .. } | Self::CompWrite { .. } | Self::CompWriteData { .. } => {
                Expect::Ack
            }
            Self::ReadCounter { .. } => Expect::Data(COUNTER_LEN),
            Self::PwdAuth { .. } => Expect::Data(PACK_LEN),
            Self::ReadSignature => Expect::Data(SIGNATURE_LEN),
            Self::Select { .. } => Expect::Data(1),
        }
    }
}
