// libntag/src/protocol/ack.rs

use crate::constants::*;
use crate::{Error, Result};
use derive_more::Display;

/// Acknowledgement code.
///
/// On the wire this is a 4-bit reply, not a byte. `NakTimeout` and
/// `NakDisconnected` are produced by the driver itself: a zero-bit
/// receive and a command issued on a session that is not connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[repr(u8)]
pub enum AckCode {
    #[display(fmt = "ACK")]
    Ack = ACK_NIBBLE,
    #[display(fmt = "NAK (invalid argument or page address)")]
    NakArgument = NAK_ARG_NIBBLE,
    #[display(fmt = "NAK (CRC or parity error)")]
    NakCrc = NAK_CRC_NIBBLE,
    #[display(fmt = "NAK (authentication counter overflow)")]
    NakAuthOverflow = NAK_AUTH_OVF_NIBBLE,
    #[display(fmt = "NAK (EEPROM write error)")]
    NakWriteError = NAK_WRITE_NIBBLE,
    #[display(fmt = "NAK (timeout)")]
    NakTimeout = NAK_TIMEOUT_NIBBLE,
    #[display(fmt = "NAK (disconnected)")]
    NakDisconnected = NAK_DISCONNECTED_NIBBLE,
}

impl AckCode {
    /// Map the low nibble of a 4-bit reply onto the closed enumeration.
    pub fn from_nibble(nibble: u8) -> Option<Self> {
        match nibble & 0x0F {
            ACK_NIBBLE => Some(Self::Ack),
            NAK_ARG_NIBBLE => Some(Self::NakArgument),
            NAK_CRC_NIBBLE => Some(Self::NakCrc),
            NAK_AUTH_OVF_NIBBLE => Some(Self::NakAuthOverflow),
            NAK_WRITE_NIBBLE => Some(Self::NakWriteError),
            NAK_TIMEOUT_NIBBLE => Some(Self::NakTimeout),
            NAK_DISCONNECTED_NIBBLE => Some(Self::NakDisconnected),
            _ => None,
        }
    }

    pub fn nibble(&self) -> u8 {
        *self as u8
    }

    pub fn is_ack(&self) -> bool {
        *self == Self::Ack
    }

    /// `Ok(())` for ACK, `Err(Error::Nak(code))` otherwise.
    pub fn into_result(self) -> Result<()> {
        if self.is_ack() {
            Ok(())
        } else {
            Err(Error::Nak(self))
        }
    }
}
