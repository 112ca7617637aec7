// libntag/src/error.rs

use thiserror::Error;

use crate::protocol::AckCode;

/// Common error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tag (or the link) answered with something other than ACK.
    #[error("tag replied {0}")]
    Nak(AckCode),

    #[error("password acknowledgement mismatch: expected {expected:#06x}, got {actual:#06x}")]
    AuthMismatch { expected: u16, actual: u16 },

    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unknown ack nibble: {0:#03x}")]
    UnknownAck(u8),

    #[error("unsupported tag variant: {0}")]
    UnsupportedVariant(u16),

    #[error("collision detected at cascade level {level}")]
    Collision { level: u8 },

    #[error("cascade level 1 answer starts with {0:#04x}, not the cascade tag")]
    MissingCascadeTag(u8),

    #[error("uid check byte mismatch at cascade level {level}")]
    BccMismatch { level: u8 },

    #[error("unexpected SAK {sak:#04x} at cascade level {level}")]
    UnexpectedSak { level: u8, sak: u8 },

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Project the error onto the acknowledgement code surface.
    ///
    /// Failures that have no acknowledgement code of their own (length,
    /// BCC and SAK problems) are reported as `NakCrc`, i.e. a corrupted
    /// exchange. `AuthMismatch`, `UnsupportedVariant` and `Configuration`
    /// have no counterpart and return `None`.
    pub fn ack_code(&self) -> Option<AckCode> {
        match self {
            Error::Nak(code) => Some(*code),
            Error::InvalidLength { .. }
            | Error::UnknownAck(_)
            | Error::Collision { .. }
            | Error::MissingCascadeTag(_)
            | Error::BccMismatch { .. }
            | Error::UnexpectedSak { .. } => Some(AckCode::NakCrc),
            Error::AuthMismatch { .. } | Error::UnsupportedVariant(_) | Error::Configuration(_) => {
                None
            }
        }
    }

    /// True for failures after which the session is no longer connected.
    pub fn is_link_failure(&self) -> bool {
        matches!(
            self,
            Error::Nak(AckCode::NakTimeout) | Error::Nak(AckCode::NakDisconnected)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
