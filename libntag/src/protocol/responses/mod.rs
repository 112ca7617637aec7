// libntag/src/protocol/responses/mod.rs

pub mod read;
pub mod settings;
pub mod version;

pub use read::{decode_atqa, decode_counter, decode_pack, decode_sak, decode_uid, decode_uid_cln};
pub use settings::{Mirror, Settings};
pub use version::Version;

use crate::constants::ACK_BITS;
use crate::protocol::AckCode;
use crate::protocol::parser;
use crate::{Error, Result};

/// A PICC reply, classified by the number of bits received.
///
/// The tag never labels its answers: a 4-bit frame is an ACK/NAK, whole
/// bytes are payload, and nothing at all is a timeout (or, after HALT,
/// success).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Silent,
    Code(AckCode),
    Data(Vec<u8>),
}

/// Classify a receive of `bits` valid bits stored in `buf`.
///
/// Bit counts that are neither 0, 4 nor a whole number of bytes are
/// corrupted frames and classify as `NakCrc`.
pub fn decode_reply(buf: &[u8], bits: usize) -> Result<Reply> {
    if bits == 0 {
        return Ok(Reply::Silent);
    }

    if bits == ACK_BITS {
        let nibble = parser::byte_at(buf, 0)? & 0x0F;
        return AckCode::from_nibble(nibble)
            .map(Reply::Code)
            .ok_or(Error::UnknownAck(nibble));
    }

    if bits % 8 != 0 {
        log::warn!("discarding {bits}-bit reply that is not byte aligned");
        return Ok(Reply::Code(AckCode::NakCrc));
    }

    let payload = parser::slice_at(buf, 0, bits / 8)?;
    Ok(Reply::Data(payload.to_vec()))
}

impl Reply {
    /// Accept exactly `expected` payload bytes.
    pub fn into_payload(self, expected: usize) -> Result<Vec<u8>> {
        match self {
            Reply::Silent => Err(Error::Nak(AckCode::NakTimeout)),
            Reply::Code(AckCode::Ack) => Err(Error::InvalidLength {
                expected,
                actual: 0,
            }),
            Reply::Code(code) => Err(Error::Nak(code)),
            Reply::Data(data) => {
                parser::ensure_exact_len(&data, expected)?;
                Ok(data)
            }
        }
    }

    /// Accept only a 4-bit ACK. Whole bytes where an ACK was expected are
    /// noise, not an acknowledgement.
    pub fn into_ack(self) -> Result<()> {
        match self {
            Reply::Silent => Err(Error::Nak(AckCode::NakTimeout)),
            Reply::Code(code) => code.into_result(),
            Reply::Data(_) => Err(Error::Nak(AckCode::NakCrc)),
        }
    }
}
