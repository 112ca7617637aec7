// libntag/src/protocol/responses/read.rs

use crate::constants::*;
use crate::protocol::parser;
use crate::types::{Atqa, CascadeLevel, Uid};
use crate::{Error, Result};

/// ATQA: 2 bytes, LSB first
pub fn decode_atqa(data: &[u8]) -> Result<Atqa> {
    parser::ensure_exact_len(data, 2)?;
    Ok(Atqa::from_le_bytes(parser::array_at(data, 0)?))
}

/// SAK: a single byte
pub fn decode_sak(data: &[u8]) -> Result<u8> {
    parser::ensure_exact_len(data, 1)?;
    parser::byte_at(data, 0)
}

/// Anticollision answer: UID CLn(4) + BCC(1). Returns the four UID CLn
/// bytes after checking the BCC.
pub fn decode_uid_cln(data: &[u8], level: CascadeLevel) -> Result<[u8; 4]> {
    parser::ensure_exact_len(data, 5)?;
    let part: [u8; 4] = parser::array_at(data, 0)?;
    let bcc = parser::byte_at(data, 4)?;
    if part.iter().fold(0u8, |acc, &b| acc ^ b) != bcc {
        return Err(Error::BccMismatch {
            level: level.number(),
        });
    }
    Ok(part)
}

/// READ_CNT answer: 24-bit counter, LSB first
pub fn decode_counter(data: &[u8]) -> Result<u32> {
    parser::ensure_exact_len(data, COUNTER_LEN)?;
    parser::le_u24_at(data, 0)
}

/// PWD_AUTH answer: 2-byte PACK
pub fn decode_pack(data: &[u8]) -> Result<u16> {
    parser::ensure_exact_len(data, PACK_LEN)?;
    parser::le_u16_at(data, 0)
}

/// Reassemble the UID from a READ of page 0.
///
/// Layout: page 0 = uid0 uid1 uid2 BCC0, page 1 = uid3..uid6,
/// page 2 byte 0 = BCC1.
pub fn decode_uid(data: &[u8]) -> Result<Uid> {
    parser::ensure_len(data, 9)?;
    let mut bytes = [0u8; 7];
    bytes[..3].copy_from_slice(parser::slice_at(data, 0, 3)?);
    bytes[3..].copy_from_slice(parser::slice_at(data, 4, 4)?);
    let uid = Uid::from_bytes(bytes);

    if parser::byte_at(data, 3)? != uid.bcc0() {
        return Err(Error::BccMismatch { level: 1 });
    }
    if parser::byte_at(data, 8)? != uid.bcc1() {
        return Err(Error::BccMismatch { level: 2 });
    }
    Ok(uid)
}
