// libntag/src/protocol/crc.rs

use ::crc::{CRC_16_ISO_IEC_14443_3_A, Crc};
use thiserror::Error;

use crate::constants::CRC_LEN;

/// A 16-bit CRC function over whole bytes.
///
/// The engine never assumes a particular polynomial; real tags need
/// [`CrcA`], tests may plug in anything deterministic. Any
/// `Fn(&[u8]) -> u16` is a `Crc16`.
pub trait Crc16 {
    fn compute(&self, data: &[u8]) -> u16;
}

impl<F> Crc16 for F
where
    F: Fn(&[u8]) -> u16,
{
    fn compute(&self, data: &[u8]) -> u16 {
        self(data)
    }
}

const CRC_A: Crc<u16> = Crc::<u16>::new(&CRC_16_ISO_IEC_14443_3_A);

/// ISO/IEC 14443-3 CRC_A: reflected polynomial 0x8408, preset 0x6363.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrcA;

impl CrcA {
    pub const PRESET: u16 = 0x6363;
}

impl Crc16 for CrcA {
    fn compute(&self, data: &[u8]) -> u16 {
        CRC_A.checksum(data)
    }
}

/// Trailing CRC did not match the payload.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("crc mismatch")]
pub struct CrcMismatch;

/// Append the CRC of `payload` (LSB first) and return the protected frame.
pub fn append_crc<C: Crc16 + ?Sized>(crc: &C, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + CRC_LEN);
    out.extend_from_slice(payload);
    out.extend_from_slice(&crc.compute(payload).to_le_bytes());
    out
}

/// Verify the trailing two bytes against the CRC of everything before
/// them and return the payload without the trailer.
pub fn verify_crc<'a, C: Crc16 + ?Sized>(
    crc: &C,
    frame: &'a [u8],
) -> std::result::Result<&'a [u8], CrcMismatch> {
    if frame.len() < CRC_LEN {
        return Err(CrcMismatch);
    }
    let (payload, trailer) = frame.split_at(frame.len() - CRC_LEN);
    let expected = crc.compute(payload).to_le_bytes();
    if trailer == expected {
        Ok(payload)
    } else {
        Err(CrcMismatch)
    }
}
