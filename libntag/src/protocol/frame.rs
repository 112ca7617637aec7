// libntag/src/protocol/frame.rs

use crate::constants::SHORT_FRAME_BITS;
use crate::protocol::crc::{Crc16, append_crc};

/// A PCD -> PICC frame: bytes plus the exact number of valid bits.
///
/// Most frames are whole bytes; REQUEST and WAKEUP are 7-bit short
/// frames. The CRC trailer is never part of a `Frame`, it is attached by
/// the link when the frame is transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8>,
    bits: usize,
}

impl Frame {
    /// Whole-byte frame.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let bits = bytes.len() * 8;
        Self { bytes, bits }
    }

    /// 7-bit short frame (REQA / WUPA).
    pub fn short(code: u8) -> Self {
        Self {
            bytes: vec![code & 0x7F],
            bits: SHORT_FRAME_BITS,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    pub fn is_byte_aligned(&self) -> bool {
        self.bits % 8 == 0
    }

    pub fn opcode(&self) -> u8 {
        self.bytes.first().copied().unwrap_or_default()
    }

    /// The bytes as transmitted with a software CRC trailer.
    ///
    /// # Panics
    ///
    /// Panics if the frame is not byte aligned; there is no sub-byte CRC
    /// framing on this link.
    pub fn with_crc<C: Crc16 + ?Sized>(&self, crc: &C) -> Vec<u8> {
        assert!(
            self.is_byte_aligned(),
            "crc requested on a {}-bit frame",
            self.bits
        );
        append_crc(crc, &self.bytes)
    }
}
