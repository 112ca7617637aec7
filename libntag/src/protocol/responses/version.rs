// libntag/src/protocol/responses/version.rs

use crate::constants::VERSION_LEN;
use crate::protocol::parser;
use crate::types::TagVariant;
use crate::Result;

/// GET_VERSION answer, 8 bytes in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version {
    /// Always 0x00
    pub fixed_header: u8,
    /// 0x04 = NXP Semiconductors
    pub vendor_id: u8,
    /// 0x04 = NTAG
    pub product_type: u8,
    /// 0x02 = 50 pF
    pub product_subtype: u8,
    pub major_version: u8,
    pub minor_version: u8,
    /// Bits 7-1: n where the user memory is between 2^n and 2^(n+1)
    /// bytes; bit 0 set when it is strictly more than 2^n.
    pub storage_size: u8,
    /// 0x03 = ISO/IEC 14443-3
    pub protocol_type: u8,
}

impl Version {
    pub fn from_bytes(bytes: [u8; VERSION_LEN]) -> Self {
        Self {
            fixed_header: bytes[0],
            vendor_id: bytes[1],
            product_type: bytes[2],
            product_subtype: bytes[3],
            major_version: bytes[4],
            minor_version: bytes[5],
            storage_size: bytes[6],
            protocol_type: bytes[7],
        }
    }

    pub fn to_bytes(&self) -> [u8; VERSION_LEN] {
        [
            self.fixed_header,
            self.vendor_id,
            self.product_type,
            self.product_subtype,
            self.major_version,
            self.minor_version,
            self.storage_size,
            self.protocol_type,
        ]
    }

    /// Decode the 8-byte GET_VERSION payload.
    pub fn decode(data: &[u8]) -> Result<Self> {
        parser::ensure_exact_len(data, VERSION_LEN)?;
        Ok(Self::from_bytes(parser::array_at(data, 0)?))
    }

    /// Variant implied by the storage size byte.
    pub fn variant(&self) -> Result<TagVariant> {
        TagVariant::from_storage_size(self.storage_size)
    }
}
