// libntag/src/types.rs

use crate::Error;
use crate::constants::*;
use derive_more::Display;

/// UID - Newtype Pattern (7 bytes, double size UID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; 7]);

impl Uid {
    pub fn from_bytes(bytes: [u8; 7]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 7] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }

    /// BCC0 = CT ^ uid0 ^ uid1 ^ uid2
    pub fn bcc0(&self) -> u8 {
        CASCADE_TAG ^ self.0[0] ^ self.0[1] ^ self.0[2]
    }

    /// BCC1 = uid3 ^ uid4 ^ uid5 ^ uid6
    pub fn bcc1(&self) -> u8 {
        self.0[3] ^ self.0[4] ^ self.0[5] ^ self.0[6]
    }

    /// The four UID CLn bytes sent at the given cascade level.
    pub fn cascade_part(&self, level: CascadeLevel) -> [u8; 4] {
        match level {
            CascadeLevel::One => [CASCADE_TAG, self.0[0], self.0[1], self.0[2]],
            CascadeLevel::Two => [self.0[3], self.0[4], self.0[5], self.0[6]],
        }
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 7 {
            return Err(Error::InvalidLength {
                expected: 7,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 7];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// ATQA as returned to REQUEST / WAKEUP (LSB first on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atqa(u16);

impl Atqa {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// NTAG21x always answers 0x0044
    pub fn is_ntag(&self) -> bool {
        self.0 == NTAG_ATQA
    }
}

/// Anticollision / select cascade level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CascadeLevel {
    #[display(fmt = "1")]
    One,
    #[display(fmt = "2")]
    Two,
}

impl CascadeLevel {
    pub fn select_code(&self) -> u8 {
        match self {
            Self::One => CMD_SELECT_CL1,
            Self::Two => CMD_SELECT_CL2,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// Tag variant (storage size) of the NTAG21x family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagVariant {
    #[display(fmt = "NTAG213")]
    Ntag213,
    #[display(fmt = "NTAG215")]
    Ntag215,
    #[display(fmt = "NTAG216")]
    Ntag216,
}

impl TagVariant {
    /// First of the four configuration pages.
    pub fn config_base_page(&self) -> u8 {
        match self {
            Self::Ntag213 => NTAG213_CONFIG_PAGE,
            Self::Ntag215 => NTAG215_CONFIG_PAGE,
            Self::Ntag216 => NTAG216_CONFIG_PAGE,
        }
    }

    /// Storage size byte reported by GET_VERSION.
    pub fn storage_size(&self) -> u8 {
        match self {
            Self::Ntag213 => NTAG213_STORAGE_SIZE,
            Self::Ntag215 => NTAG215_STORAGE_SIZE,
            Self::Ntag216 => NTAG216_STORAGE_SIZE,
        }
    }

    pub fn from_storage_size(size: u8) -> crate::Result<Self> {
        match size {
            NTAG213_STORAGE_SIZE => Ok(Self::Ntag213),
            NTAG215_STORAGE_SIZE => Ok(Self::Ntag215),
            NTAG216_STORAGE_SIZE => Ok(Self::Ntag216),
            other => Err(Error::UnsupportedVariant(other as u16)),
        }
    }
}

/// Accepts the model number: 213, 215 or 216.
impl TryFrom<u16> for TagVariant {
    type Error = Error;

    fn try_from(model: u16) -> Result<Self, Self::Error> {
        match model {
            213 => Ok(Self::Ntag213),
            215 => Ok(Self::Ntag215),
            216 => Ok(Self::Ntag216),
            other => Err(Error::UnsupportedVariant(other)),
        }
    }
}
