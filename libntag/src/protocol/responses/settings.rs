// libntag/src/protocol/responses/settings.rs

//! Configuration pages codec.
//!
//! The configuration area is four pages starting at the variant's base
//! page. Byte layout (bit 7 is the MSB):
//!
//! | page | byte | content                                              |
//! |------|------|------------------------------------------------------|
//! | +0   | 0    | MIRROR: b7-6 mirror mode, b5-4 mirror byte, b2 STRG_MOD_EN |
//! | +0   | 1    | RFUI                                                 |
//! | +0   | 2    | MIRROR_PAGE                                          |
//! | +0   | 3    | AUTH0, first password protected page                 |
//! | +1   | 0    | ACCESS: b7 PROT, b6 CFGLCK, b4 NFC_CNT_EN, b3 NFC_CNT_PWD_PROT, b2-0 AUTHLIM |
//! | +1   | 1-3  | RFUI                                                 |
//! | +2   | 0-3  | PWD, little endian                                   |
//! | +3   | 0-1  | PACK, little endian                                  |
//! | +3   | 2-3  | RFUI                                                 |
//!
//! RFU bits are written as zero and ignored when decoding.

use crate::protocol::parser;
use crate::Result;
use derive_more::Display;

const MIRROR_CONF_SHIFT: u8 = 6;
const MIRROR_BYTE_SHIFT: u8 = 4;
const STRG_MOD_EN: u8 = 0x04;

const ACCESS_PROT: u8 = 0x80;
const ACCESS_CFGLCK: u8 = 0x40;
const ACCESS_NFC_CNT_EN: u8 = 0x10;
const ACCESS_NFC_CNT_PWD_PROT: u8 = 0x08;
const ACCESS_AUTHLIM_MASK: u8 = 0x07;

/// ASCII mirror of UID and/or NFC counter into user memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Mirror {
    #[default]
    #[display(fmt = "none")]
    None = 0,
    #[display(fmt = "uid")]
    Uid = 1,
    #[display(fmt = "nfc counter")]
    Counter = 2,
    #[display(fmt = "uid and nfc counter")]
    UidAndCounter = 3,
}

impl Mirror {
    fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::None,
            1 => Self::Uid,
            2 => Self::Counter,
            _ => Self::UidAndCounter,
        }
    }
}

/// Run-time settings stored in the configuration pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    pub mirror: Mirror,
    /// Byte position (0..=3) within `mirror_page`. 2 bits.
    pub mirror_byte: u8,
    pub strong_modulation: bool,
    pub mirror_page: u8,
    /// AUTH0: first page protected by the password.
    pub pwd_prot_base: u8,
    /// PROT: reads are protected as well as writes.
    pub pwd_lock: bool,
    /// CFGLCK: configuration permanently locked.
    pub cfg_lock: bool,
    pub nfc_counter_enabled: bool,
    pub nfc_counter_protected: bool,
    /// AUTHLIM (0..=7), 0 disables the limit. 3 bits.
    pub auth_limit: u8,
    pub password: u32,
    pub pwd_ack: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mirror: Mirror::None,
            mirror_byte: 0,
            strong_modulation: false,
            mirror_page: 0xFF,
            pwd_prot_base: 0xFF,
            pwd_lock: false,
            cfg_lock: false,
            nfc_counter_enabled: false,
            nfc_counter_protected: false,
            auth_limit: 0,
            password: 0xFFFF_FFFF,
            pwd_ack: 0x0000,
        }
    }
}

impl Settings {
    /// Encode into the 16 configuration bytes.
    ///
    /// # Panics
    ///
    /// Panics if `mirror_byte > 3` or `auth_limit > 7`; neither fits its
    /// bit field.
    pub fn pack(&self) -> [u8; 16] {
        assert!(self.mirror_byte <= 3, "mirror byte {} out of range", self.mirror_byte);
        assert!(self.auth_limit <= 7, "auth limit {} out of range", self.auth_limit);

        let mut out = [0u8; 16];
        let mut mirror = (self.mirror as u8) << MIRROR_CONF_SHIFT;
        mirror |= self.mirror_byte << MIRROR_BYTE_SHIFT;
        if self.strong_modulation {
            mirror |= STRG_MOD_EN;
        }
        out[0] = mirror;
        out[2] = self.mirror_page;
        out[3] = self.pwd_prot_base;

        let mut access = self.auth_limit;
        if self.pwd_lock {
            access |= ACCESS_PROT;
        }
        if self.cfg_lock {
            access |= ACCESS_CFGLCK;
        }
        if self.nfc_counter_enabled {
            access |= ACCESS_NFC_CNT_EN;
        }
        if self.nfc_counter_protected {
            access |= ACCESS_NFC_CNT_PWD_PROT;
        }
        out[4] = access;

        out[8..12].copy_from_slice(&self.password.to_le_bytes());
        out[12..14].copy_from_slice(&self.pwd_ack.to_le_bytes());
        out
    }

    /// The packed record split into its four pages.
    pub fn pages(&self) -> [[u8; 4]; 4] {
        let packed = self.pack();
        let mut pages = [[0u8; 4]; 4];
        for (page, chunk) in pages.iter_mut().zip(packed.chunks_exact(4)) {
            page.copy_from_slice(chunk);
        }
        pages
    }

    /// Decode the 16 configuration bytes.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        parser::ensure_exact_len(data, 16)?;
        let mirror = parser::byte_at(data, 0)?;
        let access = parser::byte_at(data, 4)?;

        Ok(Self {
            mirror: Mirror::from_bits(mirror >> MIRROR_CONF_SHIFT),
            mirror_byte: (mirror >> MIRROR_BYTE_SHIFT) & 0x03,
            strong_modulation: mirror & STRG_MOD_EN != 0,
            mirror_page: parser::byte_at(data, 2)?,
            pwd_prot_base: parser::byte_at(data, 3)?,
            pwd_lock: access & ACCESS_PROT != 0,
            cfg_lock: access & ACCESS_CFGLCK != 0,
            nfc_counter_enabled: access & ACCESS_NFC_CNT_EN != 0,
            nfc_counter_protected: access & ACCESS_NFC_CNT_PWD_PROT != 0,
            auth_limit: access & ACCESS_AUTHLIM_MASK,
            password: parser::le_u32_at(data, 8)?,
            pwd_ack: parser::le_u16_at(data, 12)?,
        })
    }
}
