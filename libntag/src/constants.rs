// libntag/src/constants.rs
//! Wire-level constants for the NTAG21x command set

/// REQA: short frame, 7 bits
pub const CMD_REQUEST: u8 = 0x26;
/// WUPA: short frame, 7 bits. Also reaches tags in the HALT state.
pub const CMD_WAKEUP: u8 = 0x52;
pub const CMD_HALT: u8 = 0x50;
pub const CMD_GET_VERSION: u8 = 0x60;
pub const CMD_READ: u8 = 0x30;
pub const CMD_FAST_READ: u8 = 0x3A;
pub const CMD_WRITE: u8 = 0xA2;
pub const CMD_COMP_WRITE: u8 = 0xA0;
pub const CMD_READ_CNT: u8 = 0x39;
pub const CMD_PWD_AUTH: u8 = 0x1B;
pub const CMD_READ_SIG: u8 = 0x3C;
pub const CMD_SELECT_CL1: u8 = 0x93;
pub const CMD_SELECT_CL2: u8 = 0x95;

/// Number of valid bits in a short frame (REQA / WUPA)
pub const SHORT_FRAME_BITS: usize = 7;

/// 4-bit ACK/NAK reply length
pub const ACK_BITS: usize = 4;

/// Receive window for ACK/NAK-only replies: one byte, so a full-byte
/// answer is told apart from a 4-bit code by its length
pub const ACK_WINDOW_BITS: usize = 8;

/// CRC_A trailer length in bytes
pub const CRC_LEN: usize = 2;

/// ACK / NAK nibbles as sent by the tag
pub const ACK_NIBBLE: u8 = 0x0A;
pub const NAK_ARG_NIBBLE: u8 = 0x00;
pub const NAK_CRC_NIBBLE: u8 = 0x01;
pub const NAK_AUTH_OVF_NIBBLE: u8 = 0x04;
pub const NAK_WRITE_NIBBLE: u8 = 0x05;
/// Driver-local: no bits were received
pub const NAK_TIMEOUT_NIBBLE: u8 = 0x0F;
/// Driver-local: the session is not connected
pub const NAK_DISCONNECTED_NIBBLE: u8 = 0x0C;

/// NVB for a full SELECT (7 bytes incl. SEL and NVB)
pub const NVB_SELECT: u8 = 0x70;
/// NVB for ANTICOLLISION (SEL and NVB only)
pub const NVB_ANTICOLLISION: u8 = 0x20;
/// Cascade tag prefixed to the first three UID bytes at level 1
pub const CASCADE_TAG: u8 = 0x88;
/// SAK bit signalling that the UID is not complete yet
pub const SAK_CASCADE_BIT: u8 = 0x04;

/// ATQA reported by every NTAG21x
pub const NTAG_ATQA: u16 = 0x0044;

/// Page size in bytes
pub const PAGE_SIZE: usize = 4;
/// READ always returns four pages
pub const READ_LEN: usize = 16;
pub const VERSION_LEN: usize = 8;
pub const SIGNATURE_LEN: usize = 32;
pub const COUNTER_LEN: usize = 3;
pub const PACK_LEN: usize = 2;
/// Configuration area spans four pages
pub const CONFIG_PAGES: u8 = 4;

/// Counter index of the NFC counter
pub const NFC_COUNTER: u8 = 0x02;

/// Configuration base page per variant
pub const NTAG213_CONFIG_PAGE: u8 = 0x29;
pub const NTAG215_CONFIG_PAGE: u8 = 0x83;
pub const NTAG216_CONFIG_PAGE: u8 = 0xE3;

/// GET_VERSION storage size bytes per variant
pub const NTAG213_STORAGE_SIZE: u8 = 0x0F;
pub const NTAG215_STORAGE_SIZE: u8 = 0x11;
pub const NTAG216_STORAGE_SIZE: u8 = 0x13;
