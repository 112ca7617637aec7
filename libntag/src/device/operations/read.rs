use crate::constants::*;
use crate::device::Device;
use crate::protocol::commands::fast_read_len;
use crate::protocol::{Command, Version, decode_counter, decode_uid, parser};
use crate::transport::Link;
use crate::types::Uid;
use crate::Result;

/// READ four pages starting at `page`.
pub fn read<L: Link>(device: &mut Device<L>, page: u8) -> Result<[u8; READ_LEN]> {
    let data = device.execute(&Command::Read { page })?.into_payload(READ_LEN)?;
    parser::array_at(&data, 0)
}

/// FAST_READ pages `start..=stop` in one exchange.
///
/// # Panics
///
/// Panics if `stop < start`.
pub fn fast_read<L: Link>(device: &mut Device<L>, start: u8, stop: u8) -> Result<Vec<u8>> {
    let len = fast_read_len(start, stop);
    device.execute(&Command::FastRead { start, stop })?.into_payload(len)
}

/// Reassemble the UID from the serial number pages.
pub fn read_uid<L: Link>(device: &mut Device<L>) -> Result<Uid> {
    decode_uid(&read(device, 0)?)
}

pub fn get_version<L: Link>(device: &mut Device<L>) -> Result<Version> {
    let data = device.execute(&Command::GetVersion)?.into_payload(VERSION_LEN)?;
    let version = Version::decode(&data)?;
    match version.variant() {
        Ok(found) if found != device.variant() => {
            log::warn!("session is {} but tag reports {}", device.variant(), found)
        }
        Ok(_) => {}
        Err(_) => log::debug!("unknown storage size {:#04x}", version.storage_size),
    }
    Ok(version)
}

/// READ_CNT. Only counter 2 (the NFC counter) exists on NTAG21x; other
/// addresses are answered with a NAK.
pub fn read_counter<L: Link>(device: &mut Device<L>, counter: u8) -> Result<u32> {
    let data = device
        .execute(&Command::ReadCounter { counter })?
        .into_payload(COUNTER_LEN)?;
    decode_counter(&data)
}

/// READ_SIG: the 32-byte originality signature.
pub fn read_signature<L: Link>(device: &mut Device<L>) -> Result<[u8; SIGNATURE_LEN]> {
    let data = device
        .execute(&Command::ReadSignature)?
        .into_payload(SIGNATURE_LEN)?;
    parser::array_at(&data, 0)
}
