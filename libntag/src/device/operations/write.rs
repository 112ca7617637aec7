use crate::constants::PAGE_SIZE;
use crate::device::Device;
use crate::protocol::Command;
use crate::protocol::commands::write::comp_write_payload;
use crate::transport::Link;
use crate::Result;

/// WRITE one page.
pub fn write<L: Link>(device: &mut Device<L>, page: u8, data: &[u8; 4]) -> Result<()> {
    device
        .execute(&Command::Write { page, data: *data })?
        .into_ack()
}

/// WRITE `data.len() / 4` consecutive pages from `start`. Stops at the
/// first page that is not acknowledged; earlier pages stay written.
///
/// # Panics
///
/// Panics if `data.len()` is not a multiple of 4 or the last page would
/// lie past 0xFF.
pub fn write_pages<L: Link>(device: &mut Device<L>, start: u8, data: &[u8]) -> Result<()> {
    assert!(
        data.len() % PAGE_SIZE == 0,
        "page write of {} bytes is not a whole number of pages",
        data.len()
    );
    let pages = data.len() / PAGE_SIZE;
    assert!(
        usize::from(start) + pages <= 0x100,
        "{pages} pages from {start:#04x} run past the last page"
    );

    for (page, chunk) in (start..=u8::MAX).zip(data.chunks_exact(PAGE_SIZE)) {
        let mut buf = [0u8; PAGE_SIZE];
        buf.copy_from_slice(chunk);
        write(device, page, &buf).inspect_err(|e| {
            log::debug!("page write stopped at {page:#04x}: {e}");
        })?;
    }
    Ok(())
}

/// COMPATIBILITY_WRITE: opcode and page first, and the 16-byte data
/// frame only once the tag has ACKed that.
pub fn comp_write<L: Link>(device: &mut Device<L>, page: u8, data: &[u8; 4]) -> Result<()> {
    device.execute(&Command::CompWrite { page })?.into_ack()?;
    device
        .execute(&Command::CompWriteData {
            data: comp_write_payload(data),
        })?
        .into_ack()
}
