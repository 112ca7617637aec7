use crate::constants::CONFIG_PAGES;
use crate::device::Device;
use crate::device::operations::{fast_read, write_pages};
use crate::protocol::Settings;
use crate::transport::Link;
use crate::Result;

fn config_range<L: Link>(device: &Device<L>) -> (u8, u8) {
    let base = device.variant().config_base_page();
    (base, base + CONFIG_PAGES - 1)
}

/// Read the four configuration pages of the session's variant.
///
/// The returned record is what the tag reported, so the password and
/// PACK read back as zeros. The cached settings take the rest of the
/// record and keep the session's password and PACK.
pub fn read_settings<L: Link>(device: &mut Device<L>) -> Result<Settings> {
    let (start, stop) = config_range(device);
    let data = fast_read(device, start, stop)?;
    let read = Settings::unpack(&data)?;

    let cached = Settings {
        password: device.settings().password,
        pwd_ack: device.settings().pwd_ack,
        ..read
    };
    device.set_settings(cached);
    Ok(read)
}

/// Write all four configuration pages, stopping at the first page the
/// tag does not acknowledge. On success the record becomes the session's
/// settings.
///
/// # Panics
///
/// Panics if `settings` has a field outside its bit range.
pub fn write_settings<L: Link>(device: &mut Device<L>, settings: &Settings) -> Result<()> {
    let (start, _) = config_range(device);
    let packed = settings.pack();
    write_pages(device, start, &packed)?;
    device.set_settings(*settings);
    log::debug!("settings written from page {start:#04x}");
    Ok(())
}
