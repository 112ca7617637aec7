use crate::constants::PACK_LEN;
use crate::device::{Device, SessionState};
use crate::protocol::{Command, decode_pack};
use crate::transport::Link;
use crate::{Error, Result};

/// PWD_AUTH with a 32-bit password, sent little-endian.
///
/// The tag answers a correct password with its PACK. The session only
/// moves to `Authenticated` when that PACK equals the one in the
/// session's settings; a matching ACK with a different PACK is
/// `Error::AuthMismatch`.
pub fn pwd_auth<L: Link>(device: &mut Device<L>, password: u32) -> Result<()> {
    let data = device
        .execute(&Command::PwdAuth {
            password: password.to_le_bytes(),
        })?
        .into_payload(PACK_LEN)?;
    let actual = decode_pack(&data)?;
    let expected = device.settings().pwd_ack;
    if actual != expected {
        log::warn!("PACK mismatch: expected {expected:#06x}, got {actual:#06x}");
        return Err(Error::AuthMismatch { expected, actual });
    }

    let mut settings = *device.settings();
    settings.password = password;
    device.set_settings(settings);
    device.set_state(SessionState::Authenticated);
    Ok(())
}
