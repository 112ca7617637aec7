use crate::constants::*;
use crate::device::{Device, SessionState};
use crate::protocol::{AckCode, Command, Reply, decode_atqa, decode_sak, decode_uid_cln};
use crate::transport::Link;
use crate::types::{Atqa, CascadeLevel, Uid};
use crate::{Error, Result};

fn wake<L: Link>(device: &mut Device<L>, cmd: Command) -> Result<Atqa> {
    let reply = device.execute(&cmd)?;
    let atqa = decode_atqa(&reply.into_payload(2)?)?;
    if !atqa.is_ntag() {
        log::debug!("ATQA {:#06x} is not the NTAG value", atqa.as_u16());
    }
    // A new selection starts; whatever UID was known no longer applies.
    device.set_uid(None);
    device.set_state(SessionState::Requested);
    Ok(atqa)
}

/// REQUEST: idle tags answer with their ATQA.
pub fn request<L: Link>(device: &mut Device<L>) -> Result<Atqa> {
    wake(device, Command::Request)
}

/// WAKEUP: idle and halted tags answer with their ATQA.
pub fn wakeup<L: Link>(device: &mut Device<L>) -> Result<Atqa> {
    wake(device, Command::Wakeup)
}

/// HALT the selected tag. The tag acknowledges by staying silent; a
/// 4-bit answer is a NAK.
pub fn halt<L: Link>(device: &mut Device<L>) -> Result<()> {
    match device.execute(&Command::Halt)? {
        Reply::Silent => {
            device.set_state(SessionState::Halted);
            Ok(())
        }
        Reply::Code(AckCode::Ack) => Err(Error::Nak(AckCode::NakArgument)),
        Reply::Code(code) => Err(Error::Nak(code)),
        Reply::Data(_) => Err(Error::Nak(AckCode::NakCrc)),
    }
}

/// Whether any tag in the field answers REQUEST.
pub fn detect<L: Link>(device: &mut Device<L>) -> bool {
    match request(device) {
        Ok(_) => true,
        Err(e) => {
            log::debug!("no tag detected: {}", e);
            false
        }
    }
}

/// ANTICOLLISION at `level`: returns the four UID CLn bytes.
pub fn anticollision<L: Link>(device: &mut Device<L>, level: CascadeLevel) -> Result<[u8; 4]> {
    let reply = device.execute(&Command::Anticollision { level })?;
    if device.link_mut().detect_collision() {
        return Err(Error::Collision {
            level: level.number(),
        });
    }
    decode_uid_cln(&reply.into_payload(5)?, level)
}

/// SELECT at `level` and check the cascade bit of the SAK: set after
/// level 1 (the UID is incomplete), clear after level 2.
pub fn select_level<L: Link>(
    device: &mut Device<L>,
    level: CascadeLevel,
    uid_part: [u8; 4],
) -> Result<u8> {
    let reply = device.execute(&Command::Select { level, uid_part })?;
    let sak = decode_sak(&reply.into_payload(1)?)?;
    let cascade = sak & SAK_CASCADE_BIT != 0;
    if cascade != (level == CascadeLevel::One) {
        return Err(Error::UnexpectedSak {
            level: level.number(),
            sak,
        });
    }
    Ok(sak)
}

fn finish_select<L: Link>(device: &mut Device<L>, uid: Uid) {
    log::debug!("selected tag {}", uid.to_hex());
    device.set_uid(Some(uid));
    device.set_state(SessionState::Connected);
}

/// Wake (idle or halted) and select the tag with a known UID.
pub fn connect<L: Link>(device: &mut Device<L>, uid: Uid) -> Result<()> {
    wakeup(device)?;
    select_level(device, CascadeLevel::One, uid.cascade_part(CascadeLevel::One))?;
    select_level(device, CascadeLevel::Two, uid.cascade_part(CascadeLevel::Two))?;
    finish_select(device, uid);
    Ok(())
}

/// REQUEST, then resolve and select the UID one cascade level at a time.
pub fn auto_connect<L: Link>(device: &mut Device<L>) -> Result<Uid> {
    request(device)?;

    let cl1 = anticollision(device, CascadeLevel::One)?;
    // A 7-byte UID always opens with the cascade tag at level 1.
    if cl1[0] != CASCADE_TAG {
        return Err(Error::MissingCascadeTag(cl1[0]));
    }
    select_level(device, CascadeLevel::One, cl1)?;
    let cl2 = anticollision(device, CascadeLevel::Two)?;
    select_level(device, CascadeLevel::Two, cl2)?;

    // CL1 starts with the cascade tag; the UID proper follows it.
    let uid = Uid::from_bytes([cl1[1], cl1[2], cl1[3], cl2[0], cl2[1], cl2[2], cl2[3]]);
    finish_select(device, uid);
    Ok(uid)
}

/// Halt a selected tag (best effort), forget its UID and settings.
pub fn disconnect<L: Link>(device: &mut Device<L>) {
    if device.is_connected() {
        if let Err(e) = halt(device) {
            log::debug!("halt during disconnect failed: {}", e);
        }
    }
    device.reset();
}
