// libntag/src/device/handle.rs

use crate::constants::ACK_WINDOW_BITS;
use crate::device::operations;
use crate::device::state::SessionState;
use crate::protocol::{AckCode, Command, Expect, Reply, Settings, Version, decode_reply};
use crate::transport::Link;
use crate::types::{Atqa, TagVariant, Uid};
use crate::{Error, Result};

/// Host-side session with one physical tag.
///
/// The session owns its link exclusively; every command is one transmit
/// followed by one blocking receive, so `&mut self` is all the locking
/// the protocol needs.
pub struct Device<L> {
    link: L,
    variant: TagVariant,
    uid: Option<Uid>,
    state: SessionState,
    settings: Settings,
}

impl<L: Link> Device<L> {
    /// Create a session with default settings (no protection, password
    /// 0xFFFFFFFF, PACK 0x0000).
    pub fn new(link: L, variant: TagVariant) -> Self {
        Self::with_settings(link, variant, Settings::default())
    }

    /// Create a session that expects the tag to be configured with
    /// `settings` (the PACK checked by `pwd_auth` comes from here).
    pub fn with_settings(link: L, variant: TagVariant, settings: Settings) -> Self {
        Self {
            link,
            variant,
            uid: None,
            state: SessionState::Idle,
            settings,
        }
    }

    pub fn variant(&self) -> TagVariant {
        self.variant
    }

    /// UID of the selected tag, once the select sequence completed.
    pub fn uid(&self) -> Option<&Uid> {
        self.uid.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    pub fn is_awake(&self) -> bool {
        self.state.is_awake()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the cached settings without touching the tag.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Tear the session down and hand the transport back.
    pub fn into_link(self) -> L {
        self.link
    }

    pub(crate) fn set_state(&mut self, next: SessionState) {
        if self.state != next {
            log::debug!("session {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    pub(crate) fn set_uid(&mut self, uid: Option<Uid>) {
        self.uid = uid;
    }

    /// Forget the tag: clear the UID and restore default settings.
    pub(crate) fn reset(&mut self) {
        self.uid = None;
        self.settings = Settings::default();
        self.set_state(SessionState::Disconnected);
    }

    fn mark_lost(&mut self) {
        log::warn!("link lost in state {:?}", self.state);
        self.set_state(SessionState::Disconnected);
    }

    /// Transmit one command and classify the tag's reply.
    ///
    /// Commands that need a selected tag fail with `NakDisconnected`
    /// before anything is transmitted when the session is not connected.
    /// Silence where an answer was due, and the driver-local timeout and
    /// disconnected codes, drop the session to `Disconnected`.
    pub fn execute(&mut self, cmd: &Command) -> Result<Reply> {
        if cmd.requires_connection() && !self.is_connected() {
            return Err(Error::Nak(AckCode::NakDisconnected));
        }

        let frame = cmd.encode();
        log::trace!(
            "tx {:#04x} ({} bits, crc={})",
            cmd.command_code(),
            frame.bits(),
            cmd.uses_crc()
        );
        #[cfg(feature = "diagnostics")]
        log::trace!("tx [{}]", crate::utils::format_frame(frame.bytes(), frame.bits()));

        let sent = if cmd.uses_crc() {
            self.link.transmit_bits_with_crc(frame.bytes(), frame.bits())
        } else {
            self.link.transmit_bits(frame.bytes(), frame.bits())
        };
        if sent == 0 {
            self.mark_lost();
            return Err(Error::Nak(AckCode::NakTimeout));
        }

        let expect = cmd.expected_reply();
        let reply = match expect {
            Expect::Raw(bits) => {
                let mut buf = vec![0u8; bits.div_ceil(8)];
                let received = self.link.receive_bits(&mut buf, bits);
                decode_reply(&buf, received)?
            }
            Expect::Data(len) => {
                let mut buf = vec![0u8; len];
                match self.link.receive_bits_with_crc(&mut buf, len * 8) {
                    Ok(received) => decode_reply(&buf, received)?,
                    Err(_) => Reply::Code(AckCode::NakCrc),
                }
            }
            Expect::Ack | Expect::Silence => {
                // Listen for a whole byte so noise cannot pass for a nibble.
                let mut buf = [0u8; ACK_WINDOW_BITS / 8];
                let received = self.link.receive_bits(&mut buf, ACK_WINDOW_BITS);
                decode_reply(&buf, received)?
            }
        };

        log::trace!("rx {:?}", reply);
        #[cfg(feature = "diagnostics")]
        if let Reply::Data(data) = &reply {
            log::trace!("rx [{}]", crate::utils::bytes_to_hex_spaced(data));
        }
        match &reply {
            Reply::Silent if expect != Expect::Silence => self.mark_lost(),
            Reply::Code(AckCode::NakTimeout | AckCode::NakDisconnected) => self.mark_lost(),
            _ => {}
        }
        Ok(reply)
    }

    // ---- connection ----

    /// REQUEST: wake an idle tag. See [`operations::request`].
    pub fn request(&mut self) -> Result<Atqa> {
        operations::request(self)
    }

    /// WAKEUP: wake an idle or halted tag. See [`operations::wakeup`].
    pub fn wakeup(&mut self) -> Result<Atqa> {
        operations::wakeup(self)
    }

    pub fn halt(&mut self) -> Result<()> {
        operations::halt(self)
    }

    /// Whether any tag answers REQUEST.
    pub fn detect(&mut self) -> bool {
        operations::detect(self)
    }

    /// Wake and select the tag with a known UID.
    pub fn connect(&mut self, uid: Uid) -> Result<()> {
        operations::connect(self, uid)
    }

    /// Wake, resolve the UID by anticollision and select the tag.
    pub fn auto_connect(&mut self) -> Result<Uid> {
        operations::auto_connect(self)
    }

    pub fn disconnect(&mut self) {
        operations::disconnect(self)
    }

    // ---- commands ----

    pub fn get_version(&mut self) -> Result<Version> {
        operations::get_version(self)
    }

    /// READ: 16 bytes starting at `page`.
    pub fn read(&mut self, page: u8) -> Result<[u8; 16]> {
        operations::read(self, page)
    }

    /// FAST_READ: pages `start..=stop`.
    ///
    /// # Panics
    ///
    /// Panics if `stop < start`.
    pub fn fast_read(&mut self, start: u8, stop: u8) -> Result<Vec<u8>> {
        operations::fast_read(self, start, stop)
    }

    pub fn read_uid(&mut self) -> Result<Uid> {
        operations::read_uid(self)
    }

    pub fn read_counter(&mut self, counter: u8) -> Result<u32> {
        operations::read_counter(self, counter)
    }

    pub fn read_signature(&mut self) -> Result<[u8; 32]> {
        operations::read_signature(self)
    }

    pub fn write(&mut self, page: u8, data: &[u8; 4]) -> Result<()> {
        operations::write(self, page, data)
    }

    /// Write consecutive pages starting at `start`, stopping at the first
    /// failure.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not a multiple of 4 or the range runs
    /// past page 0xFF.
    pub fn write_pages(&mut self, start: u8, data: &[u8]) -> Result<()> {
        operations::write_pages(self, start, data)
    }

    pub fn comp_write(&mut self, page: u8, data: &[u8; 4]) -> Result<()> {
        operations::comp_write(self, page, data)
    }

    pub fn pwd_auth(&mut self, password: u32) -> Result<()> {
        operations::pwd_auth(self, password)
    }

    pub fn read_settings(&mut self) -> Result<Settings> {
        operations::read_settings(self)
    }

    pub fn write_settings(&mut self, settings: &Settings) -> Result<()> {
        operations::write_settings(self, settings)
    }
}
