// libntag/src/device/builder.rs

use crate::device::handle::Device;
use crate::protocol::{Crc16, Settings};
use crate::transport::{Link, SoftwareCrc, Transport};
use crate::types::TagVariant;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder<L> {
    link: Option<L>,
    variant: Option<TagVariant>,
    settings: Option<Settings>,
}

impl<L> Default for DeviceBuilder<L> {
    fn default() -> Self {
        Self {
            link: None,
            variant: None,
            settings: None,
        }
    }
}

impl<L: Link> DeviceBuilder<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created link, either a front end with hardware
    /// CRC or a transport wrapped in `SoftwareCrc`.
    pub fn with_link(mut self, link: L) -> Self {
        self.link = Some(link);
        self
    }

    pub fn variant(mut self, variant: TagVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Settings the tag is expected to carry. Defaults to
    /// `Settings::default()`.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Consume the builder and return an idle session.
    pub fn build(self) -> Result<Device<L>> {
        let link = self
            .link
            .ok_or_else(|| Error::Configuration("no link provided".into()))?;
        let variant = self
            .variant
            .ok_or_else(|| Error::Configuration("no tag variant provided".into()))?;
        Ok(Device::with_settings(
            link,
            variant,
            self.settings.unwrap_or_default(),
        ))
    }
}

impl<T: Transport, C: Crc16> DeviceBuilder<SoftwareCrc<T, C>> {
    /// Compose `crc` around a raw transport that has no CRC offload.
    pub fn with_software_crc(self, raw: T, crc: C) -> Self {
        self.with_link(SoftwareCrc::new(raw, crc))
    }
}
