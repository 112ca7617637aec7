// libntag/src/prelude.rs

pub use crate::device::{Device, DeviceBuilder, SessionState};
pub use crate::protocol::{AckCode, Command, Crc16, CrcA, Mirror, Reply, Settings, Version};
pub use crate::transport::{CrcLink, Link, SoftwareCrc, Transport};
pub use crate::{Atqa, CascadeLevel, Error, Result, TagVariant, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
