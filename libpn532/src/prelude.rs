// libpn532/libpn532/src/prelude.rs

//! Commonly used types, re-exported for glob import.

pub use crate::device::{
    Device, DeviceBuilder, DeviceConfig, HandshakeStage, ReadySource, SharedDevice,
};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::{Command, Frame};
pub use crate::transport::{Clock, SystemClock, Transport};
pub use crate::{BaudRate, Error, FirmwareVersion, PassiveTarget, Result, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
