// libpn532/libpn532/src/device/config.rs

//! Engine configuration

/// Ready-poll budget for fixed commands (firmware, SAM, RF config) in ms
pub const COMMAND_TIMEOUT_MS: u16 = 100;

/// Delay after asserting chip select before the first byte (ms)
pub const SETTLE_DELAY_MS: u32 = 1;

/// SAMConfiguration timeout in units of 50 ms (0x14 = 1 s)
pub const SAM_TIMEOUT: u8 = 0x14;

/// How the engine learns that the chip has data for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadySource {
    /// Sample the transport's ready/IRQ line
    #[default]
    Irq,
    /// Issue an SPI status read and compare against the ready status byte
    StatusRead,
}

/// Runtime configuration of a [`Device`](crate::device::Device).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceConfig {
    /// Ready budget (ms) for firmware, SAM, retry and register commands
    pub command_timeout_ms: u16,
    /// Delay (ms) after asserting chip select
    pub settle_delay_ms: u32,
    /// Where readiness is read from
    pub ready_source: ReadySource,
    /// SAMConfiguration timeout in units of 50 ms
    pub sam_timeout: u8,
    /// Let the chip drive P70_IRQ
    pub sam_use_irq: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            command_timeout_ms: COMMAND_TIMEOUT_MS,
            settle_delay_ms: SETTLE_DELAY_MS,
            ready_source: ReadySource::Irq,
            sam_timeout: SAM_TIMEOUT,
            sam_use_irq: true,
        }
    }
}
