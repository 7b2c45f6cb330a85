// libpn532/libpn532/src/device/builder.rs

//! Step-by-step construction of a [`Device`].

use crate::device::config::{DeviceConfig, ReadySource};
use crate::device::handle::{Device, Uninitialized};
use crate::transport::{Clock, Transport};
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder<T, C> {
    transport: Option<T>,
    clock: Option<C>,
    config: DeviceConfig,
}

impl<T: Transport, C: Clock> DeviceBuilder<T, C> {
    /// Empty builder with the default configuration.
    pub fn new() -> Self {
        Self {
            transport: None,
            clock: None,
            config: DeviceConfig::default(),
        }
    }

    /// Provide the byte transport (e.g. MockTransport or HalTransport)
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Provide the tick source used for delays and ready budgets
    pub fn with_clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the ready budget of the fixed commands.
    pub fn command_timeout_ms(mut self, timeout_ms: u16) -> Self {
        self.config.command_timeout_ms = timeout_ms;
        self
    }

    /// Choose how readiness is sensed.
    pub fn ready_source(mut self, source: ReadySource) -> Self {
        self.config.ready_source = source;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires both a transport and a clock; otherwise returns InitFailure.
    pub fn build(self) -> Result<Device<T, C, Uninitialized>> {
        let transport = self
            .transport
            .ok_or_else(|| Error::InitFailure("no transport provided".into()))?;
        let clock = self
            .clock
            .ok_or_else(|| Error::InitFailure("no clock provided".into()))?;
        Ok(Device::with_config(transport, clock, self.config))
    }
}

impl<T: Transport, C: Clock> Default for DeviceBuilder<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
