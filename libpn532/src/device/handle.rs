// libpn532/libpn532/src/device/handle.rs

//! Type-state device handle and the high-level operations.

use std::convert::TryFrom;
use std::marker::PhantomData;

use log::{debug, info};

use crate::constants::{
    FIRMWARE_RESPONSE_LEN, PASSIVE_TARGET_RESPONSE_LEN, PN532_BUFFER_SIZE, SAM_RESPONSE_LEN,
};
use crate::device::config::DeviceConfig;
use crate::device::handshake::{HandshakeStage, Link};
use crate::protocol::commands::{DEFAULT_MAX_RETRY_ATR, DEFAULT_MAX_RETRY_PSL, SAM_MODE_NORMAL};
use crate::protocol::{Command, responses};
use crate::transport::{Clock, Transport};
use crate::types::{BaudRate, FirmwareVersion, PassiveTarget, Uid};
use crate::Result;

/// Type-state marker: SAM not configured yet
pub struct Uninitialized;
/// Type-state marker: SAM configured, targets may be listed
pub struct Initialized;

/// PN532 handle that enforces SAM configuration at compile time before
/// any target can be listed.
///
/// The handle owns its transport, its clock and the response buffer; one
/// request runs to completion before the next can start.
pub struct Device<T, C, State = Uninitialized> {
    link: Link<T, C>,
    buffer: [u8; PN532_BUFFER_SIZE],
    _state: PhantomData<State>,
}

impl<T: Transport, C: Clock> Device<T, C, Uninitialized> {
    /// Bind a transport and a clock using the default configuration.
    pub fn new(transport: T, clock: C) -> Self {
        Self::with_config(transport, clock, DeviceConfig::default())
    }

    /// Bind a transport and a clock with an explicit configuration.
    pub fn with_config(transport: T, clock: C, config: DeviceConfig) -> Self {
        Self {
            link: Link::new(transport, clock, config),
            buffer: [0u8; PN532_BUFFER_SIZE],
            _state: PhantomData,
        }
    }

    /// Configure the SAM for normal mode and return an initialized handle.
    pub fn initialize(mut self) -> Result<Device<T, C, Initialized>> {
        self.configure_sam()?;
        info!("pn532 initialized");
        Ok(Device {
            link: self.link,
            buffer: self.buffer,
            _state: PhantomData,
        })
    }
}

impl<T: Transport, C: Clock, S> Device<T, C, S> {
    /// Send a command and wait through the ACK handshake. No response
    /// payload is read.
    pub fn execute(&mut self, cmd: &Command, timeout_ms: u16) -> Result<()> {
        debug!("pn532 command {:#04x}", cmd.opcode());
        self.link.send_command_check_ack(&cmd.encode(), timeout_ms)
    }

    /// Read `len` bytes of response into the engine buffer.
    fn read_response(&mut self, len: usize) -> Result<&[u8]> {
        let buf = &mut self.buffer[..len];
        self.link.read_data(buf)?;
        Ok(&self.buffer[..len])
    }

    /// Query IC type and firmware version.
    pub fn get_firmware_version(&mut self) -> Result<FirmwareVersion> {
        let timeout = self.link.config().command_timeout_ms;
        self.execute(&Command::GetFirmwareVersion, timeout)?;
        let data = self.read_response(FIRMWARE_RESPONSE_LEN)?;
        let version = responses::decode_firmware_version(data)?;
        debug!("pn532 firmware {}", version);
        Ok(version)
    }

    /// Configure the SAM: normal mode, configured timeout, P70_IRQ as set.
    pub fn configure_sam(&mut self) -> Result<()> {
        let config = self.link.config();
        let cmd = Command::SamConfiguration {
            mode: SAM_MODE_NORMAL,
            timeout: config.sam_timeout,
            use_irq: config.sam_use_irq,
        };
        let timeout = config.command_timeout_ms;
        self.execute(&cmd, timeout)?;
        let data = self.read_response(SAM_RESPONSE_LEN)?;
        responses::decode_sam_configuration(data)
    }

    /// Set MxRtyPassiveActivation (0xFF retries forever). MxRtyATR and
    /// MxRtyPSL keep their defaults.
    pub fn set_passive_activation_retries(&mut self, max_retries: u8) -> Result<()> {
        let cmd = Command::SetMaxRetries {
            atr: DEFAULT_MAX_RETRY_ATR,
            psl: DEFAULT_MAX_RETRY_PSL,
            passive_activation: max_retries,
        };
        let timeout = self.link.config().command_timeout_ms;
        self.execute(&cmd, timeout)
    }

    /// Write a single chip register.
    pub fn write_register(&mut self, address: u16, value: u8) -> Result<()> {
        let cmd = Command::WriteRegister { address, value };
        let timeout = self.link.config().command_timeout_ms;
        self.execute(&cmd, timeout)
    }

    /// Active configuration.
    pub fn config(&self) -> &DeviceConfig {
        self.link.config()
    }

    /// Borrow the transport, e.g. to inspect a mock.
    pub fn transport(&self) -> &T {
        self.link.transport()
    }

    /// Mutably borrow the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        self.link.transport_mut()
    }

    /// Borrow the clock.
    pub fn clock(&self) -> &C {
        self.link.clock()
    }

    /// Give back the transport and clock.
    pub fn release(self) -> (T, C) {
        self.link.into_parts()
    }
}

impl<T: Transport, C: Clock> Device<T, C, Initialized> {
    /// Wait up to `timeout_ms` per handshake step for exactly one card and
    /// decode it.
    pub fn read_passive_target(
        &mut self,
        baud_rate: BaudRate,
        timeout_ms: u16,
    ) -> Result<PassiveTarget> {
        let cmd = Command::InListPassiveTarget {
            max_targets: 1,
            baud_rate,
        };
        self.execute(&cmd, timeout_ms)?;
        self.link
            .wait_ready(timeout_ms, HandshakeStage::WaitingTarget)?;
        let data = self.read_response(PASSIVE_TARGET_RESPONSE_LEN)?;
        let target = responses::decode_passive_target(data)?;
        debug!("pn532 target uid {}", target.uid.to_hex());
        Ok(target)
    }

    /// Read the UID of a single passive target. `baudrate` is the raw
    /// card baud rate code (0x00 = ISO14443A 106 kbps).
    pub fn read_passive_target_id(&mut self, baudrate: u8, timeout_ms: u16) -> Result<Uid> {
        let baud_rate = BaudRate::try_from(baudrate)?;
        self.read_passive_target(baud_rate, timeout_ms)
            .map(|target| target.uid)
    }
}
