// libpn532/libpn532/src/device/handshake.rs

//! Byte-level exchange with the chip: frame writes, data reads, ready
//! polling and ACK checking.
//!
//! A command exchange walks
//! `Sent -> WaitingReady1 -> AckReceived -> WaitingReady2 -> ResponseReady`;
//! any wait that exceeds its budget ends the whole exchange.

use derive_more::Display;
use log::{debug, trace, warn};

use crate::constants::{
    PN532_ACK, PN532_HOST_TO_PN532, PN532_MAX_PAYLOAD_LEN, PN532_POSTAMBLE, PN532_PREAMBLE,
    PN532_SPI_DATAREAD, PN532_SPI_DATAWRITE, PN532_SPI_READY, PN532_SPI_STATREAD,
    PN532_STARTCODE1, PN532_STARTCODE2,
};
use crate::device::config::{DeviceConfig, ReadySource};
use crate::protocol::checksum::{RunningChecksum, lcs};
use crate::protocol::frame::is_ack;
use crate::transport::{Clock, Transport};
use crate::utils::{bytes_to_hex_spaced, has_expired};
use crate::{Error, Result};

/// Handshake state in which a ready wait expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum HandshakeStage {
    /// Waiting for the chip to hand over its ACK
    #[display(fmt = "waiting for ack")]
    WaitingReady1,
    /// Waiting for the chip to hand over the response
    #[display(fmt = "waiting for response")]
    WaitingReady2,
    /// Waiting for a card to enter the field
    #[display(fmt = "waiting for target")]
    WaitingTarget,
}

/// Owns the capabilities and performs the framed byte exchanges.
pub struct Link<T, C> {
    transport: T,
    clock: C,
    config: DeviceConfig,
}

impl<T: Transport, C: Clock> Link<T, C> {
    /// Wrap the capabilities with the given configuration.
    pub fn new(transport: T, clock: C, config: DeviceConfig) -> Self {
        Self {
            transport,
            clock,
            config,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Borrow the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Give back the transport and clock.
    pub fn into_parts(self) -> (T, C) {
        (self.transport, self.clock)
    }

    /// Run `f` with the chip selected. Select is released on every path,
    /// including a failed byte in the middle of `f`.
    fn selected<R>(&mut self, f: impl FnOnce(&mut T) -> Result<R>) -> Result<R> {
        self.transport.set_select(true);
        self.clock.delay_ms(self.config.settle_delay_ms);
        let res = f(&mut self.transport);
        self.transport.set_select(false);
        res
    }

    /// Write one command frame (opcode + parameters) behind the data-write marker.
    pub fn write_command(&mut self, payload: &[u8]) -> Result<()> {
        if payload.len() > PN532_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }
        debug!("pn532 <- {}", bytes_to_hex_spaced(payload));

        let len = payload.len() as u8 + 1;
        let res = self.selected(|t| {
            let mut checksum = RunningChecksum::new();
            t.send_byte(PN532_SPI_DATAWRITE)?;
            t.send_byte(PN532_PREAMBLE)?;
            t.send_byte(PN532_STARTCODE1)?;
            t.send_byte(PN532_STARTCODE2)?;
            t.send_byte(len)?;
            t.send_byte(lcs(len))?;
            t.send_byte(PN532_HOST_TO_PN532)?;
            checksum.push(PN532_HOST_TO_PN532);
            for &b in payload {
                t.send_byte(b)?;
                checksum.push(b);
            }
            t.send_byte(checksum.finish())?;
            t.send_byte(PN532_POSTAMBLE)
        });
        if let Err(e) = &res {
            warn!("pn532 frame aborted: {}", e);
        }
        res
    }

    /// Read `buf.len()` bytes behind the data-read marker.
    pub fn read_data(&mut self, buf: &mut [u8]) -> Result<()> {
        self.selected(|t| {
            t.send_byte(PN532_SPI_DATAREAD)?;
            for slot in buf.iter_mut() {
                *slot = t.receive_byte()?;
            }
            Ok(())
        })?;
        trace!("pn532 -> {}", bytes_to_hex_spaced(buf));
        Ok(())
    }

    /// Sample readiness once, from the configured source.
    pub fn is_ready(&mut self) -> Result<bool> {
        match self.config.ready_source {
            ReadySource::Irq => Ok(self.transport.get_ready()),
            ReadySource::StatusRead => {
                let status = self.selected(|t| {
                    t.send_byte(PN532_SPI_STATREAD)?;
                    t.receive_byte()
                })?;
                Ok(status == PN532_SPI_READY)
            }
        }
    }

    /// Poll readiness until the chip reports ready or at least `timeout_ms`
    /// of real time have passed since the first poll. Calls `Clock::relax`
    /// between polls.
    pub fn wait_ready(&mut self, timeout_ms: u16, stage: HandshakeStage) -> Result<()> {
        let start = self.clock.now_ms();
        loop {
            if self.is_ready()? {
                return Ok(());
            }
            if has_expired(start, self.clock.now_ms(), timeout_ms) {
                warn!("pn532 not ready ({}) within {} ms", stage, timeout_ms);
                return Err(Error::TransportTimeout { stage, timeout_ms });
            }
            self.clock.relax();
        }
    }

    /// Read the six ACK bytes and compare them with the ACK frame.
    pub fn read_ack(&mut self) -> Result<()> {
        let mut received = [0u8; 6];
        self.read_data(&mut received)?;
        if !is_ack(&received) {
            warn!(
                "pn532 ack mismatch: {} (expected {})",
                bytes_to_hex_spaced(&received),
                bytes_to_hex_spaced(&PN532_ACK)
            );
            return Err(Error::AckMismatch { received });
        }
        Ok(())
    }

    /// Write a command and walk the handshake up to `ResponseReady`.
    pub fn send_command_check_ack(&mut self, payload: &[u8], timeout_ms: u16) -> Result<()> {
        self.write_command(payload)?;
        self.wait_ready(timeout_ms, HandshakeStage::WaitingReady1)?;
        self.read_ack()?;
        self.wait_ready(timeout_ms, HandshakeStage::WaitingReady2)
    }
}
