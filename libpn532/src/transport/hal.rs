// libpn532/libpn532/src/transport/hal.rs

//! `embedded-hal` SPI transport.

#![cfg(feature = "embedded-hal")]

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiBus;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Transport over an `embedded-hal` SPI bus with a GPIO chip select and
/// the PN532 IRQ line. Both pins are active low.
///
/// The PN532 shifts bits LSB first. Buses that can only do MSB first
/// should keep `lsb_first` enabled so bytes are bit-reversed here.
pub struct HalTransport<SPI, CS, IRQ> {
    spi: SPI,
    cs: CS,
    irq: IRQ,
    lsb_first: bool,
}

impl<SPI, CS, IRQ> HalTransport<SPI, CS, IRQ>
where
    SPI: SpiBus,
    CS: OutputPin,
    IRQ: InputPin,
{
    /// Wrap a bus and pins; bytes are bit-reversed (MSB-first bus).
    pub fn new(spi: SPI, cs: CS, irq: IRQ) -> Self {
        Self {
            spi,
            cs,
            irq,
            lsb_first: true,
        }
    }

    /// Disable bit reversal when the bus itself is configured LSB first.
    pub fn with_native_lsb_first(mut self) -> Self {
        self.lsb_first = false;
        self
    }

    /// Give back the bus and pins.
    pub fn release(self) -> (SPI, CS, IRQ) {
        (self.spi, self.cs, self.irq)
    }

    fn bit_order(&self, byte: u8) -> u8 {
        if self.lsb_first { byte.reverse_bits() } else { byte }
    }
}

impl<SPI, CS, IRQ> Transport for HalTransport<SPI, CS, IRQ>
where
    SPI: SpiBus,
    CS: OutputPin,
    IRQ: InputPin,
{
    fn send_byte(&mut self, byte: u8) -> Result<()> {
        let wire = self.bit_order(byte);
        self.spi
            .write(&[wire])
            .and_then(|_| self.spi.flush())
            .map_err(|e| Error::Transport(format!("spi write: {:?}", e)))
    }

    fn receive_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.spi
            .read(&mut buf)
            .map_err(|e| Error::Transport(format!("spi read: {:?}", e)))?;
        Ok(self.bit_order(buf[0]))
    }

    fn set_select(&mut self, active: bool) {
        let res = if active {
            self.cs.set_low()
        } else {
            self.cs.set_high()
        };
        if let Err(e) = res {
            log::warn!("chip select write failed: {:?}", e);
        }
    }

    fn get_ready(&mut self) -> bool {
        self.irq.is_low().unwrap_or(false)
    }
}
