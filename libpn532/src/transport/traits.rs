// libpn532/libpn532/src/transport/traits.rs

//! Capability traits.

use crate::Result;

/// Transport trait abstracts the byte-wise bus away from the frame engine.
///
/// Implementations know nothing about framing: the engine decides when to
/// select the chip, which marker byte to send and how many bytes to read.
pub trait Transport {
    /// Send one byte to the chip
    fn send_byte(&mut self, byte: u8) -> Result<()>;

    /// Receive one byte from the chip
    fn receive_byte(&mut self) -> Result<u8>;

    /// Assert (`true`) or release (`false`) the chip select line
    fn set_select(&mut self, active: bool);

    /// Sample the ready/IRQ signal; `true` means the chip has data for us
    fn get_ready(&mut self) -> bool;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send_byte(&mut self, byte: u8) -> Result<()> {
        (**self).send_byte(byte)
    }

    fn receive_byte(&mut self) -> Result<u8> {
        (**self).receive_byte()
    }

    fn set_select(&mut self, active: bool) {
        (**self).set_select(active)
    }

    fn get_ready(&mut self) -> bool {
        (**self).get_ready()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send_byte(&mut self, byte: u8) -> Result<()> {
        (**self).send_byte(byte)
    }

    fn receive_byte(&mut self) -> Result<u8> {
        (**self).receive_byte()
    }

    fn set_select(&mut self, active: bool) {
        (**self).set_select(active)
    }

    fn get_ready(&mut self) -> bool {
        (**self).get_ready()
    }
}

/// Monotonic millisecond tick source used for settle delays and ready-poll
/// budgets.
pub trait Clock {
    /// Current tick in milliseconds. May wrap.
    fn now_ms(&self) -> u64;

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Called between two ready polls. The default does nothing, which
    /// turns the wait into a tight spin.
    fn relax(&mut self) {}
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }

    fn relax(&mut self) {
        (**self).relax()
    }
}
