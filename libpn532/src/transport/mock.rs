// libpn532/libpn532/src/transport/mock.rs

//! Scripted transport and manual clock for tests.

use std::cell::Cell;
use std::collections::VecDeque;

use crate::constants::{PN532_SPI_DATAWRITE, PN532_SPI_READY, PN532_SPI_STATREAD};
use crate::transport::traits::{Clock, Transport};
use crate::{Error, Result};

/// Mock transport for unit tests. It records every byte sent, groups them
/// per chip-select window and returns queued bytes on receive.
#[derive(Debug)]
pub struct MockTransport {
    /// Every byte sent, in order
    pub sent: Vec<u8>,
    /// Bytes sent inside each completed select window
    pub windows: Vec<Vec<u8>>,
    /// Every set_select call, in order
    pub select_log: Vec<bool>,
    /// Bytes handed out by receive_byte
    pub responses: VecDeque<u8>,
    /// Scripted answers for get_ready; `ready_default` once exhausted
    pub ready_script: VecDeque<bool>,
    /// get_ready answer once the script is empty
    pub ready_default: bool,
    /// Number of get_ready calls seen
    pub ready_polls: usize,
    /// Scripted status bytes returned to a status read
    pub status_script: VecDeque<u8>,
    /// Testing hook: fail the send with this zero-based index
    pub fail_send_at: Option<usize>,
    /// Testing hook: number of receive_byte calls that fail before recovering
    pub receive_failures: usize,
    selected: bool,
    current: Vec<u8>,
}

impl MockTransport {
    /// Empty mock; the ready line reports ready.
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            windows: Vec::new(),
            select_log: Vec::new(),
            responses: VecDeque::new(),
            ready_script: VecDeque::new(),
            ready_default: true,
            ready_polls: 0,
            status_script: VecDeque::new(),
            fail_send_at: None,
            receive_failures: 0,
            selected: false,
            current: Vec::new(),
        }
    }

    /// Queue bytes for subsequent receive_byte calls.
    pub fn push_response(&mut self, bytes: &[u8]) {
        self.responses.extend(bytes.iter().copied());
    }

    /// Queue get_ready answers, consumed before falling back to the default.
    pub fn push_ready(&mut self, answers: &[bool]) {
        self.ready_script.extend(answers.iter().copied());
    }

    /// Make the ready line report `ready` once the script runs out.
    pub fn set_ready_default(&mut self, ready: bool) {
        self.ready_default = ready;
    }

    /// Whether chip select is currently asserted.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Frames written with the data-write marker, marker stripped.
    pub fn written_frames(&self) -> Vec<Vec<u8>> {
        self.windows
            .iter()
            .filter(|w| w.first() == Some(&PN532_SPI_DATAWRITE))
            .map(|w| w[1..].to_vec())
            .collect()
    }

    fn in_status_read(&self) -> bool {
        self.current.first() == Some(&PN532_SPI_STATREAD)
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn send_byte(&mut self, byte: u8) -> Result<()> {
        if !self.selected {
            return Err(Error::Transport("byte sent without chip select".into()));
        }
        if self.fail_send_at == Some(self.sent.len()) {
            self.fail_send_at = None;
            return Err(Error::Transport("simulated send failure".into()));
        }
        self.sent.push(byte);
        self.current.push(byte);
        Ok(())
    }

    fn receive_byte(&mut self) -> Result<u8> {
        if !self.selected {
            return Err(Error::Transport("byte read without chip select".into()));
        }
        if self.receive_failures > 0 {
            self.receive_failures -= 1;
            return Err(Error::Transport("simulated receive failure".into()));
        }
        if self.in_status_read() {
            let fallback = if self.ready_default { PN532_SPI_READY } else { 0x00 };
            return Ok(self.status_script.pop_front().unwrap_or(fallback));
        }
        self.responses
            .pop_front()
            .ok_or_else(|| Error::Transport("no response bytes queued".into()))
    }

    fn set_select(&mut self, active: bool) {
        self.select_log.push(active);
        if self.selected && !active {
            self.windows.push(std::mem::take(&mut self.current));
        }
        if active {
            self.current.clear();
        }
        self.selected = active;
    }

    fn get_ready(&mut self) -> bool {
        self.ready_polls += 1;
        self.ready_script.pop_front().unwrap_or(self.ready_default)
    }
}

/// Manual clock for tests. Time only moves through `delay_ms`, `relax`
/// (by `relax_step_ms`) or `advance`.
#[derive(Debug)]
pub struct MockClock {
    now: Cell<u64>,
    /// Time added by each relax call
    pub relax_step_ms: u64,
    /// Number of relax calls seen
    pub relax_calls: usize,
}

impl MockClock {
    /// Clock at tick 0 that advances 1 ms per relax.
    pub fn new() -> Self {
        Self {
            now: Cell::new(0),
            relax_step_ms: 1,
            relax_calls: 0,
        }
    }

    /// Start the clock at an arbitrary tick (e.g. near wrap-around).
    pub fn starting_at(now: u64) -> Self {
        let clock = Self::new();
        clock.now.set(now);
        clock
    }

    /// Move time forward by `ms`.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.advance(u64::from(ms));
    }

    fn relax(&mut self) {
        self.relax_calls += 1;
        self.advance(self.relax_step_ms);
    }
}
