// libpn532/libpn532/src/protocol/checksum.rs

//! Frame checksums (LCS and DCS).

/// Compute Length Checksum (LCS) for a PN532 frame
/// LCS = ~LEN + 1, so that LEN + LCS == 0 (mod 256)
pub fn lcs(len: u8) -> u8 {
    (!len).wrapping_add(1)
}

/// Compute Data Checksum (DCS) over TFI + payload bytes
/// DCS = 0x100 - (sum(data) & 0xff)
pub fn dcs(data: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(data))
}

/// Wrapping 8-bit sum of a byte slice.
pub fn sum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Running data checksum as accumulated by the frame writer.
///
/// The accumulator is seeded with preamble + start codes (0x00 + 0x00 + 0xFF)
/// and the emitted checksum is its bitwise complement. Because the seed is
/// 0xFF, `!(0xFF + s) == -s`, which is exactly [`dcs`].
#[derive(Debug, Clone, Copy)]
pub struct RunningChecksum(u8);

impl RunningChecksum {
    /// Accumulator seeded with preamble and start codes.
    pub fn new() -> Self {
        use crate::constants::{PN532_PREAMBLE, PN532_STARTCODE1, PN532_STARTCODE2};
        Self(
            PN532_PREAMBLE
                .wrapping_add(PN532_STARTCODE1)
                .wrapping_add(PN532_STARTCODE2),
        )
    }

    /// Add one TFI or payload byte.
    pub fn push(&mut self, byte: u8) {
        self.0 = self.0.wrapping_add(byte);
    }

    /// Checksum byte to put on the wire.
    pub fn finish(&self) -> u8 {
        !self.0
    }
}

impl Default for RunningChecksum {
    fn default() -> Self {
        Self::new()
    }
}
