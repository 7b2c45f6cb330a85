// libpn532/libpn532/src/protocol/frame.rs

//! Normal information frame and ACK detection.

use crate::constants::{
    PN532_ACK, PN532_HOST_TO_PN532, PN532_MAX_PAYLOAD_LEN, PN532_POSTAMBLE, PN532_PREAMBLE,
    PN532_STARTCODE1, PN532_STARTCODE2,
};
use crate::protocol::checksum::{RunningChecksum, dcs, lcs};
use crate::{Error, Result};

/// PN532 normal information frame.
/// Format: [Preamble] [Start(2)] [Len] [LCS] [TFI] [Payload(n)] [DCS] [Postamble]
/// Start: 0x00 0xFF, Len counts TFI + payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Frame identifier (direction)
    pub tfi: u8,
    /// Command or response code followed by its data
    pub payload: Vec<u8>,
}

/// Bytes surrounding the payload: preamble, start codes, LEN, LCS, TFI, DCS, postamble.
pub const FRAME_OVERHEAD: usize = 8;

impl Frame {
    /// Encode a host->chip command payload (opcode + parameters).
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        Self::encode_with_tfi(PN532_HOST_TO_PN532, payload)
    }

    /// Encode a payload behind an explicit TFI. Chip->host frames are
    /// built this way in tests.
    pub fn encode_with_tfi(tfi: u8, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > PN532_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = payload.len() as u8 + 1;
        let mut checksum = RunningChecksum::new();
        let mut out = Vec::with_capacity(FRAME_OVERHEAD + payload.len());
        out.extend_from_slice(&[PN532_PREAMBLE, PN532_STARTCODE1, PN532_STARTCODE2]);
        out.push(len);
        out.push(lcs(len));
        out.push(tfi);
        checksum.push(tfi);
        for &b in payload {
            out.push(b);
            checksum.push(b);
        }
        out.push(checksum.finish());
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// Decode and validate a complete information frame.
    pub fn decode(frame: &[u8]) -> Result<Frame> {
        if frame.len() < FRAME_OVERHEAD {
            return Err(Error::InvalidLength {
                expected: FRAME_OVERHEAD,
                actual: frame.len(),
            });
        }

        let start = [PN532_PREAMBLE, PN532_STARTCODE1, PN532_STARTCODE2];
        for (offset, (&expected, &actual)) in start.iter().zip(frame).enumerate() {
            if expected != actual {
                return Err(Error::ResponseStructureMismatch {
                    offset,
                    expected,
                    actual,
                });
            }
        }

        let len = frame[3];
        if frame[4] != lcs(len) {
            return Err(Error::ResponseStructureMismatch {
                offset: 4,
                expected: lcs(len),
                actual: frame[4],
            });
        }

        let required_len = FRAME_OVERHEAD - 1 + len as usize;
        if len == 0 || frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let body = &frame[5..5 + len as usize];
        let dcs_offset = 5 + len as usize;
        if frame[dcs_offset] != dcs(body) {
            return Err(Error::ResponseStructureMismatch {
                offset: dcs_offset,
                expected: dcs(body),
                actual: frame[dcs_offset],
            });
        }

        if frame[dcs_offset + 1] != PN532_POSTAMBLE {
            return Err(Error::ResponseStructureMismatch {
                offset: dcs_offset + 1,
                expected: PN532_POSTAMBLE,
                actual: frame[dcs_offset + 1],
            });
        }

        Ok(Frame {
            tfi: body[0],
            payload: body[1..].to_vec(),
        })
    }
}

/// True only when all six bytes equal the ACK frame.
pub fn is_ack(bytes: &[u8]) -> bool {
    bytes == PN532_ACK
}
