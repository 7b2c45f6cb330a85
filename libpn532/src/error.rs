// libpn532/libpn532/src/error.rs

//! Crate-wide error type.

use thiserror::Error;

use crate::device::HandshakeStage;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The device could not be assembled (missing transport or clock)
    #[error("initialization failed: {0}")]
    InitFailure(String),

    /// A ready wait ran past its budget
    #[error("chip not ready during {stage} after {timeout_ms} ms")]
    TransportTimeout {
        /// Handshake state whose wait expired
        stage: HandshakeStage,
        /// Budget that was exceeded
        timeout_ms: u16,
    },

    /// The six bytes read after a command were not the ACK frame
    #[error("ack mismatch: received {received:02x?}")]
    AckMismatch {
        /// Bytes actually read
        received: [u8; 6],
    },

    /// A header, status or length byte held an unexpected value
    #[error("response structure mismatch at offset {offset}: expected {expected:#04x}, got {actual:#04x}")]
    ResponseStructureMismatch {
        /// Offset into the bytes read
        offset: usize,
        /// Value required at that offset (the limit, for length bytes)
        expected: u8,
        /// Value found
        actual: u8,
    },

    /// The chip reported no target in the field
    #[error("no tag found")]
    NoTagFound,

    /// More than one target answered
    #[error("multiple tags unsupported: {found} targets reported")]
    MultipleTagsUnsupported {
        /// Target count reported by the chip
        found: u8,
    },

    /// An argument outside its domain, e.g. an unknown baud rate code
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A buffer of the wrong size: too long for a command payload, too
    /// short for a response, or not the size a frame header announces
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Size limit or requirement that was violated
        expected: usize,
        /// Size found
        actual: usize,
    },

    /// Byte-level bus failure
    #[error("transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Whether re-issuing the whole request may succeed. Structural and
    /// tag-count failures will repeat for the same chip and card.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::TransportTimeout { .. } | Error::AckMismatch { .. } | Error::Transport(_)
        )
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
