// libpn532/libpn532/src/lib.rs

//! libpn532
//!
//! Host-side driver for the NXP PN532 contactless reader: frame encoding,
//! the ready/ACK handshake and decoders for the firmware, SAM and passive
//! target responses, generic over a byte transport and a clock.
#![warn(missing_docs)]

pub mod compat;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
