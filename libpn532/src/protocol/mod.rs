// libpn532/libpn532/src/protocol/mod.rs

//! PN532 wire protocol: frames, checksums, command encoders and response decoders.

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{dcs, lcs};
pub use commands::Command;
pub use frame::{Frame, is_ack};
pub use responses::*;
