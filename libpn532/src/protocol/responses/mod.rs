// libpn532/libpn532/src/protocol/responses/mod.rs

//! Decoders for the responses read after a completed handshake.

pub mod firmware;
pub mod passive;
pub mod sam;

pub use firmware::decode_firmware_version;
pub use passive::decode_passive_target;
pub use sam::decode_sam_configuration;
