// libpn532/libpn532/src/device/mod.rs

//! Command engine: type-state device handle, handshake and configuration.

pub mod builder;
pub mod config;
pub mod handle;
pub mod handshake;
pub mod shared;

pub use builder::DeviceBuilder;
pub use config::{DeviceConfig, ReadySource};
pub use handle::{Device, Initialized, Uninitialized};
pub use handshake::HandshakeStage;
pub use shared::SharedDevice;
