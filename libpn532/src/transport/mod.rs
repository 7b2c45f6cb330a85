// libpn532/libpn532/src/transport/mod.rs

//! Bus and clock capabilities consumed by the engine.

#[cfg(feature = "embedded-hal")]
pub mod hal;
pub mod mock;
pub mod system;
pub mod traits;

#[cfg(feature = "embedded-hal")]
pub use hal::HalTransport;
pub use mock::{MockClock, MockTransport};
pub use system::SystemClock;
pub use traits::{Clock, Transport};
