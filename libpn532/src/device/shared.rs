// libpn532/libpn532/src/device/shared.rs

//! Thread-shared device handle.

use std::sync::{Arc, Mutex};

use log::warn;

use crate::device::handle::{Device, Initialized};
use crate::Result;

/// Cloneable handle for callers that share one reader between threads.
/// Requests are serialized by the lock, so a second caller blocks until
/// the running exchange completes.
pub struct SharedDevice<T, C, S = Initialized> {
    inner: Arc<Mutex<Device<T, C, S>>>,
}

impl<T, C, S> SharedDevice<T, C, S> {
    /// Move a device behind the lock.
    pub fn new(device: Device<T, C, S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(device)),
        }
    }

    /// Run `f` with exclusive access to the device.
    ///
    /// A lock poisoned by a panicking caller is recovered. Each request
    /// releases chip select and rewrites the response buffer, so no partial
    /// exchange outlives the panic.
    pub fn with<R>(&self, f: impl FnOnce(&mut Device<T, C, S>) -> Result<R>) -> Result<R> {
        let mut guard = self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("pn532 device lock poisoned by a panicked caller, recovering");
            self.inner.clear_poison();
            poisoned.into_inner()
        });
        f(&mut *guard)
    }

    /// Recover the device once every other clone has been dropped.
    pub fn try_unwrap(self) -> std::result::Result<Device<T, C, S>, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex
                .into_inner()
                .map_err(|poisoned| Self::new(poisoned.into_inner())),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl<T, C, S> Clone for SharedDevice<T, C, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
