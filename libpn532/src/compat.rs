// libpn532/libpn532/src/compat.rs

//! Flattened wrappers for callers that only want success or failure.
//!
//! Every wrapper logs the typed error at `warn` before discarding it.

use log::warn;

use crate::device::{Device, Initialized};
use crate::transport::{Clock, Transport};

/// Firmware version, or `0` on any failure.
pub fn firmware_version_or_zero<T: Transport, C: Clock, S>(dev: &mut Device<T, C, S>) -> u32 {
    match dev.get_firmware_version() {
        Ok(v) => v.as_u32(),
        Err(e) => {
            warn!("get firmware version failed: {}", e);
            0
        }
    }
}

/// `true` when SAM configuration succeeded.
pub fn sam_config_ok<T: Transport, C: Clock, S>(dev: &mut Device<T, C, S>) -> bool {
    match dev.configure_sam() {
        Ok(()) => true,
        Err(e) => {
            warn!("sam configuration failed: {}", e);
            false
        }
    }
}

/// `true` when the retry count was acknowledged.
pub fn set_retries_ok<T: Transport, C: Clock, S>(dev: &mut Device<T, C, S>, max_retries: u8) -> bool {
    match dev.set_passive_activation_retries(max_retries) {
        Ok(()) => true,
        Err(e) => {
            warn!("set passive activation retries failed: {}", e);
            false
        }
    }
}

/// Copy the UID of a single target into `uid` and its length into
/// `uid_len`. Both are left untouched on failure.
pub fn read_uid_into<T: Transport, C: Clock>(
    dev: &mut Device<T, C, Initialized>,
    baudrate: u8,
    uid: &mut [u8; 7],
    uid_len: &mut u8,
    timeout_ms: u16,
) -> bool {
    match dev.read_passive_target_id(baudrate, timeout_ms) {
        Ok(found) => {
            uid[..found.len()].copy_from_slice(found.as_bytes());
            *uid_len = found.len() as u8;
            true
        }
        Err(e) => {
            warn!("read passive target failed: {}", e);
            false
        }
    }
}
