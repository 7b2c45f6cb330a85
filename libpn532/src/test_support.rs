//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup and canned chip
//! responses so tests across the crate and tests/ directory can reuse
//! the same bytes.
#![allow(dead_code)]

use crate::constants::{
    PN532_ACK, PN532_FIRMWARE_RESPONSE_HEADER, PN532_PN532_TO_HOST,
    PN532_RESPONSE_INLISTPASSIVETARGET,
};
use crate::device::{Device, Initialized, Uninitialized};
use crate::protocol::checksum::{dcs, lcs};
use crate::transport::{MockClock, MockTransport};
use crate::Result;

/// GetFirmwareVersion response as read from the chip: header, the four
/// version bytes at offsets 6..=9, then DCS and postamble.
#[doc(hidden)]
pub fn firmware_response(version: [u8; 4]) -> Vec<u8> {
    let mut data = PN532_FIRMWARE_RESPONSE_HEADER.to_vec();
    data.extend_from_slice(&version);
    let mut body = vec![PN532_PN532_TO_HOST];
    body.extend_from_slice(&version);
    data.push(dcs(&body));
    data.push(0x00);
    data
}

/// SAMConfiguration response with the success code at offset 6.
#[doc(hidden)]
pub fn sam_response() -> Vec<u8> {
    vec![0x00, 0x00, 0xFF, 0x02, 0xFE, 0xD5, 0x15, 0x16]
}

/// InListPassiveTarget response for an ISO14443A card (SENS_RES 0x0004,
/// SEL_RES 0x08), zero padded to the 20 bytes the engine reads.
#[doc(hidden)]
pub fn passive_target_response(count: u8, uid: &[u8]) -> Vec<u8> {
    let len = 8 + uid.len() as u8;
    let mut data = vec![0x00, 0x00, 0xFF, len, lcs(len), PN532_PN532_TO_HOST];
    data.push(PN532_RESPONSE_INLISTPASSIVETARGET);
    data.push(count);
    data.push(0x01);
    data.extend_from_slice(&[0x00, 0x04]);
    data.push(0x08);
    data.push(uid.len() as u8);
    data.extend_from_slice(uid);
    data.resize(20, 0x00);
    data
}

/// Queue an ACK followed by each response onto a MockTransport, one
/// exchange per entry.
#[doc(hidden)]
pub fn seed_exchanges(mock: &mut MockTransport, responses: &[Vec<u8>]) {
    for resp in responses {
        mock.push_response(&PN532_ACK);
        mock.push_response(resp);
    }
}

/// Create a Device backed by a MockTransport pre-seeded with the given
/// exchanges.
#[doc(hidden)]
pub fn mock_device(responses: &[Vec<u8>]) -> Device<MockTransport, MockClock, Uninitialized> {
    let mut mock = MockTransport::new();
    seed_exchanges(&mut mock, responses);
    Device::new(mock, MockClock::new())
}

/// Convenience: create and initialize a Device<Initialized>. The SAM
/// exchange is queued ahead of the caller's responses.
#[doc(hidden)]
pub fn initialized_mock_device(
    responses: &[Vec<u8>],
) -> Result<Device<MockTransport, MockClock, Initialized>> {
    let mut all = vec![sam_response()];
    all.extend_from_slice(responses);
    mock_device(&all).initialize()
}
