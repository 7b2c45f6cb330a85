// fixtures.rs — wire captures and canned responses shared by the tests

use libpn532::test_support;

/// GetFirmwareVersion as written on the wire by the host.
pub const FIRMWARE_FRAME_HEX: &str = "0000ff02fed4022a00";

/// SAMConfiguration(normal, 1 s, IRQ) as written on the wire by the host.
pub const SAM_FRAME_HEX: &str = "0000ff05fbd4140114010200";

/// Firmware reply of a PN532 v1.6 board.
pub const FIRMWARE_RESPONSE_HEX: &str = "0000ff06fad532010607eb00";

pub fn hex_bytes(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

pub fn sample_uid() -> [u8; 4] {
    [0x04, 0xA2, 0x3B, 0x91]
}

pub fn sample_uid7() -> [u8; 7] {
    [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66]
}

pub fn firmware_response() -> Vec<u8> {
    hex_bytes(FIRMWARE_RESPONSE_HEX)
}

pub fn passive_response(uid: &[u8]) -> Vec<u8> {
    test_support::passive_target_response(1, uid)
}
