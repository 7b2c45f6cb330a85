#[path = "../common/mod.rs"]
mod common;

use libpn532::constants::{PN532_ACK, PN532_PN532_TO_HOST};
use libpn532::protocol::{Command, Frame, is_ack};

#[test]
fn firmware_request_matches_capture() {
    let wire = Frame::encode(&Command::GetFirmwareVersion.encode()).unwrap();
    assert_eq!(hex::encode(&wire), common::FIRMWARE_FRAME_HEX);
}

#[test]
fn sam_request_matches_capture() {
    let cmd = Command::SamConfiguration {
        mode: 0x01,
        timeout: 0x14,
        use_irq: true,
    };
    let wire = Frame::encode(&cmd.encode()).unwrap();
    assert_eq!(wire, common::hex_bytes(common::SAM_FRAME_HEX));
}

#[test]
fn chip_frame_decode_round_trip() {
    let wire = Frame::encode_with_tfi(PN532_PN532_TO_HOST, &[0x03, 0x32, 0x01, 0x06, 0x07]).unwrap();
    assert_eq!(hex::encode(&wire), "0000ff06fad50332010607e800");
    let frame = Frame::decode(&wire).unwrap();
    assert_eq!(frame.tfi, PN532_PN532_TO_HOST);
    assert_eq!(frame.payload, vec![0x03, 0x32, 0x01, 0x06, 0x07]);
}

#[test]
fn truncated_frame_is_rejected() {
    let wire = common::hex_bytes(common::SAM_FRAME_HEX);
    assert!(Frame::decode(&wire[..wire.len() - 1]).is_err());
}

#[test]
fn ack_capture() {
    assert!(is_ack(&common::hex_bytes("0000ff00ff00")));
    assert_eq!(PN532_ACK.to_vec(), common::hex_bytes("0000ff00ff00"));
    // NACK
    assert!(!is_ack(&common::hex_bytes("0000ffff0000")));
}
