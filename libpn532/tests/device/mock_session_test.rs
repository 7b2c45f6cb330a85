#[path = "../common/mod.rs"]
mod common;

use libpn532::constants::{PN532_ACK, PN532_SPI_DATAREAD, PN532_SPI_DATAWRITE};
use libpn532::test_support;
use libpn532::{BaudRate, Error};

#[test]
fn firmware_version_exchange_on_the_wire() {
    common::init_logger();
    let mut dev = test_support::mock_device(&[common::firmware_response()]);
    let version = dev.get_firmware_version().unwrap();
    assert_eq!(version.as_u32(), 0x3201_0607);

    let mock = dev.transport();
    let mut expected_write = vec![PN532_SPI_DATAWRITE];
    expected_write.extend(common::hex_bytes(common::FIRMWARE_FRAME_HEX));
    assert_eq!(mock.windows[0], expected_write);
    assert_eq!(mock.windows[1], vec![PN532_SPI_DATAREAD]);
    assert_eq!(mock.windows[2], vec![PN532_SPI_DATAREAD]);
    assert!(mock.responses.is_empty());
}

#[test]
fn firmware_version_is_idempotent() {
    let mut dev = test_support::mock_device(&[
        common::firmware_response(),
        common::firmware_response(),
    ]);
    let first = dev.get_firmware_version().unwrap();
    let second = dev.get_firmware_version().unwrap();
    assert_eq!(first, second);
    assert_eq!(dev.transport().written_frames().len(), 2);
    assert_eq!(
        dev.transport().written_frames()[0],
        dev.transport().written_frames()[1]
    );
}

#[test]
fn read_uid_four_and_seven_bytes() {
    common::init_logger();
    let mut dev = test_support::initialized_mock_device(&[
        common::passive_response(&common::sample_uid()),
        common::passive_response(&common::sample_uid7()),
    ])
    .unwrap();

    let uid = dev.read_passive_target_id(0x00, 100).unwrap();
    assert_eq!(uid.as_bytes(), &common::sample_uid());

    let target = dev.read_passive_target(BaudRate::IsoTypeA, 100).unwrap();
    assert_eq!(target.uid.as_bytes(), &common::sample_uid7());
    assert_eq!(target.sel_res, 0x08);
}

#[test]
fn read_uid_no_card_and_two_cards() {
    let mut dev = test_support::initialized_mock_device(&[
        test_support::passive_target_response(0, &[]),
        test_support::passive_target_response(2, &common::sample_uid()),
    ])
    .unwrap();
    assert_eq!(dev.read_passive_target_id(0x00, 100), Err(Error::NoTagFound));
    assert_eq!(
        dev.read_passive_target_id(0x00, 100),
        Err(Error::MultipleTagsUnsupported { found: 2 })
    );
}

#[test]
fn retries_then_read() {
    let mut dev = test_support::initialized_mock_device(&[]).unwrap();
    dev.transport_mut().push_response(&PN532_ACK);
    test_support::seed_exchanges(
        dev.transport_mut(),
        &[common::passive_response(&common::sample_uid())],
    );

    dev.set_passive_activation_retries(0xFF).unwrap();
    let uid = dev.read_passive_target_id(0x00, 100).unwrap();
    assert_eq!(uid.to_hex(), "04a23b91");

    let frames = dev.transport().written_frames();
    assert_eq!(frames.len(), 3);
    assert_eq!(hex::encode(&frames[1]), "0000ff06fad43205ff01fff600");
}

#[test]
fn nack_is_reported_with_bytes() {
    let mut dev = test_support::mock_device(&[]);
    dev.transport_mut()
        .push_response(&common::hex_bytes("0000ffff0000"));
    match dev.get_firmware_version() {
        Err(Error::AckMismatch { received }) => {
            assert_eq!(received, [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00])
        }
        other => panic!("expected AckMismatch, got {:?}", other),
    }
}
