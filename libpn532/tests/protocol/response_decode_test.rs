#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::protocol::{
    decode_firmware_version, decode_passive_target, decode_sam_configuration,
};
use libpn532::test_support;

#[test]
fn firmware_from_capture() {
    let v = decode_firmware_version(&common::firmware_response()).unwrap();
    assert_eq!(v.as_u32(), 0x3201_0607);
    assert_eq!(v.ic(), 0x32);
    assert_eq!((v.major(), v.minor()), (1, 6));
}

#[test]
fn firmware_header_checked_byte_by_byte() {
    for offset in 0..6 {
        let mut data = common::firmware_response();
        data[offset] ^= 0x80;
        match decode_firmware_version(&data) {
            Err(Error::ResponseStructureMismatch { offset: o, .. }) => assert_eq!(o, offset),
            other => panic!("offset {}: expected mismatch, got {:?}", offset, other),
        }
    }
}

#[test]
fn sam_status() {
    assert!(decode_sam_configuration(&test_support::sam_response()).is_ok());
    let err = decode_sam_configuration(&common::hex_bytes("0000ff02fed51416")).unwrap_err();
    assert_eq!(
        err,
        Error::ResponseStructureMismatch {
            offset: 6,
            expected: 0x15,
            actual: 0x14
        }
    );
}

#[test]
fn passive_target_fields() {
    let target = decode_passive_target(&common::passive_response(&common::sample_uid())).unwrap();
    assert_eq!(target.target_number, 1);
    assert_eq!(target.sens_res, 0x0004);
    assert_eq!(target.sel_res, 0x08);
    assert_eq!(target.uid().as_bytes(), &common::sample_uid());
}

#[test]
fn passive_target_seven_byte_uid() {
    let data = common::passive_response(&common::sample_uid7());
    let target = decode_passive_target(&data).unwrap();
    assert_eq!(target.uid.len(), 7);
    assert_eq!(target.uid.to_hex(), "04112233445566");
}

#[test]
fn passive_target_counts() {
    assert_eq!(
        decode_passive_target(&test_support::passive_target_response(0, &[])),
        Err(Error::NoTagFound)
    );
    assert_eq!(
        decode_passive_target(&test_support::passive_target_response(2, &common::sample_uid())),
        Err(Error::MultipleTagsUnsupported { found: 2 })
    );
}

#[test]
fn passive_target_uid_length_out_of_range() {
    let mut data = common::passive_response(&common::sample_uid());
    data[12] = 8;
    assert!(matches!(
        decode_passive_target(&data),
        Err(Error::ResponseStructureMismatch { offset: 12, .. })
    ));
}
