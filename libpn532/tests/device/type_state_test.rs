#[path = "../common/mod.rs"]
mod common;

use libpn532::device::{Device, DeviceBuilder, DeviceConfig};
use libpn532::test_support;
use libpn532::transport::{MockClock, MockTransport};

#[test]
fn initialize_transitions_after_sam() {
    common::init_logger();
    let mut mock = MockTransport::new();
    test_support::seed_exchanges(&mut mock, &[test_support::sam_response()]);

    let device = DeviceBuilder::new()
        .with_transport(mock)
        .with_clock(MockClock::new())
        .build()
        .unwrap();
    let initialized = device.initialize().unwrap();
    let (mock, _) = initialized.release();

    assert_eq!(
        mock.written_frames(),
        vec![common::hex_bytes(common::SAM_FRAME_HEX)]
    );
}

#[test]
fn failed_initialize_consumes_the_handle() {
    // Only an ACK is available; the SAM response read runs dry.
    let mut mock = MockTransport::new();
    mock.push_response(&libpn532::constants::PN532_ACK);
    let res = Device::new(mock, MockClock::new()).initialize();
    assert!(matches!(res, Err(libpn532::Error::Transport(_))));
}

#[test]
fn sam_without_irq_from_config() {
    let mut mock = MockTransport::new();
    test_support::seed_exchanges(&mut mock, &[test_support::sam_response()]);
    let config = DeviceConfig {
        sam_use_irq: false,
        ..DeviceConfig::default()
    };
    let dev = Device::with_config(&mut mock, MockClock::new(), config)
        .initialize()
        .unwrap();
    drop(dev);
    let frame = libpn532::protocol::Frame::decode(&mock.written_frames()[0]).unwrap();
    assert_eq!(frame.payload, vec![0x14, 0x01, 0x14, 0x00]);
}
