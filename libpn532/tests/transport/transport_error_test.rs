use libpn532::constants::PN532_ACK;
use libpn532::device::Device;
use libpn532::test_support;
use libpn532::transport::{MockClock, MockTransport};
use libpn532::Error;

#[test]
fn send_failure_mid_frame_releases_select() {
    let mut mock = MockTransport::new();
    mock.fail_send_at = Some(6);
    let mut dev = Device::new(&mut mock, MockClock::new());
    let err = dev.get_firmware_version().unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.is_transient());
    drop(dev);

    assert!(!mock.is_selected());
    assert_eq!(mock.select_log, vec![true, false]);
    // frame cut off after six bytes
    assert_eq!(mock.windows[0].len(), 6);
}

#[test]
fn receive_failure_during_ack_read() {
    let mut mock = MockTransport::new();
    mock.push_response(&PN532_ACK);
    mock.receive_failures = 1;
    let mut dev = Device::new(&mut mock, MockClock::new());
    assert!(matches!(
        dev.set_passive_activation_retries(0xFF),
        Err(Error::Transport(_))
    ));
    drop(dev);
    assert!(!mock.is_selected());
}

#[test]
fn request_can_be_reissued_after_transport_error() {
    let mut mock = MockTransport::new();
    mock.fail_send_at = Some(2);
    test_support::seed_exchanges(
        &mut mock,
        &[test_support::firmware_response([0x32, 0x01, 0x06, 0x07])],
    );
    let mut dev = Device::new(&mut mock, MockClock::new());
    assert!(dev.get_firmware_version().is_err());
    assert_eq!(dev.get_firmware_version().unwrap().as_u32(), 0x3201_0607);
}
