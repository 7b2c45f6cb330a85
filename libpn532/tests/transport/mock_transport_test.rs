use libpn532::transport::{Clock, MockClock, MockTransport, Transport};

#[test]
fn mock_transport_send_and_receive() {
    let mut m = MockTransport::new();
    m.push_response(&[0x01]);
    m.set_select(true);
    m.send_byte(0xAA).unwrap();
    assert_eq!(m.receive_byte().unwrap(), 0x01);
    m.set_select(false);
    assert_eq!(m.sent, vec![0xAA]);
    assert!(!m.is_selected());
}

#[test]
fn mock_transport_refuses_traffic_without_select() {
    let mut m = MockTransport::new();
    m.push_response(&[0x01]);
    assert!(m.send_byte(0xAA).is_err());
    assert!(m.receive_byte().is_err());
    assert!(m.sent.is_empty());
}

#[test]
fn dyn_transport_behind_box() {
    let mut t: Box<dyn Transport> = Box::new(MockTransport::new());
    t.set_select(true);
    t.send_byte(0x03).unwrap();
    t.set_select(false);
    assert!(t.get_ready());
}

#[test]
fn mock_clock_shared_reads() {
    let clock = MockClock::starting_at(10);
    clock.advance(5);
    assert_eq!(clock.now_ms(), 15);
}
