use libpn532::protocol::Command;
use libpn532::protocol::commands::{
    DEFAULT_MAX_RETRY_ATR, DEFAULT_MAX_RETRY_PSL, encode_in_list_passive_target,
    encode_max_retries,
};
use libpn532::types::BaudRate;

#[test]
fn retries_payload() {
    let payload = encode_max_retries(DEFAULT_MAX_RETRY_ATR, DEFAULT_MAX_RETRY_PSL, 0xFF);
    assert_eq!(payload, vec![0x32, 0x05, 0xFF, 0x01, 0xFF]);
}

#[test]
fn passive_target_payload_per_baud_rate() {
    for (code, rate) in [
        (0x00, BaudRate::IsoTypeA),
        (0x01, BaudRate::FeliCa212),
        (0x02, BaudRate::FeliCa424),
        (0x03, BaudRate::IsoTypeB),
        (0x04, BaudRate::Jewel),
    ] {
        assert_eq!(encode_in_list_passive_target(1, rate), vec![0x4A, 0x01, code]);
    }
}

#[test]
fn write_register_is_msb_first() {
    let cmd = Command::WriteRegister {
        address: 0x6106,
        value: 0x10,
    };
    assert_eq!(cmd.opcode(), 0x08);
    assert_eq!(cmd.encode(), vec![0x08, 0x61, 0x06, 0x10]);
}

#[test]
fn sam_without_irq() {
    let cmd = Command::SamConfiguration {
        mode: 0x01,
        timeout: 0x00,
        use_irq: false,
    };
    assert_eq!(cmd.encode(), vec![0x14, 0x01, 0x00, 0x00]);
}
