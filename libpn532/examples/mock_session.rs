//! Walk a full reader session against the mock transport: firmware query,
//! SAM configuration, retry setup and one card read.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p libpn532 --example mock_session

use anyhow::{Context, Result};
use libpn532::constants::PN532_ACK;
use libpn532::prelude::*;
use libpn532::test_support;
use libpn532::transport::{MockClock, MockTransport};

fn main() -> Result<()> {
    env_logger::init();

    let mut mock = MockTransport::new();
    test_support::seed_exchanges(
        &mut mock,
        &[
            test_support::firmware_response([0x32, 0x01, 0x06, 0x07]),
            test_support::sam_response(),
        ],
    );
    mock.push_response(&PN532_ACK);
    test_support::seed_exchanges(
        &mut mock,
        &[test_support::passive_target_response(
            1,
            &[0x04, 0xA2, 0x3B, 0x91],
        )],
    );

    let mut device = DeviceBuilder::new()
        .with_transport(mock)
        .with_clock(MockClock::new())
        .build()?;

    let version = device
        .get_firmware_version()
        .context("reader did not answer GetFirmwareVersion")?;
    println!("{}", version);

    let mut device = device.initialize().context("SAM configuration failed")?;
    device.set_passive_activation_retries(0xFF)?;

    match device.read_passive_target(BaudRate::IsoTypeA, 1000) {
        Ok(target) => println!(
            "card: uid={} sens_res={:04x} sel_res={:02x}",
            target.uid.to_hex(),
            target.sens_res,
            target.sel_res
        ),
        Err(Error::NoTagFound) => println!("no card in the field"),
        Err(e) => return Err(e.into()),
    }

    let (mock, _) = device.release();
    for frame in mock.written_frames() {
        println!("host -> {}", bytes_to_hex_spaced(&frame));
    }
    Ok(())
}
