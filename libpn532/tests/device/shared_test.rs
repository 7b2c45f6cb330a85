#[path = "../common/mod.rs"]
mod common;

use std::thread;

use libpn532::device::SharedDevice;
use libpn532::test_support;

#[test]
fn readers_on_two_threads_share_one_chip() {
    common::init_logger();
    let uid = common::sample_uid();
    let dev = test_support::initialized_mock_device(&[
        common::passive_response(&uid),
        common::passive_response(&uid),
    ])
    .unwrap();
    let shared = SharedDevice::new(dev);

    let workers: Vec<_> = (0..2)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || shared.with(|d| d.read_passive_target_id(0x00, 100)))
        })
        .collect();
    for w in workers {
        assert_eq!(w.join().unwrap().unwrap().as_bytes(), &uid);
    }
}
