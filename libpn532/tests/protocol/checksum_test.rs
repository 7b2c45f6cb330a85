#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::checksum::{RunningChecksum, dcs, lcs, sum};
use proptest::prelude::*;

#[test]
fn checksums_of_captured_frames() {
    for captured in [common::FIRMWARE_FRAME_HEX, common::SAM_FRAME_HEX] {
        let wire = common::hex_bytes(captured);
        let len = wire[3];
        assert_eq!(wire[4], lcs(len));
        let body = &wire[5..5 + len as usize];
        assert_eq!(wire[5 + len as usize], dcs(body));
    }
}

proptest! {
    #[test]
    fn body_plus_dcs_sums_to_zero(body in prop::collection::vec(any::<u8>(), 1..64)) {
        let mut with_dcs = body.clone();
        with_dcs.push(dcs(&body));
        prop_assert_eq!(sum(&with_dcs), 0);
    }

    #[test]
    fn running_checksum_is_order_independent(mut body in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut forward = RunningChecksum::new();
        body.iter().for_each(|&b| forward.push(b));
        body.reverse();
        let mut backward = RunningChecksum::default();
        body.iter().for_each(|&b| backward.push(b));
        prop_assert_eq!(forward.finish(), backward.finish());
    }
}
