// libpn532/libpn532/src/protocol/commands/initiator.rs

//! Initiator-mode commands.

use crate::constants::PN532_COMMAND_INLISTPASSIVETARGET;
use crate::types::BaudRate;

/// InListPassiveTarget: maximum number of targets, then the card baud rate.
pub fn encode_in_list_passive_target(max_targets: u8, baud_rate: BaudRate) -> Vec<u8> {
    vec![PN532_COMMAND_INLISTPASSIVETARGET, max_targets, baud_rate as u8]
}
