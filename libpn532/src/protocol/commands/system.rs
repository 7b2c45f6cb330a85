// libpn532/libpn532/src/protocol/commands/system.rs

//! System and configuration commands.

use crate::constants::{
    PN532_COMMAND_GETFIRMWAREVERSION, PN532_COMMAND_RFCONFIGURATION,
    PN532_COMMAND_SAMCONFIGURATION, PN532_COMMAND_WRITEREGISTER, RF_CONFIG_MAX_RETRIES,
};

/// GetFirmwareVersion carries no parameters.
pub fn encode_get_firmware_version() -> Vec<u8> {
    vec![PN532_COMMAND_GETFIRMWAREVERSION]
}

/// SAMConfiguration: mode, timeout (units of 50 ms), P70_IRQ usage.
pub fn encode_sam_configuration(mode: u8, timeout: u8, use_irq: bool) -> Vec<u8> {
    vec![PN532_COMMAND_SAMCONFIGURATION, mode, timeout, use_irq as u8]
}

/// RFConfiguration item 5: MxRtyATR, MxRtyPSL, MxRtyPassiveActivation.
pub fn encode_max_retries(atr: u8, psl: u8, passive_activation: u8) -> Vec<u8> {
    vec![
        PN532_COMMAND_RFCONFIGURATION,
        RF_CONFIG_MAX_RETRIES,
        atr,
        psl,
        passive_activation,
    ]
}

/// WriteRegister for a single register: address MSB first, then value.
pub fn encode_write_register(address: u16, value: u8) -> Vec<u8> {
    let [hi, lo] = address.to_be_bytes();
    vec![PN532_COMMAND_WRITEREGISTER, hi, lo, value]
}
