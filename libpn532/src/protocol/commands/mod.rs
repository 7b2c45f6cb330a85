// libpn532/libpn532/src/protocol/commands/mod.rs

//! Command payloads (opcode followed by parameters).

pub mod initiator;
pub mod system;

pub use initiator::encode_in_list_passive_target;
pub use system::{
    encode_get_firmware_version, encode_max_retries, encode_sam_configuration,
    encode_write_register,
};

use crate::types::BaudRate;

/// SAMConfiguration mode byte for normal operation (no SAM attached).
pub const SAM_MODE_NORMAL: u8 = 0x01;

/// Default MxRtyATR used alongside the passive activation retry count.
pub const DEFAULT_MAX_RETRY_ATR: u8 = 0xFF;
/// Default MxRtyPSL used alongside the passive activation retry count.
pub const DEFAULT_MAX_RETRY_PSL: u8 = 0x01;

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// GetFirmwareVersion
    GetFirmwareVersion,
    /// SAMConfiguration
    SamConfiguration {
        /// SAM mode (0x01 = normal)
        mode: u8,
        /// Timeout in units of 50 ms
        timeout: u8,
        /// Drive P70_IRQ
        use_irq: bool,
    },
    /// RFConfiguration, MaxRetries item
    SetMaxRetries {
        /// MxRtyATR
        atr: u8,
        /// MxRtyPSL
        psl: u8,
        /// MxRtyPassiveActivation (0xFF = forever)
        passive_activation: u8,
    },
    /// WriteRegister (single register)
    WriteRegister {
        /// Register address
        address: u16,
        /// Value to write
        value: u8,
    },
    /// InListPassiveTarget
    InListPassiveTarget {
        /// Targets to activate (1 or 2)
        max_targets: u8,
        /// Card modulation
        baud_rate: BaudRate,
    },
}

impl Command {
    /// Return the PN532 command code (the first payload byte).
    pub fn opcode(&self) -> u8 {
        use crate::constants::*;
        match self {
            Self::GetFirmwareVersion => PN532_COMMAND_GETFIRMWAREVERSION,
            Self::SamConfiguration { .. } => PN532_COMMAND_SAMCONFIGURATION,
            Self::SetMaxRetries { .. } => PN532_COMMAND_RFCONFIGURATION,
            Self::WriteRegister { .. } => PN532_COMMAND_WRITEREGISTER,
            Self::InListPassiveTarget { .. } => PN532_COMMAND_INLISTPASSIVETARGET,
        }
    }

    /// Encode the command into the frame payload (opcode + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::SetMaxRetries {
                atr,
                psl,
                passive_activation,
            } => encode_max_retries(*atr, *psl, *passive_activation),
            Self::WriteRegister { address, value } => encode_write_register(*address, *value),
            Self::InListPassiveTarget {
                max_targets,
                baud_rate,
            } => encode_in_list_passive_target(*max_targets, *baud_rate),
        }
    }
}
