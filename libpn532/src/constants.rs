// libpn532/libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// Frame preamble byte
pub const PN532_PREAMBLE: u8 = 0x00;

/// First start code byte (start of packet is 0x00 0xFF)
pub const PN532_STARTCODE1: u8 = 0x00;
/// Second start code byte
pub const PN532_STARTCODE2: u8 = 0xFF;

/// Frame postamble byte
pub const PN532_POSTAMBLE: u8 = 0x00;

/// TFI of frames sent by the host
pub const PN532_HOST_TO_PN532: u8 = 0xD4;
/// TFI of frames sent by the chip
pub const PN532_PN532_TO_HOST: u8 = 0xD5;

/// Marker preceding a status read
pub const PN532_SPI_STATREAD: u8 = 0x02;
/// Marker preceding a host->chip frame
pub const PN532_SPI_DATAWRITE: u8 = 0x01;
/// Marker preceding a data read
pub const PN532_SPI_DATAREAD: u8 = 0x03;

/// Status byte reported by a status read when the chip has data
pub const PN532_SPI_READY: u8 = 0x01;

/// Maximum command payload (opcode + parameters) carried in one frame
pub const PN532_MAX_PAYLOAD_LEN: usize = 63;

/// Capacity of the engine's response buffer
pub const PN532_BUFFER_SIZE: usize = 64;

/// Acknowledge frame sent by the chip after each accepted command
pub const PN532_ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Expected header of the GetFirmwareVersion response
pub const PN532_FIRMWARE_RESPONSE_HEADER: [u8; 6] = [0x00, 0x00, 0xFF, 0x06, 0xFA, 0xD5];

/// Status byte found at offset 6 of a successful SAMConfiguration response
pub const PN532_SAM_CONFIG_OK: u8 = 0x15;

/// GetFirmwareVersion response length
pub const FIRMWARE_RESPONSE_LEN: usize = 12;
/// SAMConfiguration response length
pub const SAM_RESPONSE_LEN: usize = 8;
/// InListPassiveTarget response length (single target)
pub const PASSIVE_TARGET_RESPONSE_LEN: usize = 20;

/// Largest UID the passive target response can carry (double size UID)
pub const MAX_UID_LEN: usize = 7;

// PN532 command codes

/// GetFirmwareVersion
pub const PN532_COMMAND_GETFIRMWAREVERSION: u8 = 0x02;
/// WriteRegister
pub const PN532_COMMAND_WRITEREGISTER: u8 = 0x08;
/// SAMConfiguration
pub const PN532_COMMAND_SAMCONFIGURATION: u8 = 0x14;
/// RFConfiguration
pub const PN532_COMMAND_RFCONFIGURATION: u8 = 0x32;
/// InListPassiveTarget
pub const PN532_COMMAND_INLISTPASSIVETARGET: u8 = 0x4A;

/// InListPassiveTarget response code (command + 1)
pub const PN532_RESPONSE_INLISTPASSIVETARGET: u8 = 0x4B;

/// RFConfiguration item selecting the retry counters
pub const RF_CONFIG_MAX_RETRIES: u8 = 0x05;
