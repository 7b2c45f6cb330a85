// libpn532/libpn532/src/protocol/responses/firmware.rs

//! GetFirmwareVersion response.

use crate::constants::PN532_FIRMWARE_RESPONSE_HEADER;
use crate::protocol::parser;
use crate::types::FirmwareVersion;
use crate::Result;

/// Offset of the packed version bytes (IC, Ver, Rev, Support).
pub const VERSION_OFFSET: usize = 6;

/// Decode a GetFirmwareVersion response as read from the chip.
/// Layout: header(6) + IC + Ver + Rev + Support + trailer
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    parser::ensure_len(data, VERSION_OFFSET + 4)?;
    parser::expect_prefix(data, &PN532_FIRMWARE_RESPONSE_HEADER)?;
    let raw = parser::be_u32_at(data, VERSION_OFFSET)?;
    Ok(FirmwareVersion::from_u32(raw))
}
