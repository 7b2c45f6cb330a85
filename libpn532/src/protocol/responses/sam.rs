// libpn532/libpn532/src/protocol/responses/sam.rs

//! SAMConfiguration response.

use crate::constants::PN532_SAM_CONFIG_OK;
use crate::protocol::parser;
use crate::Result;

/// Offset of the response code checked after SAMConfiguration.
pub const STATUS_OFFSET: usize = 6;

/// A SAMConfiguration response carries no data; success is the
/// response code 0x15 at offset 6.
pub fn decode_sam_configuration(data: &[u8]) -> Result<()> {
    parser::expect_byte(data, STATUS_OFFSET, PN532_SAM_CONFIG_OK)
}
