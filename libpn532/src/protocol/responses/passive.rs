// libpn532/libpn532/src/protocol/responses/passive.rs

//! InListPassiveTarget response.

use std::convert::TryFrom;

use crate::constants::MAX_UID_LEN;
use crate::protocol::parser;
use crate::types::{PassiveTarget, Uid};
use crate::{Error, Result};

/// ISO14443A InListPassiveTarget response layout as read from the chip:
///
/// byte        description
/// ----------  ----------------------------
/// 0..=6       frame header and response code
/// 7           number of targets found
/// 8           target number
/// 9..=10      SENS_RES
/// 11          SEL_RES
/// 12          NFCID length
/// 13..        NFCID
pub const TARGET_COUNT_OFFSET: usize = 7;
/// Logical target number (Tg)
pub const TARGET_NUMBER_OFFSET: usize = 8;
/// SENS_RES, big endian
pub const SENS_RES_OFFSET: usize = 9;
/// SEL_RES
pub const SEL_RES_OFFSET: usize = 11;
/// NFCID length
pub const UID_LEN_OFFSET: usize = 12;
/// First NFCID byte
pub const UID_OFFSET: usize = 13;

/// Decode a single-target response. Exactly one target is accepted.
pub fn decode_passive_target(data: &[u8]) -> Result<PassiveTarget> {
    match parser::byte_at(data, TARGET_COUNT_OFFSET)? {
        1 => {}
        0 => return Err(Error::NoTagFound),
        found => return Err(Error::MultipleTagsUnsupported { found }),
    }

    let uid_len = parser::byte_at(data, UID_LEN_OFFSET)?;
    if uid_len == 0 || uid_len as usize > MAX_UID_LEN {
        return Err(Error::ResponseStructureMismatch {
            offset: UID_LEN_OFFSET,
            expected: MAX_UID_LEN as u8,
            actual: uid_len,
        });
    }

    let uid = Uid::try_from(parser::slice_at(data, UID_OFFSET, uid_len as usize)?)?;
    Ok(PassiveTarget {
        target_number: parser::byte_at(data, TARGET_NUMBER_OFFSET)?,
        sens_res: parser::be_u16_at(data, SENS_RES_OFFSET)?,
        sel_res: parser::byte_at(data, SEL_RES_OFFSET)?,
        uid,
    })
}
