// libpn532/libpn532/src/types.rs

//! Value types decoded from chip responses.

use std::convert::TryFrom;
use std::fmt;

use derive_more::Display;

use crate::Error;
use crate::constants::MAX_UID_LEN;

/// UID - length-tagged newtype (1..=7 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid {
    len: u8,
    bytes: [u8; MAX_UID_LEN],
}

impl Uid {
    /// The UID bytes, without padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of UID bytes (1..=7).
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false for a decoded UID.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lowercase hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.is_empty() || bytes.len() > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MAX_UID_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            len: bytes.len() as u8,
            bytes: arr,
        })
    }
}

/// Firmware version packed as reported by GetFirmwareVersion:
/// IC type, major version, minor version, support flags (MSB first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion(u32);

impl FirmwareVersion {
    /// From the packed value.
    pub const fn from_u32(raw: u32) -> Self {
        Self(raw)
    }

    /// From IC, Ver, Rev, Support in wire order.
    pub fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Packed value, IC type in the top byte.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Chip type, e.g. 0x32 for a PN532
    pub fn ic(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Firmware version.
    pub fn major(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Firmware revision.
    pub fn minor(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Supported card families bitfield (ISO/IEC 14443 A, B, ISO 18092)
    pub fn support(&self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PN5{:02x} firmware {}.{} (support {:#04x})",
            self.ic(),
            self.major(),
            self.minor(),
            self.support()
        )
    }
}

/// Card baud rate / modulation selector for InListPassiveTarget
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaudRate {
    /// 106 kbps type A (ISO/IEC 14443 Type A)
    #[display(fmt = "106 kbps type A")]
    IsoTypeA = 0x00,
    /// 212 kbps FeliCa polling
    #[display(fmt = "212 kbps FeliCa")]
    FeliCa212 = 0x01,
    /// 424 kbps FeliCa polling
    #[display(fmt = "424 kbps FeliCa")]
    FeliCa424 = 0x02,
    /// 106 kbps type B (ISO/IEC 14443-3B)
    #[display(fmt = "106 kbps type B")]
    IsoTypeB = 0x03,
    /// 106 kbps Innovision Jewel tag
    #[display(fmt = "106 kbps Jewel")]
    Jewel = 0x04,
}

impl TryFrom<u8> for BaudRate {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(Self::IsoTypeA),
            0x01 => Ok(Self::FeliCa212),
            0x02 => Ok(Self::FeliCa424),
            0x03 => Ok(Self::IsoTypeB),
            0x04 => Ok(Self::Jewel),
            other => Err(Error::InvalidParameter(format!(
                "unknown card baud rate code {:#04x}",
                other
            ))),
        }
    }
}

/// A single passive target as reported by InListPassiveTarget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveTarget {
    /// Logical target number assigned by the chip
    pub target_number: u8,
    /// SENS_RES (ATQA)
    pub sens_res: u16,
    /// SEL_RES (SAK)
    pub sel_res: u8,
    /// NFCID1
    pub uid: Uid,
}

impl PassiveTarget {
    /// Borrow the UID.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }
}
