// libpn532/libpn532/src/protocol/parser.rs

//! Bounds-checked readers over raw response bytes.

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a big-endian u16 at given index, with bounds checking.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    let s = slice_at(data, idx, 2)?;
    Ok(u16::from_be_bytes([s[0], s[1]]))
}

/// Read a big-endian u32 at given index, with bounds checking.
pub fn be_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    let s = slice_at(data, idx, 4)?;
    Ok(u32::from_be_bytes([s[0], s[1], s[2], s[3]]))
}

/// Ensure the byte at `idx` equals `expected`. Returns
/// ResponseStructureMismatch naming the offending offset on mismatch.
pub fn expect_byte(data: &[u8], idx: usize, expected: u8) -> Result<()> {
    let actual = byte_at(data, idx)?;
    if actual != expected {
        return Err(Error::ResponseStructureMismatch {
            offset: idx,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Ensure `data` starts with `prefix`, reporting the first differing byte.
pub fn expect_prefix(data: &[u8], prefix: &[u8]) -> Result<()> {
    ensure_len(data, prefix.len())?;
    for (idx, &expected) in prefix.iter().enumerate() {
        expect_byte(data, idx, expected)?;
    }
    Ok(())
}
