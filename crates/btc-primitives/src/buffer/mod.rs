//! Bounds-checked reads at arbitrary offsets into a raw byte buffer.
//!
//! Every function checks the full span of the read against the buffer
//! length before touching any byte, so a failed read never yields a
//! partial value. Multi-byte integers are little-endian, as on the wire.

use crate::PrimitivesError;

/// Borrow `width` bytes starting at `offset`.
///
/// # Arguments
/// * `data` - The buffer to read from.
/// * `offset` - Index of the first byte.
/// * `width` - Number of bytes requested.
///
/// # Returns
/// The sub-slice, or `OutOfBounds` if `offset + width` exceeds the buffer.
pub fn extract_slice(data: &[u8], offset: usize, width: usize) -> Result<&[u8], PrimitivesError> {
    let out_of_bounds = PrimitivesError::OutOfBounds { offset, width, len: data.len() };
    let end = offset.checked_add(width).ok_or(out_of_bounds.clone())?;
    data.get(offset..end).ok_or(out_of_bounds)
}

fn extract_array<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], PrimitivesError> {
    let mut out = [0u8; N];
    out.copy_from_slice(extract_slice(data, offset, N)?);
    Ok(out)
}

/// Read one byte at `offset`.
///
/// # Returns
/// The byte, or `OutOfBounds` when `offset >= data.len()`.
pub fn extract_uint8(data: &[u8], offset: usize) -> Result<u8, PrimitivesError> {
    data.get(offset).copied().ok_or(PrimitivesError::OutOfBounds {
        offset,
        width: 1,
        len: data.len(),
    })
}

/// Read a little-endian u16 from `data[offset..offset + 2]`.
pub fn extract_uint16_le(data: &[u8], offset: usize) -> Result<u16, PrimitivesError> {
    extract_array(data, offset).map(u16::from_le_bytes)
}

/// Read a little-endian u32 from `data[offset..offset + 4]`.
///
/// The byte at `offset` is the least significant, so `[01 02 03 04]`
/// reads as `0x04030201`.
///
/// # Returns
/// The value, or `OutOfBounds` when `offset + 4 > data.len()`.
pub fn extract_uint32_le(data: &[u8], offset: usize) -> Result<u32, PrimitivesError> {
    extract_array(data, offset).map(u32::from_le_bytes)
}

/// Read a little-endian u64 from `data[offset..offset + 8]`.
pub fn extract_uint64_le(data: &[u8], offset: usize) -> Result<u64, PrimitivesError> {
    extract_array(data, offset).map(u64::from_le_bytes)
}

/// Copy 32 bytes starting at `offset`, e.g. a previous-output txid.
pub fn extract_buff32(data: &[u8], offset: usize) -> Result<[u8; 32], PrimitivesError> {
    extract_array(data, offset)
}
