//! CompactSize varints and a cursor reader for Bitcoin wire data.
//!
//! `extract_varint_uint` decodes a varint at an arbitrary offset.
//! `BtcReader` walks a buffer front to back on top of the offset-based
//! reads in [`crate::buffer`], so both paths share one set of bounds rules.

use crate::buffer::{extract_slice, extract_uint16_le, extract_uint32_le, extract_uint64_le, extract_uint8};
use crate::config::DecodeConfig;
use crate::PrimitivesError;

// ---------------------------------------------------------------------------
// VarInt
// ---------------------------------------------------------------------------

/// A Bitcoin protocol variable-length integer (CompactSize).
///
/// The encoding uses 1, 3, 5, or 9 bytes depending on the magnitude of the
/// value: a single byte below `0xfd`, otherwise a prefix of `0xfd`, `0xfe`
/// or `0xff` followed by a 2, 4 or 8 byte little-endian value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarInt(pub u64);

impl VarInt {
    /// Return the canonical wire-format byte length of this VarInt.
    ///
    /// # Returns
    /// 1, 3, 5, or 9 depending on the value.
    pub fn length(&self) -> usize {
        if self.0 < 0xfd {
            1
        } else if self.0 <= 0xffff {
            3
        } else if self.0 <= 0xffff_ffff {
            5
        } else {
            9
        }
    }

    /// Encode the VarInt canonically.
    pub fn to_bytes(&self) -> Vec<u8> {
        let v = self.0;
        let mut buf = Vec::with_capacity(self.length());
        match self.length() {
            1 => buf.push(v as u8),
            3 => {
                buf.push(0xfd);
                buf.extend_from_slice(&(v as u16).to_le_bytes());
            }
            5 => {
                buf.push(0xfe);
                buf.extend_from_slice(&(v as u32).to_le_bytes());
            }
            _ => {
                buf.push(0xff);
                buf.extend_from_slice(&v.to_le_bytes());
            }
        }
        buf
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VarInt {
    fn from(v: u64) -> Self {
        VarInt(v)
    }
}

impl From<VarInt> for u64 {
    fn from(v: VarInt) -> Self {
        v.0
    }
}

/// How a varint with a `0xfd`, `0xfe` or `0xff` prefix is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarIntMode {
    /// Decoding that existing callers depend on.
    ///
    /// * `0xfd` yields a placeholder of `0` without reading the trailing
    ///   two bytes, and is counted as 3 bytes wide.
    /// * `0xfe` and `0xff` read the 4 or 8 trailing bytes when they are all
    ///   present; otherwise the prefix byte itself is the value (so a lone
    ///   `0xfe` decodes to 254), 1 byte wide.
    ///
    /// The `0xfd` placeholder is a known defect. Use [`VarIntMode::Strict`]
    /// for correct values above 252.
    #[default]
    Legacy,
    /// Full CompactSize. Truncated values are `OutOfBounds` and values with a
    /// shorter encoding are `NonCanonicalVarInt`.
    Strict,
}

/// Decode the varint starting at `offset`.
///
/// # Arguments
/// * `data` - Buffer holding the varint.
/// * `offset` - Position of the prefix byte.
/// * `config` - Selects legacy or strict decoding.
///
/// # Returns
/// The decoded value and the number of bytes it occupies, or
/// `OutOfBounds` if the prefix byte cannot be read.
pub fn extract_varint_uint(
    data: &[u8],
    offset: usize,
    config: &DecodeConfig,
) -> Result<(VarInt, usize), PrimitivesError> {
    let prefix = extract_uint8(data, offset)?;
    if prefix < 0xfd {
        return Ok((VarInt(prefix as u64), 1));
    }
    let body = offset + 1;
    match config.varint_mode() {
        VarIntMode::Legacy => Ok(match prefix {
            0xfd => (VarInt(0), 3),
            0xfe => match extract_uint32_le(data, body) {
                Ok(v) => (VarInt(v as u64), 5),
                Err(_) => (VarInt(prefix as u64), 1),
            },
            _ => match extract_uint64_le(data, body) {
                Ok(v) => (VarInt(v), 9),
                Err(_) => (VarInt(prefix as u64), 1),
            },
        }),
        VarIntMode::Strict => {
            let (value, width) = match prefix {
                0xfd => (extract_uint16_le(data, body)? as u64, 3),
                0xfe => (extract_uint32_le(data, body)? as u64, 5),
                _ => (extract_uint64_le(data, body)?, 9),
            };
            let varint = VarInt(value);
            if varint.length() != width {
                return Err(PrimitivesError::NonCanonicalVarInt { value, width });
            }
            Ok((varint, width))
        }
    }
}

// ---------------------------------------------------------------------------
// BtcReader
// ---------------------------------------------------------------------------

/// A cursor-based reader for Bitcoin protocol binary data.
///
/// Wraps a byte slice and maintains a read position. A failed read leaves
/// the position unchanged.
#[derive(Debug, Clone)]
pub struct BtcReader<'a> {
    data: &'a [u8],
    pos: usize,
    config: DecodeConfig,
}

impl<'a> BtcReader<'a> {
    /// Create a reader positioned at the start of `data`, with legacy varints.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_config(data, DecodeConfig::default())
    }

    pub fn with_config(data: &'a [u8], config: DecodeConfig) -> Self {
        BtcReader { data, pos: 0, config }
    }

    /// Create a reader positioned at `pos`. Reads fail if `pos` is past the end.
    pub fn at(data: &'a [u8], pos: usize, config: DecodeConfig) -> Self {
        BtcReader { data, pos, config }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Read `n` bytes and advance the position.
    ///
    /// # Returns
    /// A sub-slice of the underlying data, or `OutOfBounds` if fewer than `n`
    /// bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], PrimitivesError> {
        let slice = extract_slice(self.data, self.pos, n)?;
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8, PrimitivesError> {
        let v = extract_uint8(self.data, self.pos)?;
        self.pos += 1;
        Ok(v)
    }

    pub fn read_u16_le(&mut self) -> Result<u16, PrimitivesError> {
        let v = extract_uint16_le(self.data, self.pos)?;
        self.pos += 2;
        Ok(v)
    }

    pub fn read_u32_le(&mut self) -> Result<u32, PrimitivesError> {
        let v = extract_uint32_le(self.data, self.pos)?;
        self.pos += 4;
        Ok(v)
    }

    pub fn read_u64_le(&mut self) -> Result<u64, PrimitivesError> {
        let v = extract_uint64_le(self.data, self.pos)?;
        self.pos += 8;
        Ok(v)
    }

    /// Read a varint using the reader's configured mode.
    pub fn read_varint(&mut self) -> Result<VarInt, PrimitivesError> {
        let (v, width) = extract_varint_uint(self.data, self.pos, &self.config)?;
        self.pos += width;
        Ok(v)
    }
}
