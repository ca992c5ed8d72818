/// Numeric code for a read that would run past the end of a buffer.
pub const ERR_OUT_OF_BOUNDS: u32 = 104;
/// Numeric code for a fixed-size operation given input of the wrong size.
pub const ERR_INVALID_LENGTH: u32 = 105;
/// Numeric code for a CompactSize value that has a shorter encoding.
pub const ERR_NON_CANONICAL_VARINT: u32 = 106;
/// Numeric code for malformed hex input.
pub const ERR_INVALID_HEX: u32 = 107;

/// Unified error type for all primitives operations.
///
/// Every variant maps to a stable numeric code (see [`PrimitivesError::code`])
/// so callers that only understand integer error codes can keep matching on them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitivesError {
    #[error("read of {width} bytes at offset {offset} exceeds buffer length {len}")]
    OutOfBounds { offset: usize, width: usize, len: usize },

    #[error("invalid length: expected {expected}, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("non-canonical varint: {value} encoded in {width} bytes")]
    NonCanonicalVarInt { value: u64, width: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl PrimitivesError {
    /// Return the stable numeric code for this error.
    pub fn code(&self) -> u32 {
        match self {
            PrimitivesError::OutOfBounds { .. } => ERR_OUT_OF_BOUNDS,
            PrimitivesError::InvalidLength { .. } => ERR_INVALID_LENGTH,
            PrimitivesError::NonCanonicalVarInt { .. } => ERR_NON_CANONICAL_VARINT,
            PrimitivesError::InvalidHex(_) => ERR_INVALID_HEX,
        }
    }
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
