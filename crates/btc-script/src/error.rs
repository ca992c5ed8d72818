use btc_primitives::{PrimitivesError, ERR_INVALID_HEX};

/// Error types for script operations.
///
/// Classification itself never fails; errors only come from building a
/// [`crate::Script`] out of text.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    /// Error from primitives crate.
    #[error("primitives error: {0}")]
    Primitives(#[from] PrimitivesError),
}

impl ScriptError {
    /// Return the stable numeric code for this error.
    pub fn code(&self) -> u32 {
        match self {
            ScriptError::HexDecode(_) => ERR_INVALID_HEX,
            ScriptError::Primitives(e) => e.code(),
        }
    }
}
