use btc_primitives::{PrimitivesError, ERR_INVALID_HEX};

/// Numeric code for bytes left over after the locktime.
pub const ERR_TRAILING_BYTES: u32 = 108;

/// Error types for transaction field extraction.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// A field could not be read; the underlying error says why.
    #[error("reading {field}: {source}")]
    Field {
        field: &'static str,
        source: PrimitivesError,
    },
    /// The buffer continues past the locktime.
    #[error("trailing {0} bytes after transaction")]
    TrailingBytes(usize),
    /// The transaction hex could not be decoded.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// An underlying primitives error (forwarded from `btc-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] PrimitivesError),
}

impl TransactionError {
    /// Return the stable numeric code for this error.
    ///
    /// Field errors report the code of the read that failed, so a truncated
    /// transaction is `104` no matter which field ran out of bytes.
    pub fn code(&self) -> u32 {
        match self {
            TransactionError::Field { source, .. } => source.code(),
            TransactionError::TrailingBytes(_) => ERR_TRAILING_BYTES,
            TransactionError::Hex(_) => ERR_INVALID_HEX,
            TransactionError::Primitives(e) => e.code(),
        }
    }
}

/// Attach the name of the field being read to a primitives error.
pub(crate) fn reading(field: &'static str) -> impl FnOnce(PrimitivesError) -> TransactionError {
    move |source| TransactionError::Field { field, source }
}
