use btc_primitives::PrimitivesError;
use btc_script::ScriptError;
use btc_transaction::TransactionError;

/// Any error raised by a `bitcoin-tool` operation.
///
/// Wraps the error of the crate that produced it; [`Error::code`] gives the
/// stable numeric code regardless of which layer failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Buffer, varint or hash error.
    #[error(transparent)]
    Primitives(#[from] PrimitivesError),
    /// Script parsing error.
    #[error(transparent)]
    Script(#[from] ScriptError),
    /// Transaction field extraction error.
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

impl Error {
    /// Stable numeric code, e.g. `104` for out-of-bounds reads.
    pub fn code(&self) -> u32 {
        match self {
            Error::Primitives(e) => e.code(),
            Error::Script(e) => e.code(),
            Error::Transaction(e) => e.code(),
        }
    }
}
