//! Raw Bitcoin transaction field extraction and txid computation.
//!
//! Works directly on serialized bytes: nothing is copied or rebuilt, and
//! scripts are returned as slices into the caller's buffer.

pub mod input;
pub mod output;
pub mod transaction;
pub mod txid;

mod error;
pub use error::{TransactionError, ERR_TRAILING_BYTES};
pub use input::TxInRef;
pub use output::TxOutRef;
pub use transaction::{
    extract_tx_ins_count, extract_tx_locktime, extract_tx_outs_count, extract_tx_version,
    ParsedTransaction, RawTransaction,
};
pub use txid::{get_txid_from_hex, get_txid_from_raw, get_txid_hash};
