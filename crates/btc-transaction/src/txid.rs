//! Transaction ID computation.
//!
//! A txid is SHA-256 applied twice to the raw transaction bytes, shown
//! byte-reversed.

use btc_primitives::chainhash::{double_hash_h, Hash};
use tracing::debug;

use crate::TransactionError;

/// Compute the txid of a raw transaction in display byte order.
///
/// # Arguments
/// * `tx` - Raw serialized transaction, any length.
///
/// # Returns
/// `reverse(SHA256(SHA256(tx)))`. Hex-encoding the result yields the
/// conventional txid string.
pub fn get_txid_from_raw(tx: &[u8]) -> [u8; 32] {
    get_txid_hash(tx).reversed()
}

/// Compute the txid as a [`Hash`], which stores internal order and displays reversed.
pub fn get_txid_hash(tx: &[u8]) -> Hash {
    let txid = double_hash_h(tx);
    debug!(%txid, size = tx.len(), "computed txid");
    txid
}

/// Compute the txid of a hex-encoded raw transaction.
pub fn get_txid_from_hex(tx_hex: &str) -> Result<Hash, TransactionError> {
    let bytes = hex::decode(tx_hex)?;
    Ok(get_txid_hash(&bytes))
}
