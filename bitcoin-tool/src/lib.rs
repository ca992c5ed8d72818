#![deny(missing_docs)]

//! Byte-exact Bitcoin raw transaction and script decoding.
//!
//! One function per operation, each taking a borrowed buffer and returning
//! a value or an [`Error`] with a stable numeric code. The component crates
//! are re-exported for callers that need the typed views directly.

pub use btc_primitives as primitives;
pub use btc_script as script;
pub use btc_transaction as transaction;

pub use btc_primitives::chainhash::Hash;
pub use btc_primitives::DecodeConfig;
pub use btc_primitives::{
    ERR_INVALID_HEX, ERR_INVALID_LENGTH, ERR_NON_CANONICAL_VARINT, ERR_OUT_OF_BOUNDS,
};
pub use btc_script::{is_p2pkh, is_p2sh, is_p2tr, is_p2wpkh, ScriptType};
pub use btc_transaction::{RawTransaction, ERR_TRAILING_BYTES};

mod error;
pub use error::Error;

/// Library revision.
pub const VERSION: &str = "1.3.0";

/// Return the library revision as a semantic version string.
pub fn get_version() -> &'static str {
    VERSION
}

/// Read one byte at `offset`.
///
/// Fails with code [`ERR_OUT_OF_BOUNDS`] when `offset >= buf.len()`.
pub fn extract_uint8(buf: &[u8], offset: usize) -> Result<u8, Error> {
    Ok(btc_primitives::buffer::extract_uint8(buf, offset)?)
}

/// Read a little-endian u32 at `offset`.
///
/// Fails with code [`ERR_OUT_OF_BOUNDS`] when `offset + 4 > buf.len()`.
pub fn extract_uint32_le(buf: &[u8], offset: usize) -> Result<u32, Error> {
    Ok(btc_primitives::buffer::extract_uint32_le(buf, offset)?)
}

/// Decode the CompactSize varint at `offset` in legacy mode.
///
/// A `0xfd` prefix yields the placeholder `0`. Use
/// [`extract_varint_uint_with`] and [`DecodeConfig::strict`] for full
/// CompactSize decoding.
pub fn extract_varint_uint(buf: &[u8], offset: usize) -> Result<u64, Error> {
    extract_varint_uint_with(buf, offset, &DecodeConfig::legacy())
}

/// Decode the varint at `offset` with an explicit configuration.
pub fn extract_varint_uint_with(buf: &[u8], offset: usize, config: &DecodeConfig) -> Result<u64, Error> {
    let (value, _) = btc_primitives::util::extract_varint_uint(buf, offset, config)?;
    Ok(value.value())
}

/// Reverse a 32-byte buffer.
///
/// Fails with code [`ERR_INVALID_LENGTH`] for any other length.
pub fn reverse_buff32(buf: &[u8]) -> Result<[u8; 32], Error> {
    Ok(btc_primitives::chainhash::reverse_buff32(buf)?)
}

/// Classify a script against every standard template.
pub fn classify_script(script: &[u8]) -> ScriptType {
    btc_script::classify(script)
}

/// Compute the display-order txid of a raw transaction.
///
/// Always succeeds; the `Result` matches the other transaction operations.
pub fn get_txid_from_raw(tx: &[u8]) -> Result<[u8; 32], Error> {
    Ok(btc_transaction::get_txid_from_raw(tx))
}

/// Count the inputs of a raw transaction.
pub fn extract_tx_ins_count(tx: &[u8]) -> Result<u64, Error> {
    Ok(btc_transaction::extract_tx_ins_count(tx)?)
}
