//! Borrowed view of a transaction input.
//!
//! # Wire format
//!
//! | Field            | Size          |
//! |------------------|---------------|
//! | previous txid    | 32 bytes      |
//! | previous vout    | 4 bytes (LE)  |
//! | script length    | VarInt        |
//! | script_sig       | variable      |
//! | sequence         | 4 bytes (LE)  |

use btc_primitives::chainhash::Hash;
use btc_primitives::util::BtcReader;

use crate::error::reading;
use crate::TransactionError;

/// Smallest possible encoded input: outpoint, empty script, sequence.
pub const MIN_INPUT_SIZE: usize = 32 + 4 + 1 + 4;

/// Output index used by the coinbase input's null outpoint.
pub const NULL_VOUT: u32 = 0xFFFF_FFFF;

/// A single input, borrowing its script from the raw transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxInRef<'a> {
    /// Txid of the output being spent, in internal byte order.
    pub prev_txid: Hash,
    /// Index of the output being spent.
    pub prev_vout: u32,
    pub script_sig: &'a [u8],
    pub sequence: u32,
}

impl<'a> TxInRef<'a> {
    /// Decode one input at the reader's position.
    ///
    /// # Returns
    /// The input, or a `Field` error naming the part that was truncated.
    pub fn read_from(reader: &mut BtcReader<'a>) -> Result<Self, TransactionError> {
        let txid_bytes = reader.read_bytes(32).map_err(reading("previous txid"))?;
        let prev_txid = Hash::from_bytes(txid_bytes).map_err(reading("previous txid"))?;
        let prev_vout = reader.read_u32_le().map_err(reading("previous output index"))?;
        let script_len = reader.read_varint().map_err(reading("script_sig length"))?;
        let script_sig = reader
            .read_bytes(script_len.value() as usize)
            .map_err(reading("script_sig"))?;
        let sequence = reader.read_u32_le().map_err(reading("sequence"))?;

        Ok(TxInRef { prev_txid, prev_vout, script_sig, sequence })
    }

    /// True for the null outpoint a coinbase input spends.
    pub fn is_null_outpoint(&self) -> bool {
        self.prev_vout == NULL_VOUT && self.prev_txid == Hash::default()
    }
}
