//! Borrowed view of a transaction output.
//!
//! # Wire format
//!
//! | Field          | Size          |
//! |----------------|---------------|
//! | value          | 8 bytes (LE)  |
//! | script length  | VarInt        |
//! | script_pubkey  | variable      |

use btc_primitives::util::BtcReader;
use btc_script::{classify, Script, ScriptType};

use crate::error::reading;
use crate::TransactionError;

/// Smallest possible encoded output: value and an empty script.
pub const MIN_OUTPUT_SIZE: usize = 8 + 1;

/// A single output, borrowing its locking script from the raw transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxOutRef<'a> {
    /// Amount in satoshis.
    pub value: u64,
    pub script_pubkey: &'a [u8],
}

impl<'a> TxOutRef<'a> {
    pub fn read_from(reader: &mut BtcReader<'a>) -> Result<Self, TransactionError> {
        let value = reader.read_u64_le().map_err(reading("output value"))?;
        let script_len = reader.read_varint().map_err(reading("script_pubkey length"))?;
        let script_pubkey = reader
            .read_bytes(script_len.value() as usize)
            .map_err(reading("script_pubkey"))?;

        Ok(TxOutRef { value, script_pubkey })
    }

    pub fn script_type(&self) -> ScriptType {
        classify(self.script_pubkey)
    }

    /// Copy the locking script out of the transaction.
    pub fn script(&self) -> Script {
        Script::from_bytes(self.script_pubkey)
    }
}
