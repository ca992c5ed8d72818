//! Zero-copy field extraction from a raw serialized transaction.
//!
//! `RawTransaction` borrows the caller's bytes and decodes fields on
//! demand: the version and input count need only the first few bytes,
//! while outputs and the locktime require walking every input first.
//!
//! # Wire format
//!
//! | Field        | Size                      |
//! |--------------|---------------------------|
//! | version      | 4 bytes (LE)              |
//! | input count  | VarInt                    |
//! | inputs       | variable (per input)      |
//! | output count | VarInt                    |
//! | outputs      | variable (per output)     |
//! | lock_time    | 4 bytes (LE)              |
//!
//! Witness data is not interpreted. The segwit marker byte reads as an
//! input count of zero.

use btc_primitives::buffer::extract_uint32_le;
use btc_primitives::chainhash::{double_hash_h, Hash};
use btc_primitives::util::{extract_varint_uint, BtcReader};
use btc_primitives::DecodeConfig;
use tracing::{debug, trace};

use crate::error::reading;
use crate::input::{TxInRef, MIN_INPUT_SIZE};
use crate::output::{TxOutRef, MIN_OUTPUT_SIZE};
use crate::TransactionError;

/// Offset of the input-count varint, right after the version.
pub const INPUT_COUNT_OFFSET: usize = 4;

/// A borrowed raw transaction.
#[derive(Debug, Clone, Copy)]
pub struct RawTransaction<'a> {
    bytes: &'a [u8],
    config: DecodeConfig,
}

/// Every field of a transaction, borrowing scripts from the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTransaction<'a> {
    pub version: u32,
    pub inputs: Vec<TxInRef<'a>>,
    pub outputs: Vec<TxOutRef<'a>>,
    pub lock_time: u32,
}

impl ParsedTransaction<'_> {
    /// A coinbase transaction has exactly one input, spending the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].is_null_outpoint()
    }

    /// Sum of all output values, or `None` on overflow.
    pub fn total_output_value(&self) -> Option<u64> {
        self.outputs.iter().try_fold(0u64, |acc, o| acc.checked_add(o.value))
    }
}

impl<'a> RawTransaction<'a> {
    /// Wrap raw bytes, decoding varints in legacy mode.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_config(bytes, DecodeConfig::default())
    }

    pub fn with_config(bytes: &'a [u8], config: DecodeConfig) -> Self {
        RawTransaction { bytes, config }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Size of the serialized transaction in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Read the 4-byte version at offset 0.
    pub fn version(&self) -> Result<u32, TransactionError> {
        extract_uint32_le(self.bytes, 0).map_err(reading("version"))
    }

    /// Read the input count.
    ///
    /// The version is read first so a transaction shorter than 4 bytes fails
    /// on the version rather than decoding an input count out of it.
    ///
    /// # Returns
    /// The varint at offset 4, or the error of whichever read failed.
    pub fn input_count(&self) -> Result<u64, TransactionError> {
        self.version()?;
        let (count, _) = extract_varint_uint(self.bytes, INPUT_COUNT_OFFSET, &self.config)
            .map_err(reading("input count"))?;
        trace!(count = count.value(), "decoded input count");
        Ok(count.value())
    }

    /// Decode every input.
    pub fn inputs(&self) -> Result<Vec<TxInRef<'a>>, TransactionError> {
        let mut reader = self.reader();
        self.read_inputs(&mut reader)
    }

    /// Read the output count, walking past all inputs.
    pub fn output_count(&self) -> Result<u64, TransactionError> {
        let mut reader = self.reader();
        self.read_inputs(&mut reader)?;
        let count = reader.read_varint().map_err(reading("output count"))?;
        Ok(count.value())
    }

    pub fn outputs(&self) -> Result<Vec<TxOutRef<'a>>, TransactionError> {
        Ok(self.parse()?.outputs)
    }

    pub fn lock_time(&self) -> Result<u32, TransactionError> {
        Ok(self.parse()?.lock_time)
    }

    /// Decode the whole transaction.
    ///
    /// # Returns
    /// All fields, or an error if any field is truncated or bytes remain
    /// after the locktime.
    pub fn parse(&self) -> Result<ParsedTransaction<'a>, TransactionError> {
        let mut reader = self.reader();
        let version = reader.read_u32_le().map_err(reading("version"))?;
        let inputs = self.read_inputs_after_version(&mut reader)?;

        let output_count = reader.read_varint().map_err(reading("output count"))?.value();
        let mut outputs = Vec::with_capacity(capacity(output_count, reader.remaining(), MIN_OUTPUT_SIZE));
        for _ in 0..output_count {
            outputs.push(TxOutRef::read_from(&mut reader)?);
        }

        let lock_time = reader.read_u32_le().map_err(reading("lock time"))?;
        if reader.remaining() != 0 {
            return Err(TransactionError::TrailingBytes(reader.remaining()));
        }

        debug!(
            version,
            inputs = inputs.len(),
            outputs = outputs.len(),
            lock_time,
            size = self.size(),
            "parsed raw transaction"
        );
        Ok(ParsedTransaction { version, inputs, outputs, lock_time })
    }

    /// Double SHA-256 of the raw bytes, in internal order.
    ///
    /// `to_string()` on the result gives the conventional txid hex.
    pub fn txid(&self) -> Hash {
        double_hash_h(self.bytes)
    }

    fn reader(&self) -> BtcReader<'a> {
        BtcReader::with_config(self.bytes, self.config)
    }

    fn read_inputs(&self, reader: &mut BtcReader<'a>) -> Result<Vec<TxInRef<'a>>, TransactionError> {
        reader.read_u32_le().map_err(reading("version"))?;
        self.read_inputs_after_version(reader)
    }

    fn read_inputs_after_version(
        &self,
        reader: &mut BtcReader<'a>,
    ) -> Result<Vec<TxInRef<'a>>, TransactionError> {
        let count = reader.read_varint().map_err(reading("input count"))?.value();
        let mut inputs = Vec::with_capacity(capacity(count, reader.remaining(), MIN_INPUT_SIZE));
        for index in 0..count {
            trace!(index, offset = reader.position(), "reading input");
            inputs.push(TxInRef::read_from(reader)?);
        }
        Ok(inputs)
    }
}

/// Bound a declared element count by what the remaining bytes could hold.
fn capacity(declared: u64, remaining: usize, min_size: usize) -> usize {
    let possible = remaining / min_size;
    usize::try_from(declared).map_or(possible, |d| d.min(possible))
}

// -----------------------------------------------------------------
// Free-function extractors
// -----------------------------------------------------------------

/// Count the inputs of a raw transaction.
///
/// Reads the version (bytes 0..4) to establish the offset baseline, then
/// decodes the legacy-mode varint at offset 4.
///
/// # Arguments
/// * `tx` - Raw serialized transaction.
///
/// # Returns
/// The input count, or the `OutOfBounds` error of the truncated read.
pub fn extract_tx_ins_count(tx: &[u8]) -> Result<u64, TransactionError> {
    RawTransaction::new(tx).input_count()
}

pub fn extract_tx_version(tx: &[u8]) -> Result<u32, TransactionError> {
    RawTransaction::new(tx).version()
}

pub fn extract_tx_outs_count(tx: &[u8]) -> Result<u64, TransactionError> {
    RawTransaction::new(tx).output_count()
}

pub fn extract_tx_locktime(tx: &[u8]) -> Result<u32, TransactionError> {
    RawTransaction::new(tx).lock_time()
}
