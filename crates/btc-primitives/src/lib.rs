//! Bitcoin raw-data primitives.
//!
//! This crate provides the foundational building blocks for decoding
//! serialized Bitcoin data:
//! - Bounds-checked integer and slice reads at arbitrary offsets
//! - CompactSize variable-length integer decoding, legacy and strict
//! - SHA-256 and double SHA-256
//! - Chain hash type and 32-byte reversal for txid display order

pub mod buffer;
pub mod chainhash;
pub mod config;
pub mod hash;
pub mod util;

mod error;
pub use config::DecodeConfig;
pub use error::{
    PrimitivesError, ERR_INVALID_HEX, ERR_INVALID_LENGTH, ERR_NON_CANONICAL_VARINT,
    ERR_OUT_OF_BOUNDS,
};
