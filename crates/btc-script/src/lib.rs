//! Bitcoin output script classification.
//!
//! Provides the `Script` type, the opcodes that make up the standard
//! output templates, and structural predicates for P2PKH, P2SH, P2WPKH
//! and P2TR. Scripts are matched by length and fixed byte positions;
//! nothing is executed.

pub mod opcodes;
pub mod script;
pub mod script_type;

mod error;
pub use error::ScriptError;
pub use script::{is_p2pkh, is_p2sh, is_p2tr, is_p2wpkh, Script};
pub use script_type::{classify, ScriptType};
