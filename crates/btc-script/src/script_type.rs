//! Script type classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::script::{is_p2pkh, is_p2sh, is_p2tr, is_p2wpkh};

/// Classification of standard output scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    /// Pay-to-Public-Key-Hash.
    P2pkh,
    /// Pay-to-Script-Hash.
    P2sh,
    /// Pay-to-Witness-Public-Key-Hash.
    P2wpkh,
    /// Pay-to-Taproot.
    P2tr,
    /// Anything that matches none of the templates.
    NonStandard,
}

/// Classify a script against every template.
///
/// The templates have distinct lengths, so at most one predicate can hold.
pub fn classify(script: &[u8]) -> ScriptType {
    if is_p2pkh(script) {
        ScriptType::P2pkh
    } else if is_p2sh(script) {
        ScriptType::P2sh
    } else if is_p2wpkh(script) {
        ScriptType::P2wpkh
    } else if is_p2tr(script) {
        ScriptType::P2tr
    } else {
        ScriptType::NonStandard
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptType::P2pkh => write!(f, "P2PKH"),
            ScriptType::P2sh => write!(f, "P2SH"),
            ScriptType::P2wpkh => write!(f, "P2WPKH"),
            ScriptType::P2tr => write!(f, "P2TR"),
            ScriptType::NonStandard => write!(f, "NonStandard"),
        }
    }
}
