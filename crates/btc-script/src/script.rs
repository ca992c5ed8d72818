//! Bitcoin Script type and the standard output template predicates.
//!
//! Each predicate checks the exact length and the fixed opcode positions
//! of one template. Any other input, including truncated or oversized
//! scripts, is simply not that template.

use std::fmt;

use crate::opcodes::*;
use crate::script_type::{classify, ScriptType};
use crate::ScriptError;

/// `OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG`
pub fn is_p2pkh(script: &[u8]) -> bool {
    script.len() == 25
        && script[0] == OP_DUP
        && script[1] == OP_HASH160
        && script[2] == OP_DATA_20
        && script[23] == OP_EQUALVERIFY
        && script[24] == OP_CHECKSIG
}

/// `OP_HASH160 <20 bytes> OP_EQUAL`
pub fn is_p2sh(script: &[u8]) -> bool {
    script.len() == 23
        && script[0] == OP_HASH160
        && script[1] == OP_DATA_20
        && script[22] == OP_EQUAL
}

/// `OP_0 <20 bytes>`
pub fn is_p2wpkh(script: &[u8]) -> bool {
    script.len() == 22 && script[0] == OP_0 && script[1] == OP_DATA_20
}

/// `0x01 <32 bytes>`
///
/// The version byte is `0x01`, the form existing callers of this library
/// produce. BIP-341 outputs written with `OP_1` (`0x51`) do not match.
pub fn is_p2tr(script: &[u8]) -> bool {
    script.len() == 34 && script[0] == OP_DATA_1 && script[1] == OP_DATA_32
}

/// A Bitcoin script, represented as a byte vector newtype.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

impl Script {
    /// Create a new empty script.
    pub fn new() -> Self {
        Script(Vec::new())
    }

    /// Create a script from a hex-encoded string.
    ///
    /// # Arguments
    /// * `hex_str` - A hex string (e.g. "76a914...88ac").
    ///
    /// # Returns
    /// A `Script` wrapping the decoded bytes, or an error if the hex is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        Ok(Script(hex::decode(hex_str)?))
    }

    /// Create a script from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Script(bytes.to_vec())
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn to_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // -----------------------------------------------------------------------
    // Script classification
    // -----------------------------------------------------------------------

    pub fn is_p2pkh(&self) -> bool {
        is_p2pkh(&self.0)
    }

    pub fn is_p2sh(&self) -> bool {
        is_p2sh(&self.0)
    }

    pub fn is_p2wpkh(&self) -> bool {
        is_p2wpkh(&self.0)
    }

    pub fn is_p2tr(&self) -> bool {
        is_p2tr(&self.0)
    }

    pub fn script_type(&self) -> ScriptType {
        classify(&self.0)
    }

    // -----------------------------------------------------------------------
    // Data extraction
    // -----------------------------------------------------------------------

    /// Return the hash or key committed to by a standard script.
    ///
    /// # Returns
    /// The 20-byte hash for P2PKH, P2SH and P2WPKH, the 32-byte key for
    /// P2TR, or `None` for any other script.
    pub fn payload(&self) -> Option<&[u8]> {
        let b = &self.0;
        match self.script_type() {
            ScriptType::P2pkh => Some(&b[3..3 + HASH160_SIZE]),
            ScriptType::P2sh | ScriptType::P2wpkh => Some(&b[2..2 + HASH160_SIZE]),
            ScriptType::P2tr => Some(&b[2..2 + XONLY_PUBKEY_SIZE]),
            ScriptType::NonStandard => None,
        }
    }
}

impl From<Vec<u8>> for Script {
    fn from(bytes: Vec<u8>) -> Self {
        Script(bytes)
    }
}

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_HASH160: &str = "0000000000000000000000000000000000000000";

    fn script(hex_str: &str) -> Vec<u8> {
        hex::decode(hex_str).unwrap()
    }

    // -----------------------------------------------------------------------
    // P2PKH
    // -----------------------------------------------------------------------

    #[test]
    fn test_is_p2pkh() {
        assert!(is_p2pkh(&script(&format!("76a914{}88ac", ZERO_HASH160))));
        assert!(is_p2pkh(&script("76a914e2a623699e81b291c0327f408fea765d534baa2a88ac")));
    }

    #[test]
    fn test_is_p2pkh_wrong_first_byte() {
        assert!(!is_p2pkh(&script(&format!("00a914{}88ac", ZERO_HASH160))));
    }

    #[test]
    fn test_is_p2pkh_wrong_length() {
        // One byte short, one byte long.
        assert!(!is_p2pkh(&script("76a914e2a623699e81b291c0327f408fea765d534baa88ac")));
        assert!(!is_p2pkh(&script("76a914e2a623699e81b291c0327f408fea765d534baa2a0088ac")));
        assert!(!is_p2pkh(&[]));
    }

    #[test]
    fn test_is_p2pkh_wrong_trailer() {
        assert!(!is_p2pkh(&script(&format!("76a914{}87ac", ZERO_HASH160))));
        assert!(!is_p2pkh(&script(&format!("76a914{}88ab", ZERO_HASH160))));
    }

    // -----------------------------------------------------------------------
    // P2SH
    // -----------------------------------------------------------------------

    #[test]
    fn test_is_p2sh() {
        assert!(is_p2sh(&script(&format!("a914{}87", ZERO_HASH160))));
        assert!(is_p2sh(&script("a9149de5aeaff9c48431ba4dd6e8af73d51f38e451cb87")));
    }

    #[test]
    fn test_is_p2sh_invalid() {
        assert!(!is_p2sh(&script(&format!("0014{}87", ZERO_HASH160))));
        assert!(!is_p2sh(&script(&format!("a914{}88", ZERO_HASH160))));
        assert!(!is_p2sh(&script(&format!("a914{}", ZERO_HASH160))));
    }

    // -----------------------------------------------------------------------
    // P2WPKH
    // -----------------------------------------------------------------------

    #[test]
    fn test_is_p2wpkh() {
        assert!(is_p2wpkh(&script(&format!("0014{}", ZERO_HASH160))));
        assert!(is_p2wpkh(&script("0014751e76e8199196d454941c45d1b3a323f1433bd6")));
    }

    #[test]
    fn test_is_p2wpkh_invalid() {
        // P2WSH is 34 bytes with a 32-byte push.
        assert!(!is_p2wpkh(&script(&format!("0020{}{}", ZERO_HASH160, "000000000000000000000000"))));
        assert!(!is_p2wpkh(&script(&format!("0114{}", ZERO_HASH160))));
        assert!(!is_p2wpkh(&script(&format!("0014{}00", ZERO_HASH160))));
    }

    // -----------------------------------------------------------------------
    // P2TR
    // -----------------------------------------------------------------------

    #[test]
    fn test_is_p2tr() {
        assert!(is_p2tr(&script(&format!("0120{}", "0".repeat(64)))));
    }

    #[test]
    fn test_is_p2tr_invalid() {
        assert!(!is_p2tr(&script(&format!("0120{}", "0".repeat(62)))));
        assert!(!is_p2tr(&script(&format!("0120{}", "0".repeat(66)))));
        assert!(!is_p2tr(&script(&format!("0020{}", "0".repeat(64)))));
        // OP_1 form is not the recognised template.
        assert!(!is_p2tr(&script(&format!("5120{}", "0".repeat(64)))));
    }

    // -----------------------------------------------------------------------
    // Script type
    // -----------------------------------------------------------------------

    #[test]
    fn test_script_methods_delegate() {
        let s = Script::from_hex("76a914e2a623699e81b291c0327f408fea765d534baa2a88ac").unwrap();
        assert!(s.is_p2pkh());
        assert!(!s.is_p2sh());
        assert!(!s.is_p2wpkh());
        assert!(!s.is_p2tr());
        assert_eq!(s.len(), 25);
        assert_eq!(s.to_string(), "76a914e2a623699e81b291c0327f408fea765d534baa2a88ac");
    }

    #[test]
    fn test_payload() {
        let s = Script::from_hex("76a914e2a623699e81b291c0327f408fea765d534baa2a88ac").unwrap();
        assert_eq!(hex::encode(s.payload().unwrap()), "e2a623699e81b291c0327f408fea765d534baa2a");

        let s = Script::from_hex("a9149de5aeaff9c48431ba4dd6e8af73d51f38e451cb87").unwrap();
        assert_eq!(hex::encode(s.payload().unwrap()), "9de5aeaff9c48431ba4dd6e8af73d51f38e451cb");

        let s = Script::from_hex("0014751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        assert_eq!(hex::encode(s.payload().unwrap()), "751e76e8199196d454941c45d1b3a323f1433bd6");

        let key = "ab".repeat(32);
        let s = Script::from_hex(&format!("0120{}", key)).unwrap();
        assert_eq!(hex::encode(s.payload().unwrap()), key);

        assert!(Script::from_hex("6a0568656c6c6f").unwrap().payload().is_none());
    }

    #[test]
    fn test_from_hex_invalid() {
        let err = Script::from_hex("76a9zz").unwrap_err();
        assert_eq!(err.code(), 107);
        assert!(Script::from_hex("abc").is_err());
    }

    #[test]
    fn test_from_hex_empty() {
        let s = Script::from_hex("").unwrap();
        assert!(s.is_empty());
        assert_eq!(s.script_type(), ScriptType::NonStandard);
    }
}
