//! Chain hash type and 32-byte reversal.
//!
//! Hashes are computed and stored in internal byte order but shown to
//! humans byte-reversed. `reverse_buff32` converts between the two, and
//! `Hash` keeps internal order while displaying the reversed hex.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hash::sha256d;
use crate::PrimitivesError;

/// Size of a Hash in bytes.
pub const HASH_SIZE: usize = 32;

/// Reverse exactly 32 bytes.
///
/// Output byte `i` is input byte `31 - i`. Applying it twice returns the
/// original bytes.
///
/// # Arguments
/// * `data` - A slice that must be exactly 32 bytes long.
///
/// # Returns
/// The reversed bytes, or `InvalidLength` for any other length.
pub fn reverse_buff32(data: &[u8]) -> Result<[u8; HASH_SIZE], PrimitivesError> {
    let mut out: [u8; HASH_SIZE] = data.try_into().map_err(|_| PrimitivesError::InvalidLength {
        expected: HASH_SIZE,
        got: data.len(),
    })?;
    out.reverse();
    Ok(out)
}

/// A 32-byte hash used for transaction IDs and block hashes.
///
/// When displayed as a string, the bytes are reversed to match Bitcoin's
/// standard representation (little-endian internal, big-endian display).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// Create a Hash from bytes in internal order.
    pub const fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }

    /// Create a Hash from a byte slice in internal order.
    ///
    /// # Returns
    /// `Ok(Hash)` if the slice is 32 bytes, or `InvalidLength` otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let arr: [u8; HASH_SIZE] = bytes.try_into().map_err(|_| PrimitivesError::InvalidLength {
            expected: HASH_SIZE,
            got: bytes.len(),
        })?;
        Ok(Hash(arr))
    }

    /// Parse a Hash from its display (byte-reversed) hex form.
    ///
    /// The string must be exactly 64 hex characters.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let decoded = hex::decode(hex_str)?;
        Ok(Hash(reverse_buff32(&decoded)?))
    }

    /// Borrow the bytes in internal order.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Return the bytes in display order.
    pub fn reversed(&self) -> [u8; HASH_SIZE] {
        let mut out = self.0;
        out.reverse();
        out
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Hash(bytes)
    }
}

/// Display the hash as byte-reversed hex (Bitcoin convention).
impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.reversed()))
    }
}

impl FromStr for Hash {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::from_hex(s)
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Compute double SHA-256 of the input and return the result as a Hash.
pub fn double_hash_h(data: &[u8]) -> Hash {
    Hash(sha256d(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Genesis block hash bytes in internal (little-endian) order.
    const MAIN_NET_GENESIS_HASH: Hash = Hash::new([
        0x6f, 0xe2, 0x8c, 0x0a, 0xb6, 0xf1, 0xb3, 0x72,
        0xc1, 0xa6, 0xa2, 0x46, 0xae, 0x63, 0xf7, 0x4f,
        0x93, 0x1e, 0x83, 0x65, 0xe1, 0x5a, 0x08, 0x9c,
        0x68, 0xd6, 0x19, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]);

    #[test]
    fn test_reverse_buff32_ascending() {
        let input: Vec<u8> = (0u8..32).collect();
        let reversed = reverse_buff32(&input).unwrap();
        let expected: Vec<u8> = (0u8..32).rev().collect();
        assert_eq!(reversed.to_vec(), expected);
        assert_eq!(
            hex::encode(reversed),
            "1f1e1d1c1b1a191817161514131211100f0e0d0c0b0a09080706050403020100"
        );
    }

    #[test]
    fn test_reverse_buff32_trailing_bytes() {
        let mut input = [0u8; 32];
        input[30] = 0x01;
        input[31] = 0x02;
        let reversed = reverse_buff32(&input).unwrap();
        assert_eq!(reversed[0], 0x02);
        assert_eq!(reversed[1], 0x01);
        assert!(reversed[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_reverse_buff32_invalid_length() {
        let err = reverse_buff32(&[0u8; 31]).unwrap_err();
        assert_eq!(err, PrimitivesError::InvalidLength { expected: 32, got: 31 });
        assert_eq!(err.code(), 105);
        assert!(reverse_buff32(&[0u8; 33]).is_err());
        assert!(reverse_buff32(&[]).is_err());
    }

    #[test]
    fn test_hash_string() {
        // Block 100000 hash in internal byte order.
        let hash = Hash::new([
            0x06, 0xe5, 0x33, 0xfd, 0x1a, 0xda, 0x86, 0x39,
            0x1f, 0x3f, 0x6c, 0x34, 0x32, 0x04, 0xb0, 0xd2,
            0x78, 0xd4, 0xaa, 0xec, 0x1c, 0x0b, 0x20, 0xaa,
            0x27, 0xba, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00,
        ]);
        assert_eq!(
            hash.to_string(),
            "000000000003ba27aa200b1cecaad478d2b00432346c3f1f3986da1afd33e506"
        );
    }

    #[test]
    fn test_hash_from_hex() {
        let result: Hash = "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
            .parse()
            .unwrap();
        assert_eq!(result, MAIN_NET_GENESIS_HASH);

        // Short strings are not padded.
        assert!(Hash::from_hex("19d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f").is_err());
        // Invalid hex character.
        assert_eq!(Hash::from_hex("abcdefg").unwrap_err().code(), 107);
    }

    #[test]
    fn test_hash_from_bytes() {
        let hash = Hash::from_bytes(MAIN_NET_GENESIS_HASH.as_bytes()).unwrap();
        assert_eq!(hash, MAIN_NET_GENESIS_HASH);
        assert!(Hash::from_bytes(&[0u8; 33]).is_err());
    }

    #[test]
    fn test_double_hash_h_displays_reversed() {
        let hash = double_hash_h(&[0x01, 0x00, 0x00, 0x00, 0x01]);
        assert_eq!(
            hash.to_string(),
            "003551cb623f566dcf29b18dc1e4d9f9a3b5a3235404a1f320701cb3fd314c10"
        );
        assert_eq!(hash.reversed(), reverse_buff32(hash.as_bytes()).unwrap());
    }

    #[test]
    fn test_marshalling() {
        #[derive(Serialize, Deserialize)]
        struct TestData {
            hash: Hash,
        }

        let data = TestData { hash: MAIN_NET_GENESIS_HASH };
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(
            json,
            r#"{"hash":"000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"}"#
        );

        let data2: TestData = serde_json::from_str(&json).unwrap();
        assert_eq!(data2.hash, MAIN_NET_GENESIS_HASH);
    }
}
