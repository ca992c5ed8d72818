//! Opcode values used by the standard output templates.

/// Pushes an empty byte array. Also the segwit version 0 marker.
pub const OP_0: u8 = 0x00;
pub const OP_FALSE: u8 = OP_0;
/// Data push of the next byte. Used as the witness-version byte of the
/// taproot template recognised by this crate.
pub const OP_DATA_1: u8 = 0x01;
pub const OP_DATA_20: u8 = 0x14;
pub const OP_DATA_32: u8 = 0x20;
pub const OP_DUP: u8 = 0x76;
pub const OP_EQUAL: u8 = 0x87;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_CHECKSIG: u8 = 0xac;

/// Length of a HASH160 payload (P2PKH, P2SH, P2WPKH).
pub const HASH160_SIZE: usize = 20;
/// Length of an x-only public key (P2TR).
pub const XONLY_PUBKEY_SIZE: usize = 32;
