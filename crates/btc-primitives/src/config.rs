//! Decoder configuration.
//!
//! The only knob is how CompactSize varints with a multi-byte prefix are
//! read. Legacy decoding reproduces the behaviour existing callers were
//! built against; strict decoding is full CompactSize.

use crate::util::VarIntMode;

/// Settings shared by every decoder that reads varints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeConfig {
    pub strict_varints: bool,
}

impl DecodeConfig {
    /// Legacy varint decoding. This is the default.
    pub fn legacy() -> Self {
        DecodeConfig { strict_varints: false }
    }

    /// Full CompactSize decoding with canonical-encoding checks.
    pub fn strict() -> Self {
        DecodeConfig { strict_varints: true }
    }

    pub fn varint_mode(&self) -> VarIntMode {
        if self.strict_varints { VarIntMode::Strict } else { VarIntMode::Legacy }
    }
}
