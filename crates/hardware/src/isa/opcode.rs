//! The 7-bit major opcode.
//!
//! [`Opcode`] wraps bits `[6:0]` of an instruction word. Its invariant (value fits in
//! seven bits) is established at construction, so the classifier never has to mask
//! or re-check its input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::constants::OPCODE_MAX;
use crate::common::error::DecodeError;
use crate::isa::instruction::InstructionBits;

/// Bit mask selecting the two low "uncompressed instruction" bits.
const QUADRANT_MASK: u8 = 0b11;

/// A validated 7-bit major opcode, bits numbered 0 (LSB) through 6 (MSB).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Opcode(u8);

impl Opcode {
    /// Validates a raw value as an opcode.
    ///
    /// # Arguments
    ///
    /// * `raw` - Candidate opcode value.
    ///
    /// # Returns
    ///
    /// The opcode, or [`DecodeError::OpcodeOutOfRange`] if any bit above bit 6 is set.
    pub const fn new(raw: u8) -> Result<Self, DecodeError> {
        if raw > OPCODE_MAX {
            Err(DecodeError::OpcodeOutOfRange(raw))
        } else {
            Ok(Self(raw))
        }
    }

    /// Extracts the opcode field (bits 0-6) of a 32-bit instruction word.
    #[inline(always)]
    pub fn from_word(inst: u32) -> Self {
        Self(inst.opcode() as u8)
    }

    /// Builds an opcode from the low seven bits of `raw`, discarding the rest.
    #[inline(always)]
    pub(crate) const fn truncate(raw: u8) -> Self {
        Self(raw & OPCODE_MAX)
    }

    /// Returns the opcode as a plain integer in `0..=127`.
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` if bit `n` is set.
    ///
    /// Bits above 6 always read as zero.
    #[inline(always)]
    pub const fn bit(self, n: u32) -> bool {
        n < 7 && (self.0 >> n) & 1 == 1
    }

    /// Returns `true` if bits `[1:0]` are both set, the first gate for every base-ISA encoding.
    #[inline(always)]
    pub const fn low_bits_set(self) -> bool {
        self.0 & QUADRANT_MASK == QUADRANT_MASK
    }

    /// Iterates over all 128 opcode values in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=OPCODE_MAX).map(Self)
    }
}

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> Self {
        opcode.0
    }
}

impl fmt::Display for Opcode {
    /// Formats the opcode as seven binary digits, `bit6…bit0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0b{:07b}", self.0)
    }
}
