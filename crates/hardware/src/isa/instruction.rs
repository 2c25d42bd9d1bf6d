//! Instruction word bit extraction.
//!
//! Only the major opcode is read here. Register indices and immediates depend on
//! the format, and are left to the decoder stage that consumes the classification.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;

/// Trait for extracting the opcode field from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    ///
    /// The opcode determines the instruction format and operation category.
    /// Returns the 7-bit opcode value.
    fn opcode(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }
}
