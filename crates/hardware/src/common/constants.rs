//! System-wide constants.
//!
//! Widths and masks shared by the opcode model, the lookup table and the image loader.

/// Instruction word size in bytes.
pub const INSTRUCTION_BYTES: usize = 4;

/// Width of the major opcode field in bits.
pub const OPCODE_BITS: u32 = 7;

/// Number of distinct opcode values (2^7).
pub const OPCODE_COUNT: usize = 1 << OPCODE_BITS;

/// Largest value representable in the opcode field.
pub const OPCODE_MAX: u8 = 0x7F;

/// Number of binary digits on one line of a byte-per-line memory image.
pub const IMAGE_BYTE_DIGITS: usize = 8;

/// Maximum number of hex digits on one line of a word-per-line memory image.
pub const IMAGE_WORD_DIGITS: usize = 8;
