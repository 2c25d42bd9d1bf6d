//! RISC-V Base Integer Instruction Set (I).
//!
//! Only the major opcodes are defined here; minor opcodes (funct3, funct7) do not
//! take part in format classification.

/// Base integer instruction set opcodes.
pub mod opcodes;
