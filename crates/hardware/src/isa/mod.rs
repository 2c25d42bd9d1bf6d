//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode model, the format tags, and the classifier that maps one to
//! the other.
//!
//! # Layout
//!
//! * `opcode`: The validated 7-bit major opcode and its bit predicates.
//! * `instruction`: Opcode extraction from 32-bit instruction words.
//! * `format`: Instruction format tags (R, I, S, B, U, J).
//! * `decode`: The classification tree and its generated lookup table.
//! * `rv64i`: Named base integer major opcodes.

/// Opcode classification (decision tree and lookup table).
pub mod decode;

/// Instruction format tags.
pub mod format;

/// Opcode extraction from instruction words.
pub mod instruction;

/// The 7-bit major opcode type.
pub mod opcode;

/// Base integer instruction set (major opcodes).
pub mod rv64i;

pub use decode::{FORMAT_TABLE, classify, classify_bits, classify_word, lookup};
pub use format::{Format, InstructionType};
pub use opcode::Opcode;
