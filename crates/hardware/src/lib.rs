//! RISC-V instruction format classifier.
//!
//! This crate implements the first stage of a RISC-V decoder with the following:
//! 1. **ISA:** The 7-bit opcode model and the classifier that maps an opcode to its
//!    instruction format (R, I, S, B, U, J), as a decision tree and as a generated table.
//! 2. **Images:** Readers for byte-per-line, word-per-line and raw memory images.
//! 3. **Scanning:** In-order classification of whole images with a configurable
//!    invalid-encoding policy, plus format-mix statistics.
//!
//! ```
//! use rvtype_core::{InstructionType, Opcode, classify};
//!
//! let opcode = Opcode::from_word(0x00A0_0513); // addi a0, zero, 10
//! assert_eq!(classify(opcode), Ok(InstructionType::RegisterImmediate));
//! ```

/// Common types and constants (errors, field widths).
pub mod common;
/// Scan configuration (defaults, image formats, invalid-encoding policy).
pub mod config;
/// Instruction set (opcode, formats, classifier, base opcodes).
pub mod isa;
/// Image loader and scanner.
pub mod sim;
/// Format-mix statistics.
pub mod stats;

/// Errors returned by the classifier, the scanner and the loader.
pub use crate::common::{DecodeError, ImageError, ScanError};
/// Scan configuration; use `ScanConfig::default()` or deserialize from JSON.
pub use crate::config::ScanConfig;
/// The classifier and its input and output types.
pub use crate::isa::{InstructionType, Opcode, classify, classify_word, lookup};
