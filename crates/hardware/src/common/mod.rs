//! Common utilities and types shared by the classifier and its consumers.
//!
//! This module provides:
//! 1. **Constants:** Instruction and opcode field widths.
//! 2. **Error Handling:** Decode, scan and memory-image error types.

/// Common constants used throughout the crate.
pub mod constants;

/// Error types for decoding and image loading.
pub mod error;

pub use constants::{INSTRUCTION_BYTES, OPCODE_COUNT, OPCODE_MAX};
pub use error::{DecodeError, ImageError, ScanError};
