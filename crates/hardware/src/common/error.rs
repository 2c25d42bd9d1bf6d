//! Decode and image error definitions.
//!
//! This module defines the error types reported by the classifier and its consumers. It provides:
//! 1. **Decode Errors:** Invalid encodings and out-of-range opcode values.
//! 2. **Scan Errors:** Invalid encodings that stop a whole-image scan.
//! 3. **Image Errors:** I/O and format failures while reading memory images or configuration.
//!
//! None of these is ever raised as a panic; each is an ordinary return value and the
//! caller decides whether the condition is fatal.

use std::path::PathBuf;

use thiserror::Error;

use crate::isa::opcode::Opcode;

/// Errors produced while classifying an opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The opcode bit pattern does not match any recognized instruction format.
    ///
    /// Covers every pattern the classification tree does not enumerate, including
    /// reserved and custom-extension major opcodes.
    #[error("invalid encoding: opcode {opcode}")]
    InvalidEncoding {
        /// The rejected opcode.
        opcode: Opcode,
    },

    /// A raw value wider than 7 bits was offered as an opcode.
    #[error("opcode value {0:#04x} exceeds the 7-bit opcode field")]
    OpcodeOutOfRange(u8),
}

/// Errors produced while scanning a sequence of instruction words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The scan stopped at an invalid encoding.
    #[error("halted at {address:#010x} (word {word:#010x})")]
    Halted {
        /// Address of the offending word.
        address: u64,
        /// The offending word.
        word: u32,
        /// Why the word was rejected.
        #[source]
        source: DecodeError,
    },
}

/// Errors produced while loading a memory image or scan configuration.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path of the file being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A line does not match the expected image format.
    #[error("line {line}: invalid image entry '{content}'")]
    InvalidLine {
        /// 1-based line number.
        line: usize,
        /// Offending line, trimmed.
        content: String,
    },

    /// The image ends with bytes that do not complete a 32-bit word.
    #[error("image ends with {count} byte(s) that do not form a complete word")]
    TrailingBytes {
        /// Number of leftover bytes (1 to 3).
        count: usize,
    },

    /// The scan configuration is not valid JSON for [`ScanConfig`](crate::config::ScanConfig).
    #[error("invalid scan configuration: {0}")]
    Config(#[from] serde_json::Error),
}
