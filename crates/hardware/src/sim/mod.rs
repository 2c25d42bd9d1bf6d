//! Memory image loading and whole-image scanning.

/// Memory image readers (binary-byte, hex-word and raw formats).
pub mod loader;

/// In-order classification of instruction word sequences.
pub mod scanner;

pub use loader::{load_image, parse_image, word_to_hex};
pub use scanner::{ScanEntry, ScanReport, scan};
