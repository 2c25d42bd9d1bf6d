//! Configuration for whole-image scans.
//!
//! This module defines the structures and enums that parameterize a scan. It provides:
//! 1. **Defaults:** Base address and image format used when nothing is specified.
//! 2. **Structures:** [`ScanConfig`], deserialized from JSON with per-field defaults.
//! 3. **Enums:** Memory image formats and the invalid-encoding policy.
//!
//! Configuration is supplied as a JSON file (`rvtype scan --config`) or built with
//! `ScanConfig::default()` and overridden field by field.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ImageError;

/// Default configuration constants.
mod defaults {
    /// Address of the first word of an image (ROM images start at zero).
    pub const BASE_ADDRESS: u64 = 0x0000_0000;
}

/// Layout of a memory image file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// One byte per line as eight binary digits, four lines per little-endian word.
    #[default]
    #[serde(alias = "binary_bytes", alias = "BinaryBytes", alias = "bin")]
    Binary,
    /// One 32-bit word per line as up to eight hex digits.
    #[serde(alias = "hex_words", alias = "HexWords")]
    Hex,
    /// Raw little-endian bytes.
    #[serde(alias = "Raw", alias = "bin_raw")]
    Raw,
}

/// What a scan does when it meets an invalid encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidPolicy {
    /// Stop and report the offending word.
    #[default]
    #[serde(alias = "Halt")]
    Halt,
    /// Log the word, count it as invalid, and continue.
    #[serde(alias = "Skip")]
    Skip,
}

/// Settings for a whole-image scan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScanConfig {
    /// Address assigned to the first word; each following word is 4 bytes higher.
    #[serde(default = "ScanConfig::default_base_address")]
    pub base_address: u64,

    /// Format of the image file.
    #[serde(default)]
    pub image_format: ImageFormat,

    /// Invalid-encoding policy.
    #[serde(default)]
    pub on_invalid: InvalidPolicy,
}

impl ScanConfig {
    /// Returns the default base address.
    const fn default_base_address() -> u64 {
        defaults::BASE_ADDRESS
    }

    /// Parses a configuration from JSON text.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ImageError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ImageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            base_address: defaults::BASE_ADDRESS,
            image_format: ImageFormat::default(),
            on_invalid: InvalidPolicy::default(),
        }
    }
}
