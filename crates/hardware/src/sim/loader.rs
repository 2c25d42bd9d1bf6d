//! Memory image loader.
//!
//! This module reads program images into a sequence of 32-bit instruction words. It supports:
//! 1. **Binary bytes:** One byte per line written as eight `0`/`1` digits. Every four lines
//!    form one little-endian word, so the first line of a group holds bits `[7:0]`.
//! 2. **Hex words:** One word per line, up to eight hex digits, optional `0x` prefix.
//! 3. **Raw:** Little-endian bytes straight from a binary file.
//!
//! In the text formats, blank lines and lines starting with `#` or `//` are ignored.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::constants::{IMAGE_BYTE_DIGITS, IMAGE_WORD_DIGITS, INSTRUCTION_BYTES};
use crate::common::error::ImageError;
use crate::config::ImageFormat;

/// Reads a memory image from disk.
///
/// # Arguments
///
/// * `path` - Path to the image file.
/// * `format` - Layout of the file.
///
/// # Returns
///
/// The instruction words in file order.
pub fn load_image(path: impl AsRef<Path>, format: ImageFormat) -> Result<Vec<u32>, ImageError> {
    let path = path.as_ref();
    let io_err = |source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    };

    let words = match format {
        ImageFormat::Raw => words_from_le_bytes(&fs::read(path).map_err(io_err)?)?,
        ImageFormat::Binary | ImageFormat::Hex => {
            parse_image(&fs::read_to_string(path).map_err(io_err)?, format)?
        }
    };

    info!(path = %path.display(), ?format, words = words.len(), "loaded memory image");
    Ok(words)
}

/// Parses an in-memory image.
///
/// For [`ImageFormat::Raw`] the UTF-8 bytes of `text` are used as the image.
pub fn parse_image(text: &str, format: ImageFormat) -> Result<Vec<u32>, ImageError> {
    match format {
        ImageFormat::Binary => parse_binary_bytes(text),
        ImageFormat::Hex => parse_hex_words(text),
        ImageFormat::Raw => words_from_le_bytes(text.as_bytes()),
    }
}

/// Parses a byte-per-line binary image.
pub fn parse_binary_bytes(text: &str) -> Result<Vec<u32>, ImageError> {
    let mut bytes = Vec::new();
    for (line, content) in entries(text) {
        let valid = content.len() == IMAGE_BYTE_DIGITS
            && content.bytes().all(|c| c == b'0' || c == b'1');
        let byte = valid
            .then(|| u8::from_str_radix(content, 2).ok())
            .flatten()
            .ok_or_else(|| invalid_line(line, content))?;
        bytes.push(byte);
    }
    words_from_le_bytes(&bytes)
}

/// Parses a word-per-line hex image.
pub fn parse_hex_words(text: &str) -> Result<Vec<u32>, ImageError> {
    entries(text)
        .map(|(line, content)| {
            let digits = content
                .strip_prefix("0x")
                .or_else(|| content.strip_prefix("0X"))
                .unwrap_or(content);
            let valid = (1..=IMAGE_WORD_DIGITS).contains(&digits.len())
                && digits.bytes().all(|c| c.is_ascii_hexdigit());
            valid
                .then(|| u32::from_str_radix(digits, 16).ok())
                .flatten()
                .ok_or_else(|| invalid_line(line, content))
        })
        .collect()
}

/// Assembles little-endian bytes into words.
///
/// # Returns
///
/// [`ImageError::TrailingBytes`] if the length is not a multiple of four.
pub fn words_from_le_bytes(bytes: &[u8]) -> Result<Vec<u32>, ImageError> {
    let chunks = bytes.chunks_exact(INSTRUCTION_BYTES);
    let count = chunks.remainder().len();
    if count != 0 {
        return Err(ImageError::TrailingBytes { count });
    }
    Ok(chunks
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

/// Renders a word as eight uppercase hex digits, e.g. `00A00513`.
pub fn word_to_hex(word: u32) -> String {
    format!("{word:08X}")
}

/// Yields `(line number, trimmed content)` for every non-blank, non-comment line.
fn entries(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, raw)| (idx + 1, raw.trim()))
        .filter(|(_, content)| {
            !content.is_empty() && !content.starts_with('#') && !content.starts_with("//")
        })
}

fn invalid_line(line: usize, content: &str) -> ImageError {
    ImageError::InvalidLine {
        line,
        content: content.to_string(),
    }
}
