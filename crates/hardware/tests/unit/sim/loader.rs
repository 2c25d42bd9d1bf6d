//! # Memory Image Loader Tests
//!
//! Byte assembly, line validation, comment handling and file loading for the
//! binary-byte, hex-word and raw image formats.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use rvtype_core::config::ImageFormat;
use rvtype_core::sim::loader::{
    load_image, parse_binary_bytes, parse_hex_words, parse_image, word_to_hex,
    words_from_le_bytes,
};
use rvtype_core::ImageError;

use crate::common::builder::{binary_image, hex_image};

/// `addi a0, zero, 10`, `jal zero, 0`, `sw a0, 0(sp)`.
const PROGRAM: [u32; 3] = [0x00A0_0513, 0x0000_006F, 0x00A1_2023];

fn temp_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write temp file");
    file
}

// ══════════════════════════════════════════════════════════
// 1. Binary-byte images
// ══════════════════════════════════════════════════════════

#[test]
fn binary_round_trips_a_program() {
    let words = parse_binary_bytes(&binary_image(&PROGRAM)).expect("valid image");
    assert_eq!(words, PROGRAM.to_vec());
}

#[test]
fn binary_first_line_is_least_significant_byte() {
    let text = "11111111\n00000000\n00000000\n00000000\n";
    assert_eq!(parse_binary_bytes(text).ok(), Some(vec![0x0000_00FF]));
}

#[test]
fn binary_skips_blank_and_comment_lines() {
    let text = format!("# boot ROM\n\n// word 0\n{}", binary_image(&[0x13]));
    assert_eq!(parse_binary_bytes(&text).ok(), Some(vec![0x13]));
}

#[test]
fn binary_tolerates_surrounding_whitespace() {
    let text = "  00010011\r\n00000000 \n\t00000000\n00000000\n";
    assert_eq!(parse_binary_bytes(text).ok(), Some(vec![0x13]));
}

#[test]
fn binary_rejects_short_line() {
    let err = parse_binary_bytes("0001001\n").expect_err("seven digits");
    assert!(matches!(err, ImageError::InvalidLine { line: 1, .. }));
}

#[test]
fn binary_rejects_non_binary_digit() {
    let text = "00010011\n00000002\n";
    match parse_binary_bytes(text) {
        Err(ImageError::InvalidLine { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "00000002");
        }
        other => panic!("expected InvalidLine, got {other:?}"),
    }
}

#[test]
fn binary_reports_incomplete_final_word() {
    let mut text = binary_image(&[0x13]);
    text.push_str("00000001\n00000010\n");
    assert!(matches!(
        parse_binary_bytes(&text),
        Err(ImageError::TrailingBytes { count: 2 })
    ));
}

// ══════════════════════════════════════════════════════════
// 2. Hex-word images
// ══════════════════════════════════════════════════════════

#[test]
fn hex_round_trips_a_program() {
    assert_eq!(parse_hex_words(&hex_image(&PROGRAM)).ok(), Some(PROGRAM.to_vec()));
}

#[test]
fn hex_accepts_lowercase_and_prefix() {
    assert_eq!(
        parse_hex_words("0X00a00513\n0xdeadbeef\n").ok(),
        Some(vec![0x00A0_0513, 0xDEAD_BEEF])
    );
}

#[test]
fn hex_rejects_too_many_digits() {
    assert!(matches!(
        parse_hex_words("123456789"),
        Err(ImageError::InvalidLine { line: 1, .. })
    ));
}

#[test]
fn hex_rejects_bare_prefix() {
    assert!(parse_hex_words("0x").is_err());
}

// ══════════════════════════════════════════════════════════
// 3. Raw bytes and formatting
// ══════════════════════════════════════════════════════════

#[test]
fn raw_bytes_are_little_endian() {
    assert_eq!(
        words_from_le_bytes(&[0x13, 0x05, 0xA0, 0x00]).ok(),
        Some(vec![0x00A0_0513])
    );
}

#[test]
fn raw_rejects_partial_word() {
    assert!(matches!(
        words_from_le_bytes(&[0x13, 0x05, 0xA0]),
        Err(ImageError::TrailingBytes { count: 3 })
    ));
}

#[test]
fn empty_image_has_no_words() {
    assert_eq!(parse_image("", ImageFormat::Binary).ok(), Some(Vec::new()));
    assert_eq!(parse_image("", ImageFormat::Hex).ok(), Some(Vec::new()));
    assert_eq!(parse_image("", ImageFormat::Raw).ok(), Some(Vec::new()));
}

#[test]
fn word_to_hex_is_eight_uppercase_digits() {
    assert_eq!(word_to_hex(0x00A0_0513), "00A00513");
    assert_eq!(word_to_hex(0x6F), "0000006F");
    assert_eq!(word_to_hex(u32::MAX), "FFFFFFFF");
}

// ══════════════════════════════════════════════════════════
// 4. Files on disk
// ══════════════════════════════════════════════════════════

#[test]
fn loads_binary_file() {
    let file = temp_file(binary_image(&PROGRAM).as_bytes());
    let words = load_image(file.path(), ImageFormat::Binary).expect("load");
    assert_eq!(words, PROGRAM.to_vec());
}

#[test]
fn loads_raw_file() {
    let bytes: Vec<u8> = PROGRAM.iter().flat_map(|w| w.to_le_bytes()).collect();
    let file = temp_file(&bytes);
    let words = load_image(file.path(), ImageFormat::Raw).expect("load");
    assert_eq!(words, PROGRAM.to_vec());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.mif");
    match load_image(&path, ImageFormat::Hex) {
        Err(ImageError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
