//! Whole-image classification.
//!
//! Walks a sequence of instruction words in order, classifies each one, and gathers
//! the results into a [`ScanReport`]. What happens at an invalid encoding is decided
//! by the configured [`InvalidPolicy`].

use serde::Serialize;
use tracing::{debug, warn};

use crate::common::constants::INSTRUCTION_BYTES;
use crate::common::error::{DecodeError, ScanError};
use crate::config::{InvalidPolicy, ScanConfig};
use crate::isa::decode::lookup;
use crate::isa::format::InstructionType;
use crate::isa::opcode::Opcode;
use crate::stats::FormatStats;

/// Classification of one word of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScanEntry {
    /// Address of the word.
    pub address: u64,
    /// The raw instruction word.
    pub word: u32,
    /// Its opcode field.
    pub opcode: Opcode,
    /// Its format, or `None` for an invalid encoding.
    pub format: Option<InstructionType>,
}

/// Result of scanning an image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// One entry per scanned word, in input order.
    pub entries: Vec<ScanEntry>,
    /// Format mix of the scanned words.
    pub stats: FormatStats,
}

/// Classifies every word of an image.
///
/// # Arguments
///
/// * `words` - Instruction words in memory order.
/// * `config` - Base address and invalid-encoding policy.
///
/// # Returns
///
/// The report, or [`ScanError::Halted`] at the first invalid word under
/// [`InvalidPolicy::Halt`].
pub fn scan(words: &[u32], config: &ScanConfig) -> Result<ScanReport, ScanError> {
    let mut report = ScanReport {
        entries: Vec::with_capacity(words.len()),
        stats: FormatStats::default(),
    };

    for (address, &word) in addresses(config.base_address).zip(words) {
        let opcode = Opcode::from_word(word);
        let outcome = lookup(opcode);
        report.stats.record(outcome);

        let format = match outcome {
            Ok(kind) => {
                debug!(address, word, %opcode, %kind, "classified");
                Some(kind)
            }
            Err(source) => match config.on_invalid {
                InvalidPolicy::Halt => return Err(halted(address, word, source)),
                InvalidPolicy::Skip => {
                    warn!(address, word, %opcode, "skipping invalid encoding");
                    None
                }
            },
        };

        report.entries.push(ScanEntry {
            address,
            word,
            opcode,
            format,
        });
    }

    Ok(report)
}

/// Word addresses starting at `base`, wrapping at the top of the address space.
fn addresses(base: u64) -> impl Iterator<Item = u64> {
    (0u64..).map(move |idx| base.wrapping_add(idx.wrapping_mul(INSTRUCTION_BYTES as u64)))
}

const fn halted(address: u64, word: u32, source: DecodeError) -> ScanError {
    ScanError::Halted {
        address,
        word,
        source,
    }
}
