//! Classification statistics.
//!
//! This module tracks the instruction-format mix of a scanned image. It provides:
//! 1. **Per-format counts:** One counter for each [`InstructionType`].
//! 2. **Invalid encodings:** Words whose opcode matched no format.
//! 3. **Reporting:** A human-readable summary and JSON serialization.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::common::error::DecodeError;
use crate::isa::format::InstructionType;

/// Format mix counters for a sequence of classified words.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormatStats {
    total: u64,
    invalid: u64,
    #[serde(rename = "formats", serialize_with = "counts_by_type")]
    counts: [u64; InstructionType::ALL.len()],
}

/// Serializes the counter array as a `type -> count` map.
fn counts_by_type<S: Serializer>(counts: &[u64; 8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(InstructionType::ALL.iter().zip(counts))
}

impl FormatStats {
    /// Records the outcome of one classification.
    pub const fn record(&mut self, outcome: Result<InstructionType, DecodeError>) {
        self.total += 1;
        match outcome {
            Ok(kind) => self.counts[kind.index()] += 1,
            Err(_) => self.invalid += 1,
        }
    }

    /// Returns the number of words classified, valid or not.
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the number of words with an invalid encoding.
    pub const fn invalid(&self) -> u64 {
        self.invalid
    }

    /// Returns how many words were classified as `kind`.
    pub const fn count(&self, kind: InstructionType) -> u64 {
        self.counts[kind.index()]
    }

    /// Returns the number of words with a valid format.
    pub const fn valid(&self) -> u64 {
        self.total.saturating_sub(self.invalid)
    }

    /// Adds the counters of `other` into `self`.
    pub fn merge(&mut self, other: &Self) {
        self.total += other.total;
        self.invalid += other.invalid;
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
    }

    /// Iterates over `(type, count)` pairs in [`InstructionType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (InstructionType, u64)> + '_ {
        InstructionType::ALL
            .iter()
            .map(|&kind| (kind, self.count(kind)))
    }
}

impl fmt::Display for FormatStats {
    /// Prints one line per format followed by the invalid and total counts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Format mix")?;
        for (kind, count) in self.iter() {
            writeln!(f, "  {:<10} ({}) {:>8}", kind.name(), kind.format(), count)?;
        }
        writeln!(f, "  {:<14} {:>8}", "invalid", self.invalid)?;
        write!(f, "  {:<14} {:>8}", "total", self.total)
    }
}
