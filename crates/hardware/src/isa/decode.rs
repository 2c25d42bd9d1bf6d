//! Opcode classifier.
//!
//! This module maps a 7-bit major opcode to the structural format of its instruction.
//! It is the first stage of decoding: once the format is known, the consumer knows
//! where the registers and immediate of the remaining 25 bits live.
//!
//! Two equivalent entry points are provided:
//! 1. **Decision tree:** [`classify`] evaluates the bit tests directly.
//! 2. **Lookup table:** [`lookup`] indexes [`FORMAT_TABLE`], which is generated at
//!    compile time by running the same tree over all 128 opcodes.
//!
//! Both are total over the opcode domain. Patterns the tree does not name (reserved,
//! custom and extension major opcodes) are reported as
//! [`DecodeError::InvalidEncoding`].

use crate::common::constants::OPCODE_COUNT;
use crate::common::error::DecodeError;
use crate::isa::format::InstructionType;
use crate::isa::opcode::Opcode;

/// Classification of every opcode, indexed by opcode value.
///
/// `None` marks an invalid encoding.
pub static FORMAT_TABLE: [Option<InstructionType>; OPCODE_COUNT] = build_table();

/// Classifies an opcode by walking the decision tree.
///
/// # Arguments
///
/// * `opcode` - The major opcode (bits 6-0 of the instruction).
///
/// # Returns
///
/// The instruction format, or [`DecodeError::InvalidEncoding`] if the bit pattern
/// matches none.
#[inline]
pub const fn classify(opcode: Opcode) -> Result<InstructionType, DecodeError> {
    match decide(opcode) {
        Some(kind) => Ok(kind),
        None => Err(DecodeError::InvalidEncoding { opcode }),
    }
}

/// Classifies an opcode with a single table read.
///
/// Always agrees with [`classify`].
#[inline(always)]
pub const fn lookup(opcode: Opcode) -> Result<InstructionType, DecodeError> {
    match FORMAT_TABLE[opcode.value() as usize] {
        Some(kind) => Ok(kind),
        None => Err(DecodeError::InvalidEncoding { opcode }),
    }
}

/// Classifies a full 32-bit instruction word by its opcode field.
#[inline]
pub fn classify_word(inst: u32) -> Result<InstructionType, DecodeError> {
    classify(Opcode::from_word(inst))
}

/// Classifies a raw byte, rejecting values that do not fit in seven bits.
///
/// # Returns
///
/// [`DecodeError::OpcodeOutOfRange`] for values above `0x7F`, otherwise the result
/// of [`classify`].
pub fn classify_bits(raw: u8) -> Result<InstructionType, DecodeError> {
    classify(Opcode::new(raw)?)
}

/// The decision tree.
///
/// Check order is significant: each test is only reached when every earlier one
/// failed.
const fn decide(opcode: Opcode) -> Option<InstructionType> {
    if !opcode.low_bits_set() {
        return None;
    }

    let b2 = opcode.bit(2);
    let b3 = opcode.bit(3);
    let b5 = opcode.bit(5);
    let b6 = opcode.bit(6);

    if opcode.bit(4) {
        // OP, OP-IMM, LUI, AUIPC
        if !b2 {
            Some(if b5 {
                InstructionType::RegisterRegister
            } else {
                InstructionType::RegisterImmediate
            })
        } else if !b3 && !b6 {
            Some(InstructionType::UpperImmediate)
        } else {
            None
        }
    } else if b6 {
        // JAL, BRANCH, JALR
        if b3 {
            Some(InstructionType::JumpAndLink)
        } else if !b2 {
            Some(InstructionType::ConditionalBranch)
        } else if b5 {
            Some(InstructionType::JumpAndLinkRegister)
        } else {
            None
        }
    } else if !b5 {
        Some(InstructionType::Load)
    } else if !b2 && !b3 {
        Some(InstructionType::Store)
    } else {
        None
    }
}

/// Evaluates [`decide`] for every opcode value.
const fn build_table() -> [Option<InstructionType>; OPCODE_COUNT] {
    let mut table = [None; OPCODE_COUNT];
    let mut raw = 0;
    while raw < OPCODE_COUNT {
        table[raw] = decide(Opcode::truncate(raw as u8));
        raw += 1;
    }
    table
}
