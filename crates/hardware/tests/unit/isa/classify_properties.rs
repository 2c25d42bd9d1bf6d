//! Opcode Classification Properties — Full Opcode Domain.
//!
//! Verifies that `classify()` produces the right format for every concrete
//! opcode pattern, and that it is total, gated on bits `[1:0]`, deterministic,
//! and blind to everything above bit 6 of an instruction word.
//!
//! # Coverage Matrix
//!
//! - R-type:  OP_REG, OP_REG_32
//! - I-type:  OP_IMM, OP_IMM_32, OP_LOAD, OP_JALR
//! - S-type:  OP_STORE
//! - B-type:  OP_BRANCH
//! - U-type:  OP_LUI, OP_AUIPC
//! - J-type:  OP_JAL
//! - Invalid: low-bit gate, reserved U-type slots, reserved store/jump slots

use proptest::prelude::*;
use rstest::rstest;

use rvtype_core::isa::rv64i::opcodes as op;
use rvtype_core::isa::{InstructionType, Opcode, classify, classify_bits, classify_word};
use rvtype_core::DecodeError;

use crate::common::builder::WordBuilder;
use crate::common::opcode;

use InstructionType::{
    ConditionalBranch, JumpAndLink, JumpAndLinkRegister, Load, RegisterImmediate,
    RegisterRegister, Store, UpperImmediate,
};

// ──────────────────────────────────────────────────────────
// Reference model
// ──────────────────────────────────────────────────────────

/// The classification rules written as one match over `(bit6, bit5, bit4, bit3, bit2)`,
/// independently of the library's if/else tree.
fn reference(raw: u8) -> Option<InstructionType> {
    if raw & 0b11 != 0b11 {
        return None;
    }
    let bit = |n: u8| (raw >> n) & 1 == 1;
    match (bit(6), bit(5), bit(4), bit(3), bit(2)) {
        (_, true, true, _, false) => Some(RegisterRegister),
        (_, false, true, _, false) => Some(RegisterImmediate),
        (false, _, true, false, true) => Some(UpperImmediate),
        (_, _, true, _, _) => None,
        (true, _, false, true, _) => Some(JumpAndLink),
        (true, _, false, false, false) => Some(ConditionalBranch),
        (true, true, false, false, true) => Some(JumpAndLinkRegister),
        (true, false, false, false, true) => None,
        (false, false, false, _, _) => Some(Load),
        (false, true, false, false, false) => Some(Store),
        (false, true, false, _, _) => None,
    }
}

// ══════════════════════════════════════════════════════════
// 1. Concrete scenarios
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::register_register("0110011", RegisterRegister)]
#[case::register_immediate("0010011", RegisterImmediate)]
#[case::lui("0110111", UpperImmediate)]
#[case::auipc("0010111", UpperImmediate)]
#[case::jal("1101111", JumpAndLink)]
#[case::branch("1100011", ConditionalBranch)]
#[case::jalr("1100111", JumpAndLinkRegister)]
#[case::load("0000011", Load)]
#[case::store("0100011", Store)]
fn scenario_classifies(#[case] bits: &str, #[case] expected: InstructionType) {
    assert_eq!(classify(opcode(bits)), Ok(expected));
}

#[test]
fn scenario_all_zero_is_invalid() {
    let zero = opcode("0000000");
    assert_eq!(
        classify(zero),
        Err(DecodeError::InvalidEncoding { opcode: zero })
    );
}

#[test]
fn scenario_upper_immediate_reserved_slots_are_invalid() {
    let reserved: Vec<Opcode> = Opcode::all()
        .filter(|o| o.bit(4) && o.bit(5) && o.bit(2) && (o.bit(3) || o.bit(6)))
        .collect();
    assert_eq!(reserved.len(), 12);
    for o in reserved {
        assert!(classify(o).is_err(), "opcode {o} should be invalid");
    }
}

// ══════════════════════════════════════════════════════════
// 2. Named base-ISA opcodes
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(op::OP_LOAD, Load)]
#[case(op::OP_IMM, RegisterImmediate)]
#[case(op::OP_AUIPC, UpperImmediate)]
#[case(op::OP_IMM_32, RegisterImmediate)]
#[case(op::OP_STORE, Store)]
#[case(op::OP_REG, RegisterRegister)]
#[case(op::OP_LUI, UpperImmediate)]
#[case(op::OP_REG_32, RegisterRegister)]
#[case(op::OP_BRANCH, ConditionalBranch)]
#[case(op::OP_JALR, JumpAndLinkRegister)]
#[case(op::OP_JAL, JumpAndLink)]
fn base_opcode_formats(#[case] raw: u8, #[case] expected: InstructionType) {
    assert_eq!(classify_bits(raw), Ok(expected));
}

#[test]
fn tree_only_tests_the_bits_it_names() {
    // FENCE shares the Load leaf and SYSTEM shares the register-register leaf.
    assert_eq!(classify_bits(op::OP_MISC_MEM), Ok(Load));
    assert_eq!(classify_bits(op::OP_SYSTEM), Ok(RegisterRegister));
}

// ══════════════════════════════════════════════════════════
// 3. Whole-domain properties
// ══════════════════════════════════════════════════════════

#[test]
fn total_and_matches_reference_model() {
    for o in Opcode::all() {
        let expected = reference(o.value()).ok_or(DecodeError::InvalidEncoding { opcode: o });
        assert_eq!(classify(o), expected, "opcode {o}");
    }
}

#[test]
fn outcome_distribution() {
    let valid: Vec<InstructionType> = Opcode::all().filter_map(|o| classify(o).ok()).collect();
    assert_eq!(valid.len(), 22);

    let count = |kind| valid.iter().filter(|&&k| k == kind).count();
    assert_eq!(count(RegisterRegister), 4);
    assert_eq!(count(RegisterImmediate), 4);
    assert_eq!(count(UpperImmediate), 2);
    assert_eq!(count(JumpAndLink), 4);
    assert_eq!(count(ConditionalBranch), 2);
    assert_eq!(count(JumpAndLinkRegister), 1);
    assert_eq!(count(Load), 4);
    assert_eq!(count(Store), 1);
}

#[test]
fn out_of_range_values_are_rejected() {
    for raw in 0x80..=u8::MAX {
        assert_eq!(classify_bits(raw), Err(DecodeError::OpcodeOutOfRange(raw)));
    }
}

proptest! {
    #[test]
    fn low_bit_gate(raw in 0u8..=0x7F) {
        prop_assume!(raw & 0b11 != 0b11);
        let invalid = matches!(
            classify_bits(raw),
            Err(DecodeError::InvalidEncoding { .. })
        );
        prop_assert!(invalid, "opcode {:#04x} passed the low-bit gate", raw);
    }

    #[test]
    fn deterministic(raw in 0u8..=0x7F) {
        prop_assert_eq!(classify_bits(raw), classify_bits(raw));
    }

    #[test]
    fn word_classification_ignores_upper_bits(
        raw in 0u8..=0x7F,
        rd in 0u32..32,
        funct3 in 0u32..8,
        rs1 in 0u32..32,
        rs2 in 0u32..32,
        funct7 in 0u32..128,
    ) {
        let word = WordBuilder::new()
            .opcode(raw)
            .rd(rd)
            .funct3(funct3)
            .rs1(rs1)
            .rs2(rs2)
            .funct7(funct7)
            .build();
        prop_assert_eq!(classify_word(word), classify_bits(raw));
    }
}
