//! Instruction format tags.
//!
//! An [`InstructionType`] names how the remaining 25 bits of an instruction word are
//! laid out. It carries no data beyond the tag; downstream decoders branch on it to
//! pick out registers and immediates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural encoding format of a base-ISA instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionType {
    /// Integer register-register ALU operation (OP, OP-32).
    RegisterRegister,
    /// Integer register-immediate ALU operation (OP-IMM, OP-IMM-32).
    RegisterImmediate,
    /// Upper-immediate operation (LUI, AUIPC).
    UpperImmediate,
    /// Unconditional jump and link (JAL).
    JumpAndLink,
    /// Conditional branch (BEQ, BNE, BLT, ...).
    ConditionalBranch,
    /// Indirect jump and link through a register (JALR).
    JumpAndLinkRegister,
    /// Memory load.
    Load,
    /// Memory store.
    Store,
}

/// Base-ISA format letter an [`InstructionType`] is encoded with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// Register-register.
    R,
    /// Register-immediate; also loads and JALR.
    I,
    /// Store.
    S,
    /// Branch.
    B,
    /// Upper immediate.
    U,
    /// Jump.
    J,
}

impl InstructionType {
    /// Every instruction type, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::RegisterRegister,
        Self::RegisterImmediate,
        Self::UpperImmediate,
        Self::JumpAndLink,
        Self::ConditionalBranch,
        Self::JumpAndLinkRegister,
        Self::Load,
        Self::Store,
    ];

    /// Returns the structural format the type's operands are laid out in.
    ///
    /// JALR and loads share the I-type layout with register-immediate ALU operations.
    pub const fn format(self) -> Format {
        match self {
            Self::RegisterRegister => Format::R,
            Self::RegisterImmediate | Self::JumpAndLinkRegister | Self::Load => Format::I,
            Self::UpperImmediate => Format::U,
            Self::JumpAndLink => Format::J,
            Self::ConditionalBranch => Format::B,
            Self::Store => Format::S,
        }
    }

    /// Returns a short lowercase name, e.g. `"reg-imm"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RegisterRegister => "reg-reg",
            Self::RegisterImmediate => "reg-imm",
            Self::UpperImmediate => "upper-imm",
            Self::JumpAndLink => "jal",
            Self::ConditionalBranch => "branch",
            Self::JumpAndLinkRegister => "jalr",
            Self::Load => "load",
            Self::Store => "store",
        }
    }

    /// Position of the type in [`InstructionType::ALL`].
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for InstructionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-type {}", self.format(), self.name())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::R => "R",
            Self::I => "I",
            Self::S => "S",
            Self::B => "B",
            Self::U => "U",
            Self::J => "J",
        };
        f.write_str(letter)
    }
}
