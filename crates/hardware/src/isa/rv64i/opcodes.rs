//! RISC-V Base Integer (I) Opcodes.
//!
//! Defines the major opcodes (bits 6-0) for the base integer instruction set.
//! Values are `u8` so they can be handed straight to [`Opcode::new`](crate::isa::Opcode::new).

/// Load instructions (LB, LH, LW, LD, etc.).
pub const OP_LOAD: u8 = 0b0000011;

/// Memory ordering instructions (FENCE, FENCE.I).
pub const OP_MISC_MEM: u8 = 0b0001111;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u8 = 0b0010011;

/// Add Upper Immediate to PC (AUIPC).
pub const OP_AUIPC: u8 = 0b0010111;

/// 32-bit Immediate arithmetic (ADDIW, SLLIW, etc.) - RV64 only.
pub const OP_IMM_32: u8 = 0b0011011;

/// Store instructions (SB, SH, SW, SD).
pub const OP_STORE: u8 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u8 = 0b0110011;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u8 = 0b0110111;

/// 32-bit Register-Register arithmetic (ADDW, SUBW, etc.) - RV64 only.
pub const OP_REG_32: u8 = 0b0111011;

/// Conditional Branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u8 = 0b1100011;

/// Jump and Link Register (JALR).
pub const OP_JALR: u8 = 0b1100111;

/// Jump and Link (JAL).
pub const OP_JAL: u8 = 0b1101111;

/// Environment calls, breakpoints and CSR access (ECALL, EBREAK, CSRRW, etc.).
pub const OP_SYSTEM: u8 = 0b1110011;
