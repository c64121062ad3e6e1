//! Decoded Dna opcodes.

use std::fmt;

use serde::Serialize;

use crate::condition::Flag;
use crate::error::DnaError;

const NOP: &str = "NOP";
const APOPTOSIS: &str = "APOPTOSIS";
const FINAL_PREFIX: &str = "FINAL";
const JUMP_PREFIX: &str = "JMP";
const JUMP_IF_PREFIX: &str = "CJMP";

/// A single decoded instruction.
///
/// Jump operands are decoded once here, so the interpreter never looks at
/// opcode text again.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Instruction {
    /// `NOP`: no effect.
    Nop,
    /// `APOPTOSIS`: terminate, the lifeform chooses to die.
    Apoptosis,
    /// Any `FINAL*` marker, e.g. `FINAL_MOVE_NORTH`; kept verbatim.
    Final(String),
    /// `IS_*`: load the comparison register from one condition flag.
    Test(Flag),
    /// `JMP<d>`: skip `d` further instructions.
    Jump(u8),
    /// `CJMP<d>`: skip `d` further instructions when the register is set.
    JumpIf(u8),
}

impl Instruction {
    /// Decode one opcode token found at `position` in a program.
    pub fn decode(token: &str, position: usize) -> Result<Self, DnaError> {
        if token == NOP {
            return Ok(Instruction::Nop);
        }
        if token == APOPTOSIS {
            return Ok(Instruction::Apoptosis);
        }
        if token.starts_with(FINAL_PREFIX) {
            return Ok(Instruction::Final(token.to_string()));
        }
        if let Some(flag) = test_flag(token) {
            return Ok(Instruction::Test(flag));
        }
        if let Some(operand) = token.strip_prefix(JUMP_PREFIX) {
            return jump_offset(operand, token, position).map(Instruction::Jump);
        }
        if let Some(operand) = token.strip_prefix(JUMP_IF_PREFIX) {
            return jump_offset(operand, token, position).map(Instruction::JumpIf);
        }
        Err(DnaError::UnknownOpcode {
            position,
            opcode: token.to_string(),
        })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Nop => f.write_str(NOP),
            Instruction::Apoptosis => f.write_str(APOPTOSIS),
            Instruction::Final(token) => f.write_str(token),
            Instruction::Test(flag) => f.write_str(test_opcode(*flag)),
            Instruction::Jump(offset) => write!(f, "{JUMP_PREFIX}{offset}"),
            Instruction::JumpIf(offset) => write!(f, "{JUMP_IF_PREFIX}{offset}"),
        }
    }
}

fn test_flag(token: &str) -> Option<Flag> {
    Flag::ALL.into_iter().find(|flag| test_opcode(*flag) == token)
}

fn test_opcode(flag: Flag) -> &'static str {
    match flag {
        Flag::North => "IS_NORTH_OCCUPIED",
        Flag::South => "IS_SOUTH_OCCUPIED",
        Flag::East => "IS_EAST_OCCUPIED",
        Flag::West => "IS_WEST_OCCUPIED",
        Flag::Crowded => "IS_CROWDED",
        Flag::Neighbor => "IS_NEIGHBOR",
    }
}

/// A jump operand is exactly one decimal digit.
fn jump_offset(operand: &str, token: &str, position: usize) -> Result<u8, DnaError> {
    let mut digits = operand.chars();
    match (digits.next().and_then(|c| c.to_digit(10)), digits.next()) {
        (Some(offset), None) => Ok(offset as u8),
        _ => Err(DnaError::MalformedJump {
            position,
            opcode: token.to_string(),
        }),
    }
}
