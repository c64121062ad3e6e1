//! The Dna interpreter.
//!
//! A run has two pieces of state, both local to the call: the position of the
//! next instruction and a one-bit comparison register. After each instruction
//! execution moves on by one, plus the offset of any jump taken, so a jump of
//! `d` at position `p` resumes at `p + 1 + d`. Running off the end yields
//! [`Action::Nothing`]; every step advances by at least one, so a run takes at
//! most `program.len()` steps.

use dna_types::{Action, Condition, DnaError, Instruction, Program};
use serde::Serialize;
use tracing::trace;

/// One executed instruction, as recorded by [`trace`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Position of the instruction in the program.
    pub position: usize,
    /// The instruction executed.
    pub instruction: Instruction,
    /// Comparison register after the instruction.
    pub register: bool,
}

/// The result of a traced run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Execution {
    pub action: Action,
    pub steps: Vec<Step>,
}

/// Run a decoded program against one condition.
pub fn run(program: &Program, condition: &Condition) -> Action {
    execute(program, condition, |_, _, _| {})
}

/// Decode raw opcode tokens and run them against one condition.
///
/// Fails with [`DnaError`] if any token is not a recognised opcode.
pub fn run_tokens<S: AsRef<str>>(tokens: &[S], condition: &Condition) -> Result<Action, DnaError> {
    let program = Program::decode(tokens)?;
    Ok(run(&program, condition))
}

/// Run a program and record every instruction executed.
pub fn trace(program: &Program, condition: &Condition) -> Execution {
    let mut steps = Vec::new();
    let action = execute(program, condition, |position, instruction, register| {
        trace!(position, %instruction, register, "dna step");
        steps.push(Step {
            position,
            instruction: instruction.clone(),
            register,
        });
    });
    Execution { action, steps }
}

fn execute<F>(program: &Program, condition: &Condition, mut observe: F) -> Action
where
    F: FnMut(usize, &Instruction, bool),
{
    let mut position = 0usize;
    let mut register = false;

    while let Some(instruction) = program.get(position) {
        let mut next = position + 1;
        let outcome = match instruction {
            Instruction::Nop => None,
            Instruction::Apoptosis => Some(Action::Apoptosis),
            Instruction::Final(token) => Some(Action::Final(token.clone())),
            Instruction::Test(flag) => {
                register = condition.is(*flag);
                None
            }
            Instruction::Jump(offset) => {
                next += usize::from(*offset);
                None
            }
            Instruction::JumpIf(offset) => {
                if register {
                    next += usize::from(*offset);
                }
                None
            }
        };

        observe(position, instruction, register);
        if let Some(action) = outcome {
            return action;
        }
        position = next;
    }

    Action::Nothing
}
