//! A lifeform's decoded Dna.

use serde::{Deserialize, Serialize};

use crate::error::DnaError;
use crate::instruction::Instruction;

/// An immutable, ordered sequence of decoded instructions.
///
/// Serializes as its opcode tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Decode opcode tokens, failing on the first token that is not a
    /// recognised opcode.
    pub fn decode<S: AsRef<str>>(tokens: &[S]) -> Result<Self, DnaError> {
        let instructions = tokens
            .iter()
            .enumerate()
            .map(|(position, token)| Instruction::decode(token.as_ref(), position))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { instructions })
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Instruction> {
        self.instructions.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Re-encode as opcode tokens.
    pub fn tokens(&self) -> Vec<String> {
        self.instructions.iter().map(ToString::to_string).collect()
    }
}

impl From<Program> for Vec<String> {
    fn from(program: Program) -> Self {
        program.tokens()
    }
}

impl TryFrom<Vec<String>> for Program {
    type Error = DnaError;

    fn try_from(tokens: Vec<String>) -> Result<Self, Self::Error> {
        Program::decode(&tokens)
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
