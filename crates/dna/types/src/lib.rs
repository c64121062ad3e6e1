#![deny(unsafe_code)]
//! # dna-types
//!
//! Value types for analysing evolved lifeform Dna.
//!
//! - [`Condition`]: the six arena observations a lifeform can make in a turn
//! - [`ConditionSpace`]: every distinguishable condition, deduplicated and ordered
//! - [`Instruction`] / [`Program`]: decoded opcode sequences
//! - [`Action`]: what a program decides
//! - [`Lifeform`]: a dump record with its decoded Dna

pub mod action;
pub mod condition;
pub mod condition_space;
pub mod error;
pub mod instruction;
pub mod lifeform;
pub mod program;

pub use action::{Action, NOTHING};
pub use condition::{Condition, Flag};
pub use condition_space::ConditionSpace;
pub use error::{ActionParseError, ConditionParseError, DnaError, LifeformError};
pub use instruction::Instruction;
pub use lifeform::Lifeform;
pub use program::Program;
