#![deny(unsafe_code)]
//! # dna-vm
//!
//! A miniature virtual machine for lifeform Dna and the exhaustive analysis
//! built on it.
//!
//! [`run`] is a pure function of a decoded [`Program`](dna_types::Program) and
//! a [`Condition`](dna_types::Condition): it keeps its program counter and
//! comparison register on the stack, so it can be called from any number of
//! threads at once. [`Analyzer`] runs one lifeform against every condition of
//! a shared [`ConditionSpace`](dna_types::ConditionSpace).

pub mod analysis;
pub mod interpreter;

pub use analysis::{Analyzer, OrganismReport, Outcome};
pub use interpreter::{run, run_tokens, trace, Execution, Step};
