//! Error types for the Dna types crate.

use thiserror::Error;

/// Errors raised while decoding an opcode sequence into a [`Program`](crate::Program).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DnaError {
    /// The token does not belong to any opcode category.
    #[error("unknown Dna opcode {opcode:?} at position {position}")]
    UnknownOpcode {
        /// Index of the token in the program.
        position: usize,
        /// The offending token, verbatim.
        opcode: String,
    },

    /// A `JMP`/`CJMP` token whose operand is not exactly one decimal digit.
    #[error("malformed jump operand in {opcode:?} at position {position}")]
    MalformedJump {
        /// Index of the token in the program.
        position: usize,
        /// The offending token, verbatim.
        opcode: String,
    },
}

/// Errors raised while constructing a [`Lifeform`](crate::Lifeform) from a dump record.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LifeformError {
    /// The record is not a JSON object.
    #[error("lifeform record is not an object")]
    NotAnObject,

    /// A required basic stat is absent.
    #[error("missing basic stats from lifeform: no {0:?} field")]
    MissingField(&'static str),

    /// A basic stat is present but cannot be converted to its type.
    #[error("lifeform field {field:?} is not convertible: {value}")]
    InvalidField {
        /// Field name in the record.
        field: &'static str,
        /// The raw JSON value.
        value: String,
    },

    /// The record has no `dna` field (or it is null).
    #[error("missing dna from lifeform")]
    MissingDna,

    /// The `dna` field is not an array of opcode strings.
    #[error("lifeform dna is not a list of opcodes: {0}")]
    InvalidDna(String),

    /// The Dna decoded badly.
    #[error("lifeform {id} has malformed dna: {source}")]
    Dna {
        /// Identifier of the lifeform.
        id: u64,
        /// Underlying decode failure.
        #[source]
        source: DnaError,
    },
}

/// A string that is not `NOTHING`, `APOPTOSIS` or a `FINAL*` marker.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0:?} is not an action (expected NOTHING, APOPTOSIS or a FINAL marker)")]
pub struct ActionParseError(pub String);

/// Errors raised while parsing a condition from its flag letters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConditionParseError {
    /// A letter outside the `NSEWCG` alphabet.
    #[error("unknown condition flag {0:?} (expected letters from NSEWCG)")]
    UnknownFlag(char),

    /// The same letter appears twice.
    #[error("condition flag {0:?} given more than once")]
    DuplicateFlag(char),
}
