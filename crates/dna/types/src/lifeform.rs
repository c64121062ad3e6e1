//! Lifeforms as recorded in the simulator's JSON dumps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LifeformError;
use crate::program::Program;

/// A lifeform snapshot: basic stats plus its decoded Dna.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lifeform {
    pub id: u64,
    #[serde(rename = "gen")]
    pub generation: u64,
    pub alive: bool,
    pub energy: f64,
    pub dna: Program,
}

impl Lifeform {
    pub fn new(id: u64, generation: u64, alive: bool, energy: f64, dna: Program) -> Self {
        Self {
            id,
            generation,
            alive,
            energy,
            dna,
        }
    }

    /// Build a lifeform from one dump record.
    ///
    /// Stats are coerced the way the dump reader always has: integers may be
    /// written as numeric strings or integral floats, `alive` follows
    /// truthiness, and `energy` accepts numbers or numeric strings.
    pub fn from_record(record: &Value) -> Result<Self, LifeformError> {
        let fields = record.as_object().ok_or(LifeformError::NotAnObject)?;

        let id = integer(fields, "id")?;
        let generation = integer(fields, "gen")?;
        let alive = truthy(required(fields, "alive")?);
        let energy = float(fields, "energy")?;

        let tokens = match fields.get("dna") {
            None | Some(Value::Null) => return Err(LifeformError::MissingDna),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .ok_or_else(|| LifeformError::InvalidDna(item.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => return Err(LifeformError::InvalidDna(other.to_string())),
        };
        let dna = Program::decode(&tokens).map_err(|source| LifeformError::Dna { id, source })?;

        Ok(Self::new(id, generation, alive, energy, dna))
    }
}

/// 2^64: every integral float below this fits in a `u64` exactly.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

fn required<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, LifeformError> {
    fields.get(field).ok_or(LifeformError::MissingField(field))
}

fn invalid(field: &'static str, value: &Value) -> LifeformError {
    LifeformError::InvalidField {
        field,
        value: value.to_string(),
    }
}

fn integer(fields: &Map<String, Value>, field: &'static str) -> Result<u64, LifeformError> {
    let value = required(fields, field)?;
    let parsed = match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && *f < U64_LIMIT && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| invalid(field, value))
}

fn float(fields: &Map<String, Value>, field: &'static str) -> Result<f64, LifeformError> {
    let value = required(fields, field)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| invalid(field, value))
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
