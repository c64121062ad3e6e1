//! Arena conditions: what a lifeform can observe about its surroundings in
//! a single turn.
//!
//! A [`Condition`] is six booleans. Five of them are independent; the sixth,
//! "has any neighbor", is also implied by any of the four directional flags.
//! The simulator counts diagonal neighbours too, so the neighbor flag may be
//! set while all four directions are clear.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConditionParseError;

/// One observable condition flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Flag {
    /// North square occupied.
    North,
    /// South square occupied.
    South,
    /// East square occupied.
    East,
    /// West square occupied.
    West,
    /// Another lifeform shares the current square.
    Crowded,
    /// Any adjacent square (diagonals included) is occupied.
    Neighbor,
}

impl Flag {
    /// All flags in canonical order.
    pub const ALL: [Flag; 6] = [
        Flag::North,
        Flag::South,
        Flag::East,
        Flag::West,
        Flag::Crowded,
        Flag::Neighbor,
    ];

    /// The canonical flag letter.
    pub const fn letter(self) -> char {
        match self {
            Flag::North => 'N',
            Flag::South => 'S',
            Flag::East => 'E',
            Flag::West => 'W',
            Flag::Crowded => 'C',
            Flag::Neighbor => 'G',
        }
    }

    /// Look a flag up by letter (case-insensitive).
    pub fn from_letter(letter: char) -> Option<Flag> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Flag::North),
            'S' => Some(Flag::South),
            'E' => Some(Flag::East),
            'W' => Some(Flag::West),
            'C' => Some(Flag::Crowded),
            'G' => Some(Flag::Neighbor),
            _ => None,
        }
    }

    /// Whether this is one of the four cardinal direction flags.
    pub const fn is_directional(self) -> bool {
        matches!(self, Flag::North | Flag::South | Flag::East | Flag::West)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Immutable snapshot of the six observations for one lifeform at one instant.
///
/// Equality, hashing and ordering all go through the canonical form, which
/// uniquely encodes the six fields. Ordering is by canonical-form length, then
/// lexicographic, so the empty condition sorts first and `NSEWCG` last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Condition {
    north: bool,
    south: bool,
    east: bool,
    west: bool,
    crowded: bool,
    neighbor: bool,
}

impl Condition {
    /// The flag alphabet in canonical order.
    pub const FLAGS: &'static str = "NSEWCG";

    /// Build a condition from explicit values.
    ///
    /// `neighbor` is forced on when any directional flag is set.
    pub const fn new(
        north: bool,
        south: bool,
        east: bool,
        west: bool,
        crowded: bool,
        neighbor: bool,
    ) -> Self {
        Self {
            north,
            south,
            east,
            west,
            crowded,
            neighbor: neighbor || north || south || east || west,
        }
    }

    /// The condition with nothing observed.
    pub const fn empty() -> Self {
        Self::new(false, false, false, false, false, false)
    }

    /// Build a condition with exactly the given flags raised (plus the
    /// derived neighbor flag).
    pub fn from_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = Flag>,
    {
        let mut raised = [false; 6];
        for flag in flags {
            raised[flag as usize] = true;
        }
        let [north, south, east, west, crowded, neighbor] = raised;
        Self::new(north, south, east, west, crowded, neighbor)
    }

    pub const fn north(&self) -> bool {
        self.north
    }

    pub const fn south(&self) -> bool {
        self.south
    }

    pub const fn east(&self) -> bool {
        self.east
    }

    pub const fn west(&self) -> bool {
        self.west
    }

    pub const fn crowded(&self) -> bool {
        self.crowded
    }

    /// Whether any neighbor is present (explicitly or via a direction).
    pub const fn neighbor(&self) -> bool {
        self.neighbor
    }

    /// Query a flag generically.
    pub const fn is(&self, flag: Flag) -> bool {
        match flag {
            Flag::North => self.north,
            Flag::South => self.south,
            Flag::East => self.east,
            Flag::West => self.west,
            Flag::Crowded => self.crowded,
            Flag::Neighbor => self.neighbor,
        }
    }

    /// The raised flags, in canonical order.
    pub fn flags(&self) -> impl Iterator<Item = Flag> + '_ {
        Flag::ALL.into_iter().filter(|flag| self.is(*flag))
    }

    /// Concatenated letters of the raised flags in `NSEWCG` order.
    pub fn canonical_form(&self) -> String {
        self.flags().map(Flag::letter).collect()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.flags() {
            write!(f, "{}", flag.letter())?;
        }
        Ok(())
    }
}

impl Hash for Condition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_form().hash(state);
    }
}

impl Ord for Condition {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.canonical_form(), other.canonical_form());
        a.len().cmp(&b.len()).then_with(|| a.cmp(&b))
    }
}

impl PartialOrd for Condition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Condition {
    type Err = ConditionParseError;

    /// Parse flag letters in any order and case, e.g. `"NC"` or `"cn"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut seen = Vec::with_capacity(Flag::ALL.len());
        for letter in s.chars() {
            let flag = Flag::from_letter(letter).ok_or(ConditionParseError::UnknownFlag(letter))?;
            if seen.contains(&flag) {
                return Err(ConditionParseError::DuplicateFlag(flag.letter()));
            }
            seen.push(flag);
        }
        Ok(Self::from_flags(seen))
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        condition.canonical_form()
    }
}

impl TryFrom<String> for Condition {
    type Error = ConditionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn directional_flags_imply_neighbor() {
        for flag in [Flag::North, Flag::South, Flag::East, Flag::West] {
            let c = Condition::from_flags([flag]);
            assert!(c.neighbor(), "{flag} should imply neighbor");
            assert!(c.is(flag));
        }
    }

    #[test]
    fn crowded_does_not_imply_neighbor() {
        let c = Condition::from_flags([Flag::Crowded]);
        assert!(c.crowded());
        assert!(!c.neighbor());
        assert_eq!(c.canonical_form(), "C");
    }

    #[test]
    fn neighbor_can_stand_alone() {
        let c = Condition::from_flags([Flag::Neighbor]);
        assert!(c.neighbor());
        assert!(!c.north() && !c.south() && !c.east() && !c.west());
        assert_eq!(c.canonical_form(), "G");
    }

    #[test]
    fn canonical_form_is_fixed_order() {
        let c = Condition::from_flags([Flag::Crowded, Flag::West, Flag::North]);
        assert_eq!(c.canonical_form(), "NWCG");
        assert_eq!(c.to_string(), "NWCG");
        assert_eq!(Condition::empty().canonical_form(), "");
    }

    #[test]
    fn explicit_neighbor_is_redundant_with_direction() {
        let with = Condition::from_flags([Flag::East, Flag::Neighbor]);
        let without = Condition::from_flags([Flag::East]);
        assert_eq!(with, without);

        let mut set = HashSet::new();
        set.insert(with);
        assert!(set.contains(&without));
    }

    #[test]
    fn parse_accepts_any_order_and_case() {
        let c: Condition = "cw".parse().unwrap();
        assert_eq!(c.canonical_form(), "WCG");
        let c: Condition = "".parse().unwrap();
        assert_eq!(c, Condition::empty());
    }

    #[test]
    fn parse_rejects_unknown_and_duplicate_letters() {
        assert_eq!(
            "NX".parse::<Condition>().unwrap_err(),
            ConditionParseError::UnknownFlag('X')
        );
        assert_eq!(
            "NSn".parse::<Condition>().unwrap_err(),
            ConditionParseError::DuplicateFlag('N')
        );
    }

    #[test]
    fn ordering_is_length_then_lexicographic() {
        let mut conditions: Vec<Condition> = ["NSG", "C", "", "EG", "CG", "G"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        conditions.sort();
        let forms: Vec<String> = conditions.iter().map(Condition::canonical_form).collect();
        assert_eq!(forms, vec!["", "C", "G", "CG", "EG", "NSG"]);
    }

    #[test]
    fn serializes_as_canonical_string() {
        let c = Condition::from_flags([Flag::South, Flag::Crowded]);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"SCG\"");
        let restored: Condition = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, c);
        assert!(serde_json::from_str::<Condition>("\"Q\"").is_err());
    }

    #[test]
    fn flag_letters_round_trip() {
        for flag in Flag::ALL {
            assert_eq!(Flag::from_letter(flag.letter()), Some(flag));
        }
        assert_eq!(Flag::from_letter('g'), Some(Flag::Neighbor));
        assert_eq!(Flag::from_letter('?'), None);
        assert!(!Flag::Crowded.is_directional());
    }
}
