//! The canonical set of every distinguishable arena condition.

use std::collections::HashSet;

use serde::Serialize;

use crate::condition::{Condition, Flag};

/// Every distinguishable [`Condition`], deduplicated and sorted by
/// (canonical-form length, canonical form).
///
/// Computed once with [`ConditionSpace::generate`] and then shared read-only
/// by whoever needs it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConditionSpace {
    conditions: Vec<Condition>,
}

impl ConditionSpace {
    /// Enumerate all combinations of the `NSEWCG` alphabet, collapse the ones
    /// that denote the same condition once the neighbor flag is derived, and
    /// sort the survivors.
    ///
    /// The neighbor flag counts diagonal neighbours, so `G` and `CG` are real
    /// states alongside the 32 assignments of the five independent flags.
    pub fn generate() -> Self {
        let mut unique: HashSet<Condition> = (0..=Flag::ALL.len())
            .flat_map(combinations)
            .map(Condition::from_flags)
            .collect();
        unique.insert(Condition::from_flags(Flag::ALL));

        let mut conditions: Vec<Condition> = unique.into_iter().collect();
        conditions.sort();
        Self { conditions }
    }

    /// The conditions in enumeration order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Condition> {
        self.conditions.iter()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn contains(&self, condition: &Condition) -> bool {
        self.conditions.binary_search(condition).is_ok()
    }
}

impl<'a> IntoIterator for &'a ConditionSpace {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}

/// Every `k`-element subset of the flag alphabet, each listed in alphabet order.
fn combinations(k: usize) -> impl Iterator<Item = Vec<Flag>> {
    let width = Flag::ALL.len();
    (0u32..1 << width)
        .filter(move |mask| mask.count_ones() as usize == k)
        .map(move |mask| {
            (0..width)
                .filter(|&bit| mask & (1 << bit) != 0)
                .map(|bit| Flag::ALL[bit])
                .collect()
        })
}
