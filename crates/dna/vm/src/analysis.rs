//! Exhaustive behaviour analysis: run a lifeform's Dna under every
//! condition it could ever observe.

use std::collections::BTreeMap;

use dna_types::{Action, Condition, ConditionSpace, Lifeform};
use serde::Serialize;
use tracing::debug;

use crate::interpreter;

/// The action chosen under one condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub condition: Condition,
    pub action: Action,
}

/// Everything one lifeform would do, one outcome per condition in space order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrganismReport {
    pub id: u64,
    pub generation: u64,
    pub alive: bool,
    pub energy: f64,
    pub outcomes: Vec<Outcome>,
}

impl OrganismReport {
    /// How many conditions lead to each action.
    pub fn action_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for outcome in &self.outcomes {
            *counts.entry(outcome.action.to_string()).or_insert(0) += 1;
        }
        counts
    }
}

/// Runs lifeforms against a shared [`ConditionSpace`].
#[derive(Clone, Copy, Debug)]
pub struct Analyzer<'a> {
    space: &'a ConditionSpace,
}

impl<'a> Analyzer<'a> {
    pub fn new(space: &'a ConditionSpace) -> Self {
        Self { space }
    }

    /// Run the lifeform's Dna once per condition.
    pub fn analyze(&self, lifeform: &Lifeform) -> OrganismReport {
        let outcomes: Vec<Outcome> = self
            .space
            .iter()
            .map(|condition| Outcome {
                condition: *condition,
                action: interpreter::run(&lifeform.dna, condition),
            })
            .collect();

        debug!(
            lifeform = lifeform.id,
            generation = lifeform.generation,
            dna_len = lifeform.dna.len(),
            conditions = outcomes.len(),
            "Lifeform analyzed"
        );

        OrganismReport {
            id: lifeform.id,
            generation: lifeform.generation,
            alive: lifeform.alive,
            energy: lifeform.energy,
            outcomes,
        }
    }

    /// Analyze a batch, keeping input order.
    pub fn analyze_all<'l, I>(&self, lifeforms: I) -> Vec<OrganismReport>
    where
        I: IntoIterator<Item = &'l Lifeform>,
    {
        lifeforms
            .into_iter()
            .map(|lifeform| self.analyze(lifeform))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dna_types::Program;

    fn lifeform(id: u64, tokens: &[&str]) -> Lifeform {
        Lifeform::new(id, 1, true, 10.0, Program::decode(tokens).unwrap())
    }

    fn action_under<'r>(report: &'r OrganismReport, flags: &str) -> &'r Action {
        let condition: Condition = flags.parse().unwrap();
        &report
            .outcomes
            .iter()
            .find(|outcome| outcome.condition == condition)
            .unwrap()
            .action
    }

    #[test]
    fn one_outcome_per_condition_in_order() {
        let space = ConditionSpace::generate();
        let report = Analyzer::new(&space).analyze(&lifeform(1, &["FINAL_MOVE_NORTH"]));
        assert_eq!(report.outcomes.len(), space.len());
        for (outcome, condition) in report.outcomes.iter().zip(&space) {
            assert_eq!(&outcome.condition, condition);
        }
    }

    #[test]
    fn crowd_avoider_report() {
        let space = ConditionSpace::generate();
        let lf = lifeform(
            5,
            &[
                "IS_CROWDED",
                "CJMP1",
                "JMP1",
                "FINAL_MOVE_RANDOM",
                "IS_NORTH_OCCUPIED",
                "CJMP1",
                "FINAL_MOVE_NORTH",
            ],
        );
        let report = Analyzer::new(&space).analyze(&lf);

        assert_eq!(
            action_under(&report, "C"),
            &Action::Final("FINAL_MOVE_RANDOM".into())
        );
        assert_eq!(action_under(&report, "N"), &Action::Nothing);
        assert_eq!(
            action_under(&report, ""),
            &Action::Final("FINAL_MOVE_NORTH".into())
        );
    }

    #[test]
    fn action_counts_cover_space() {
        let space = ConditionSpace::generate();
        let lf = lifeform(2, &["IS_NEIGHBOR", "CJMP1", "APOPTOSIS"]);
        let report = Analyzer::new(&space).analyze(&lf);
        let counts = report.action_counts();
        assert_eq!(counts.values().sum::<usize>(), space.len());
        // Only "", "C" lack a neighbor.
        assert_eq!(counts.get("APOPTOSIS"), Some(&2));
        assert_eq!(counts.get("NOTHING"), Some(&(space.len() - 2)));
    }

    #[test]
    fn analyze_all_keeps_order() {
        let space = ConditionSpace::generate();
        let lifeforms = vec![lifeform(3, &[]), lifeform(1, &["APOPTOSIS"]), lifeform(2, &[])];
        let reports = Analyzer::new(&space).analyze_all(&lifeforms);
        let ids: Vec<u64> = reports.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn report_serializes_conditions_as_forms() {
        let space = ConditionSpace::generate();
        let report = Analyzer::new(&space).analyze(&lifeform(9, &[]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcomes"][0]["condition"], "");
        assert_eq!(json["outcomes"][0]["action"], "NOTHING");
        assert_eq!(json["outcomes"][33]["condition"], "NSEWCG");
    }
}
