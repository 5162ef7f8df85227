use super::common::*;
use crate::diagnosis::ObservedSymptoms;
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

const CONDITION_IDS: [&str; 5] = ["C1", "C2", "C3", "C4", "C5"];

/// Up to five conditions, each a non-empty subset of the fixture catalog.
fn rule_sets() -> impl Strategy<Value = Vec<Vec<&'static str>>> {
    vec(
        btree_set(proptest::sample::select(SYMPTOMS.to_vec()), 1..=SYMPTOMS.len())
            .prop_map(|set| set.into_iter().collect::<Vec<_>>()),
        0..=CONDITION_IDS.len(),
    )
}

/// Observed codes drawn from the catalog plus a few it does not know.
fn observations() -> impl Strategy<Value = Vec<&'static str>> {
    let mut pool = SYMPTOMS.to_vec();
    pool.extend(["Z98", "Z99", ""]);
    vec(proptest::sample::select(pool), 0..10)
}

fn fixture<'a>(
    rule_sets: &'a [Vec<&'static str>],
) -> Vec<(&'static str, &'a [&'static str])> {
    CONDITION_IDS
        .iter()
        .copied()
        .zip(rule_sets.iter().map(Vec::as_slice))
        .collect()
}

proptest! {
    #[test]
    fn diagnose_is_total_and_bounded(rule_sets in rule_sets(), codes in observations()) {
        let engine = engine(&fixture(&rule_sets));
        let results = engine.diagnose(&observed(&codes));

        prop_assert_eq!(results.len(), rule_sets.len());
        for result in &results {
            prop_assert!((0.0..=1.0).contains(&result.score));
            prop_assert!(result.total_rule_size >= 1);
            prop_assert_eq!(
                result.score,
                result.matched_count as f64 / result.total_rule_size as f64
            );
        }
    }

    #[test]
    fn ranking_is_sorted_and_ties_keep_declaration_order(
        rule_sets in rule_sets(),
        codes in observations(),
    ) {
        let fixture = fixture(&rule_sets);
        let engine = engine(&fixture);
        let results = engine.diagnose(&observed(&codes));

        let declared = |id: &str| {
            fixture
                .iter()
                .position(|(condition, _)| *condition == id)
                .expect("result names a declared condition")
        };

        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(
                    declared(pair[0].condition_id.as_str()) < declared(pair[1].condition_id.as_str())
                );
            }
        }
    }

    #[test]
    fn repeated_calls_are_identical(rule_sets in rule_sets(), codes in observations()) {
        let engine = engine(&fixture(&rule_sets));
        let observed = observed(&codes);

        prop_assert_eq!(engine.diagnose(&observed), engine.diagnose(&observed));
    }

    #[test]
    fn adding_a_rule_symptom_never_lowers_that_condition(
        rule_sets in rule_sets().prop_filter("needs a condition", |sets| !sets.is_empty()),
        codes in observations(),
        pick in any::<proptest::sample::Index>(),
    ) {
        let fixture = fixture(&rule_sets);
        let engine = engine(&fixture);
        let (target, symptoms) = fixture[pick.index(fixture.len())];
        let added = symptoms[pick.index(symptoms.len())];

        let before: ObservedSymptoms = observed(&codes);
        let mut after = before.clone();
        after.insert(added);

        let score_of = |observed: &ObservedSymptoms| {
            engine
                .diagnose(observed)
                .into_iter()
                .find(|result| result.condition_id.as_str() == target)
                .map(|result| result.score)
                .expect("condition is ranked")
        };

        prop_assert!(score_of(&after) >= score_of(&before));
    }
}
