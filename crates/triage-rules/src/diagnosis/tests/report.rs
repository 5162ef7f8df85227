use super::common::*;
use crate::diagnosis::report::match_pct;
use crate::diagnosis::DiagnosisReport;
use crate::knowledge::{ConditionId, KnowledgeBase, LookupError, SymptomCode};

#[test]
fn report_attaches_recommendation_of_top_match() {
    let knowledge = scenario_knowledge();
    let observed = observed(&["a"]);
    let results = knowledge.engine().diagnose(&observed);

    let report = DiagnosisReport::compose(&results, &knowledge, &observed).expect("report builds");

    let primary = report.primary.expect("top match present");
    assert_eq!(primary.condition_id.as_str(), "Y");
    assert_eq!(primary.match_pct, 100.0);
    assert_eq!(primary.recommendation, "treat Y");
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[1].coverage_label, "1/2");
    assert_eq!(report.results[1].match_pct, 50.0);
    assert!(report.ignored_symptoms.is_empty());
}

#[test]
fn report_lists_ignored_codes_and_skips_zero_primary() {
    let knowledge = scenario_knowledge();
    let observed = observed(&["Z99", "Q1"]);
    let results = knowledge.engine().diagnose(&observed);

    let report = DiagnosisReport::compose(&results, &knowledge, &observed).expect("report builds");

    assert!(report.primary.is_none());
    assert_eq!(report.results.len(), 2);
    assert_eq!(
        report.ignored_symptoms,
        vec![SymptomCode::from("Q1"), SymptomCode::from("Z99")]
    );
}

#[test]
fn report_rejects_results_from_another_rule_base() {
    let observed = observed(&["a"]);
    let results = scenario_knowledge().engine().diagnose(&observed);
    let other = knowledge(&[("W", &["a"])]);

    let err = DiagnosisReport::compose(&results, &other, &observed).expect_err("foreign results");

    assert_eq!(err, LookupError::UnknownCondition(ConditionId::from("Y")));
}

#[test]
fn percentages_round_to_one_decimal() {
    assert_eq!(match_pct(1.0 / 3.0), 33.3);
    assert_eq!(match_pct(2.0 / 3.0), 66.7);
    assert_eq!(match_pct(5.0 / 8.0), 62.5);
    assert_eq!(match_pct(0.0), 0.0);
}

#[test]
fn standard_report_recommends_hospital_for_dengue_profile() {
    let knowledge = KnowledgeBase::standard();
    let observed = observed(&["G33", "G34", "G35", "G36"]);
    let results = knowledge.engine().diagnose(&observed);

    let report = DiagnosisReport::compose(&results, &knowledge, &observed).expect("report builds");

    let primary = report.primary.expect("top match present");
    assert_eq!(primary.condition_id.as_str(), "Demam Berdarah (P07)");
    assert_eq!(primary.match_pct, 33.3);
    assert_eq!(
        primary.recommendation,
        "Segera ke rumah sakit, pantau cairan & perdarahan."
    );
}
