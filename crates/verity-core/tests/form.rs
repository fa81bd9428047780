use verity_core::evidence::EvidenceSet;
use verity_core::form::{Consistency, FormState, RiskTolerance};
use verity_core::keys::{CriterionKey, EvidenceKey};
use verity_core::numeric::{to_evidence_number, NumericInput};

#[test]
fn empty_document_yields_defaults() {
    let form = FormState::from_json("{}").unwrap();
    assert_eq!(form, FormState::default());
    assert_eq!(form.consistency, Consistency::Unclear);
    assert_eq!(form.risk_tolerance, RiskTolerance::Balanced);
}

#[test]
fn partial_document_parses_load_bearing_keys() {
    let json = r#"{
        "panels": { "srs2": { "awareness": "Severe", "rrb": "" } },
        "consistency": "inconsistent",
        "observation": { "A1": 2, "B4": "3", "B1": "n/a" },
        "history": { "earlyOnset": true },
        "differentials": { "adhd": true },
        "riskTolerance": "specific"
    }"#;
    let form = FormState::from_json(json).unwrap();

    assert_eq!(form.severity("srs2", "awareness"), Some("Severe"));
    assert_eq!(form.severity("srs2", "rrb"), None);
    assert_eq!(form.consistency, Consistency::Inconsistent);
    assert_eq!(form.risk_tolerance, RiskTolerance::Specific);
    assert!(form.history.early_onset);
    assert!(form.differentials.adhd);
    assert_eq!(
        to_evidence_number(form.observation.get(&CriterionKey::A1)),
        2.0
    );
    assert_eq!(
        to_evidence_number(form.observation.get(&CriterionKey::B4)),
        3.0
    );
    assert_eq!(
        to_evidence_number(form.observation.get(&CriterionKey::B1)),
        0.0
    );
}

#[test]
fn null_and_non_numeric_values_are_tolerated() {
    let json = r#"{
        "panels": { "srs2": { "awareness": null, "cognition": "Mild" } },
        "observation": { "A1": null, "A2": true, "A3": {"score": 2}, "B1": 1 },
        "instruments": [ { "name": "ADOS-2", "value": null } ]
    }"#;
    let form = FormState::from_json(json).unwrap();

    assert_eq!(form.severity("srs2", "awareness"), None);
    assert_eq!(form.severity("srs2", "cognition"), Some("Mild"));
    let selected: Vec<_> = form.selections("srs2").collect();
    assert_eq!(selected, vec![("cognition", "Mild")]);

    // present but unreadable scores stay defined and read as zero
    for key in [CriterionKey::A1, CriterionKey::A2, CriterionKey::A3] {
        assert!(form.observation.contains_key(&key));
        assert_eq!(to_evidence_number(form.observation.get(&key)), 0.0);
    }
    assert_eq!(to_evidence_number(form.observation.get(&CriterionKey::B1)), 1.0);
    assert_eq!(form.instrument_value("ADOS-2"), None);
}

#[test]
fn unknown_consistency_value_is_rejected() {
    assert!(FormState::from_json(r#"{ "consistency": "maybe" }"#).is_err());
}

#[test]
fn blank_selections_do_not_count() {
    let mut form = FormState::default();
    form.select("abas3", "social", "   ");
    assert!(!form.any_severity("abas3"));

    form.select("abas3", "conceptual", "Very Low");
    assert!(form.any_severity("abas3"));
    let selected: Vec<_> = form.selections("abas3").collect();
    assert_eq!(selected, vec![("conceptual", "Very Low")]);
}

#[test]
fn instrument_value_skips_non_numeric_entries() {
    let form = FormState::from_json(
        r#"{ "instruments": [
            { "name": "ADOS-2", "value": "pending" },
            { "name": "GARS", "value": 104 }
        ] }"#,
    )
    .unwrap();
    assert_eq!(form.instrument_value("ADOS-2"), None);
    assert_eq!(form.instrument_value("GARS"), Some(104.0));
    assert_eq!(form.instrument_value("Vineland-3"), None);
}

#[test]
fn age_months_counts_whole_months() {
    let form = FormState {
        date_of_birth: Some(jiff::civil::date(2019, 3, 15)),
        assessment_date: Some(jiff::civil::date(2024, 3, 14)),
        ..FormState::default()
    };
    assert_eq!(form.age_months().unwrap(), Some(59));
}

#[test]
fn age_months_is_none_without_both_dates() {
    let form = FormState {
        date_of_birth: Some(jiff::civil::date(2019, 3, 15)),
        ..FormState::default()
    };
    assert_eq!(form.age_months().unwrap(), None);
}

#[test]
fn birth_after_assessment_is_an_error() {
    let form = FormState {
        date_of_birth: Some(jiff::civil::date(2024, 1, 1)),
        assessment_date: Some(jiff::civil::date(2023, 1, 1)),
        ..FormState::default()
    };
    assert!(form.age_months().is_err());
}

#[test]
fn numeric_coercion_zeroes_invalid_input() {
    assert_eq!(to_evidence_number(None), 0.0);
    assert_eq!(to_evidence_number(Some(&NumericInput::Number(f64::NAN))), 0.0);
    assert_eq!(
        to_evidence_number(Some(&NumericInput::Number(f64::INFINITY))),
        0.0
    );
    assert_eq!(to_evidence_number(Some(&"abc".into())), 0.0);
    assert_eq!(to_evidence_number(Some(&" 1.5 ".into())), 1.5);
    assert_eq!(to_evidence_number(Some(&(-2.0).into())), -2.0);
}

#[test]
fn evidence_set_has_fixed_shape() {
    let set = EvidenceSet::new();
    assert_eq!(set.iter().count(), EvidenceKey::ALL.len());
    assert!(set.iter().all(|(_, v)| v == 0.0));
}

#[test]
fn evidence_set_ignores_non_finite_deltas() {
    let mut set = EvidenceSet::new();
    set.add(EvidenceKey::A1, 1.25);
    set.add(EvidenceKey::A1, f64::NAN);
    set.add(EvidenceKey::A2, f64::NEG_INFINITY);
    assert_eq!(set.get(EvidenceKey::A1), 1.25);
    assert_eq!(set.get(EvidenceKey::A2), 0.0);
}

#[test]
fn evidence_keys_round_trip_through_their_names() {
    for key in EvidenceKey::ALL {
        assert_eq!(key.as_str().parse::<EvidenceKey>().unwrap(), key);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{}\"", key.as_str()));
    }
    assert!("A5".parse::<EvidenceKey>().is_err());
}
