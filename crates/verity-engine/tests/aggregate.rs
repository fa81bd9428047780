use verity_core::form::{Consistency, FormState};
use verity_core::keys::{CriterionKey, EvidenceKey};
use verity_core::numeric::NumericInput;
use verity_engine::aggregate;
use verity_engine::aggregate::{CONSISTENT_BOOST, INCONSISTENT_RESTRICTED, INCONSISTENT_SOCIAL};
use verity_engine::config::EngineConfig;
use verity_instruments::ids;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn empty_form_yields_all_zero_evidence() {
    let evidence = aggregate(&EngineConfig::default(), &FormState::default());
    assert!(evidence.iter().all(|(_, v)| v == 0.0));
    assert_eq!(evidence.iter().count(), EvidenceKey::ALL.len());
}

#[test]
fn observation_scores_seed_criteria() {
    let mut form = FormState::default();
    form.observation.insert(CriterionKey::A1, 2.0.into());
    form.observation.insert(CriterionKey::B3, NumericInput::Text("1".into()));
    form.observation.insert(CriterionKey::B4, NumericInput::Number(f64::NAN));
    form.observation.insert(CriterionKey::A2, NumericInput::Text("?".into()));

    let evidence = aggregate(&EngineConfig::default(), &form);
    assert_eq!(evidence.get(EvidenceKey::A1), 2.0);
    assert_eq!(evidence.get(EvidenceKey::B3), 1.0);
    assert_eq!(evidence.get(EvidenceKey::B4), 0.0);
    assert_eq!(evidence.get(EvidenceKey::A2), 0.0);
}

#[test]
fn flags_contribute_exactly_one() {
    let mut form = FormState::default();
    form.history.early_onset = true;
    form.history.masking = true;
    form.differentials.trauma = true;
    form.differentials.language_disorder = true;

    let evidence = aggregate(&EngineConfig::default(), &form);
    assert_eq!(evidence.get(EvidenceKey::OnsetEarly), 1.0);
    assert_eq!(evidence.get(EvidenceKey::Masking), 1.0);
    assert_eq!(evidence.get(EvidenceKey::AltTrauma), 1.0);
    assert_eq!(evidence.get(EvidenceKey::LangDisorder), 1.0);
    assert_eq!(evidence.get(EvidenceKey::Impairment), 0.0);
    assert_eq!(evidence.get(EvidenceKey::AltAdhd), 0.0);
}

#[test]
fn anxiety_and_depression_share_one_accumulator() {
    let mut form = FormState::default();
    form.differentials.anxiety = true;
    form.differentials.depression = true;
    let evidence = aggregate(&EngineConfig::default(), &form);
    assert_eq!(evidence.get(EvidenceKey::AltAnxiety), 1.0);

    form.differentials.anxiety = false;
    let evidence = aggregate(&EngineConfig::default(), &form);
    assert_eq!(evidence.get(EvidenceKey::AltAnxiety), 1.0);
}

#[test]
fn other_differential_is_any_of_fasd_tics_or_text() {
    let config = EngineConfig::default();
    let mut form = FormState::default();
    form.differentials.other = "   ".to_string();
    assert_eq!(aggregate(&config, &form).get(EvidenceKey::AltOther), 0.0);

    form.differentials.other = "selective mutism".to_string();
    assert_eq!(aggregate(&config, &form).get(EvidenceKey::AltOther), 1.0);

    form.differentials.other.clear();
    form.differentials.fasd = true;
    form.differentials.tics = true;
    assert_eq!(aggregate(&config, &form).get(EvidenceKey::AltOther), 1.0);
}

#[test]
fn severity_deltas_are_added() {
    let mut form = FormState::default();
    form.select(ids::SRS2, "communication", "Severe");
    form.select(ids::SRS2, "awareness", "Mild");
    form.select(ids::ABAS3, "conceptual", "Extremely Low");

    let evidence = aggregate(&EngineConfig::default(), &form);
    assert!(approx(evidence.get(EvidenceKey::A1), 0.7 + 0.3));
    assert!(approx(evidence.get(EvidenceKey::A2), 0.7));
    assert!(approx(evidence.get(EvidenceKey::IntellectualDisability), 0.8));
    assert!(approx(evidence.get(EvidenceKey::Impairment), 0.5));
}

#[test]
fn unmapped_or_unknown_severities_contribute_nothing() {
    let mut form = FormState::default();
    form.select(ids::SRS2, "awareness", "Average");
    form.select(ids::SRS2, "cognition", "Profound");
    form.select(ids::SRS2, "not_a_domain", "Severe");
    form.select("gars", "total", "Severe");

    let evidence = aggregate(&EngineConfig::default(), &form);
    assert!(evidence.iter().all(|(_, v)| v == 0.0));
}

#[test]
fn consistent_rating_boosts_five_criteria() {
    let mut form = FormState::default();
    form.consistency = Consistency::Consistent;
    let evidence = aggregate(&EngineConfig::default(), &form);

    for key in [EvidenceKey::A1, EvidenceKey::A2, EvidenceKey::A3, EvidenceKey::B2, EvidenceKey::B3] {
        assert_eq!(evidence.get(key), CONSISTENT_BOOST);
    }
    assert_eq!(evidence.get(EvidenceKey::B1), 0.0);
    assert_eq!(evidence.get(EvidenceKey::B4), 0.0);
}

#[test]
fn inconsistent_rating_lowers_social_and_restricted() {
    let mut form = FormState::default();
    form.consistency = Consistency::Inconsistent;
    let evidence = aggregate(&EngineConfig::default(), &form);

    for key in [EvidenceKey::A1, EvidenceKey::A2, EvidenceKey::A3] {
        assert_eq!(evidence.get(key), INCONSISTENT_SOCIAL);
    }
    for key in [EvidenceKey::B2, EvidenceKey::B3] {
        assert_eq!(evidence.get(key), INCONSISTENT_RESTRICTED);
    }
    assert_eq!(evidence.get(EvidenceKey::B1), 0.0);
}

#[test]
fn consistency_constants_match_calibration() {
    assert_eq!(CONSISTENT_BOOST, 0.6);
    assert_eq!(INCONSISTENT_SOCIAL, -0.4);
    assert_eq!(INCONSISTENT_RESTRICTED, -0.3);
}
