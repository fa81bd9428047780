use verity_core::evidence::EvidenceSet;
use verity_core::form::{FormState, RiskTolerance};
use verity_core::keys::{CriterionKey, EvidenceKey};
use verity_engine::config::EngineConfig;
use verity_engine::model::{cutpoint, score, sigmoid, Decision, LP_LIMIT};
use verity_engine::{aggregate, evaluate};

#[test]
fn zero_input_with_zero_prior_is_even_odds() {
    let config = EngineConfig {
        prior: 0.0,
        ..EngineConfig::default()
    };
    let evidence = aggregate(&config, &FormState::default());
    let result = evaluate(&config, &evidence, RiskTolerance::Balanced);

    assert_eq!(result.lp, 0.0);
    assert_eq!(result.p, 0.5);
    assert_eq!(result.p_a, 0.0);
    assert_eq!(result.p_b, 0.0);
    assert_eq!(result.decision, Decision::Above);
}

#[test]
fn empty_form_reduces_to_prior() {
    let config = EngineConfig::default();
    let evidence = aggregate(&config, &FormState::default());
    let result = evaluate(&config, &evidence, RiskTolerance::Balanced);
    assert_eq!(result.lp, config.prior);
    assert_eq!(result.p, sigmoid(config.prior));
}

#[test]
fn cutpoints_are_fixed_literals() {
    assert_eq!(cutpoint(RiskTolerance::Sensitive), 0.35);
    assert_eq!(cutpoint(RiskTolerance::Balanced), 0.5);
    assert_eq!(cutpoint(RiskTolerance::Specific), 0.7);
}

#[test]
fn maximum_observation_saturates_subscores() {
    let config = EngineConfig::default();
    let mut form = FormState::default();
    for key in CriterionKey::ALL {
        form.observation.insert(key, 3.0.into());
    }
    let evidence = aggregate(&config, &form);
    let result = evaluate(&config, &evidence, RiskTolerance::Balanced);
    assert_eq!(result.p_a, 1.0);
    assert_eq!(result.p_b, 1.0);
}

#[test]
fn subscores_clamp_negative_evidence_to_zero() {
    let mut evidence = EvidenceSet::new();
    evidence.set(EvidenceKey::A1, -5.0);
    evidence.set(EvidenceKey::B1, 40.0);
    let result = evaluate(&EngineConfig::default(), &evidence, RiskTolerance::Balanced);
    assert_eq!(result.p_a, 0.0);
    assert_eq!(result.p_b, 1.0);
}

#[test]
fn terms_follow_configured_weights() {
    let config = EngineConfig::default();
    let mut evidence = EvidenceSet::new();
    evidence.set(EvidenceKey::A1, 2.0);
    evidence.set(EvidenceKey::AltAdhd, 1.0);
    let result = evaluate(&config, &evidence, RiskTolerance::Balanced);

    assert_eq!(result.terms.len(), config.domain_weights.len());
    let keys: Vec<_> = result.terms.iter().map(|t| t.key).collect();
    let configured: Vec<_> = config.domain_weights.keys().copied().collect();
    assert_eq!(keys, configured);

    let a1 = result.terms.iter().find(|t| t.key == EvidenceKey::A1).unwrap();
    assert_eq!(a1.value, 2.0);
    assert_eq!(a1.weight, config.domain_weights[&EvidenceKey::A1]);
    assert_eq!(a1.product, a1.value * a1.weight);

    let sum: f64 = result.terms.iter().map(|t| t.product).sum();
    assert!((result.lp - (config.prior + sum)).abs() < 1e-12);
}

#[test]
fn unweighted_evidence_is_ignored() {
    let config = EngineConfig::for_condition(verity_engine::tables::Condition::Id);
    assert!(!config.domain_weights.contains_key(&EvidenceKey::A1));

    let mut evidence = EvidenceSet::new();
    evidence.set(EvidenceKey::A1, 3.0);
    let result = evaluate(&config, &evidence, RiskTolerance::Balanced);
    assert_eq!(result.lp, config.prior);
    assert!(result.terms.iter().all(|t| t.key != EvidenceKey::A1));
}

#[test]
fn ranked_terms_sort_by_absolute_product() {
    let config = EngineConfig::default();
    let mut evidence = EvidenceSet::new();
    evidence.set(EvidenceKey::A1, 0.5);
    evidence.set(EvidenceKey::AltTrauma, 3.0);
    evidence.set(EvidenceKey::OnsetEarly, 1.0);
    let result = evaluate(&config, &evidence, RiskTolerance::Balanced);

    let ranked = result.ranked_terms();
    assert_eq!(ranked[0].key, EvidenceKey::AltTrauma);
    assert_eq!(ranked[1].key, EvidenceKey::OnsetEarly);
    assert_eq!(ranked[2].key, EvidenceKey::A1);
    assert!(ranked.windows(2).all(|w| w[0].product.abs() >= w[1].product.abs()));
}

#[test]
fn sigmoid_is_stable_at_extremes() {
    for lp in [-1e308, -50.0, -LP_LIMIT, 0.0, LP_LIMIT, 50.0, 1e308] {
        let p = sigmoid(lp);
        assert!(p > 0.0 && p < 1.0, "sigmoid({lp}) = {p}");
    }
    assert_eq!(sigmoid(f64::NAN), 0.5);
    assert_eq!(sigmoid(0.0), 0.5);
}

#[test]
fn explicit_prior_overrides_config_prior() {
    let config = EngineConfig::default();
    let evidence = EvidenceSet::new();
    let result = score(&config.domain_weights, 1.0, &evidence, RiskTolerance::Specific);
    assert_eq!(result.lp, 1.0);
    assert_eq!(result.cut, 0.7);
    assert_eq!(result.decision, Decision::Above);
}

#[test]
fn model_result_uses_load_bearing_field_names() {
    let config = EngineConfig::default();
    let result = evaluate(&config, &EvidenceSet::new(), RiskTolerance::Sensitive);
    let json = serde_json::to_value(&result).unwrap();
    for field in ["p", "lp", "pA", "pB", "cut", "terms", "decision"] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
    assert_eq!(json["terms"][0]["key"], "A1");
    assert_eq!(json["decision"], "below");
}
