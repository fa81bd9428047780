use verity_core::form::{Consistency, FormState};
use verity_engine::config::EngineConfig;
use verity_engine::evaluate_form;
use verity_engine::recommend::COLLECT_MINIMUM_DATASET;
use verity_export::error::ExportError;
use verity_export::render::{render_summary, render_template};

fn profile() -> FormState {
    let mut form = FormState::default();
    form.select("srs2", "awareness", "Severe");
    form.select("srs2", "rrb", "Moderate");
    form.select("abas3", "social", "Very Low");
    form.consistency = Consistency::Consistent;
    form.history.early_onset = true;
    form
}

#[test]
fn summary_lists_probability_and_recommendations() {
    let form = profile();
    let evaluation = evaluate_form(&EngineConfig::default(), &form);
    let text = render_summary(&evaluation, &form).unwrap();

    assert!(text.starts_with("Verity assessment summary"));
    assert!(text.contains("Condition: Autism Spectrum Disorder"));
    assert!(text.contains(&format!("Likelihood: {:.1}%", evaluation.model.p * 100.0)));
    assert!(text.contains("cutpoint 50.0%"));
    assert!(text.contains("Support estimate: High support likely"));
    assert!(text.contains("Minimum dataset: not met"));
    assert!(text.contains(COLLECT_MINIMUM_DATASET));
}

#[test]
fn summary_includes_selected_severities() {
    let form = profile();
    let evaluation = evaluate_form(&EngineConfig::default(), &form);
    let text = render_summary(&evaluation, &form).unwrap();

    assert!(text.contains("## SRS-2"));
    assert!(text.contains("- Social Awareness: Severe"));
    assert!(text.contains("## ABAS-3"));
    assert!(text.contains("- Social: Very Low"));
}

#[test]
fn summary_lists_top_terms_by_magnitude() {
    let form = profile();
    let evaluation = evaluate_form(&EngineConfig::default(), &form);
    let text = render_summary(&evaluation, &form).unwrap();

    let top = evaluation.model.ranked_terms()[0].key.to_string();
    assert!(text.contains(&format!("- {top}: ")));
}

#[test]
fn custom_template_sees_evaluation_fields() {
    let form = FormState::default();
    let evaluation = evaluate_form(&EngineConfig::default(), &form);
    let text = render_template(
        "custom.txt",
        "{{ model.decision }}|{{ dataset.passes }}|{{ support }}|{{ conditions | length }}",
        &evaluation,
        &form,
    )
    .unwrap();
    assert_eq!(text, "below|false|Insufficient data|4");
}

#[test]
fn broken_template_is_a_parse_error() {
    let form = FormState::default();
    let evaluation = evaluate_form(&EngineConfig::default(), &form);
    let err = render_template("bad.txt", "{% for %}", &evaluation, &form).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}
