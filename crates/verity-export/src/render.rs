use std::collections::BTreeMap;

use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;
use verity_core::form::FormState;
use verity_engine::pipeline::Evaluation;
use verity_instruments::get_instrument;

use crate::error::ExportError;

/// Number of evidence terms listed in the summary.
pub const TOP_TERMS: usize = 5;

pub const SUMMARY_TEMPLATE: &str = r#"Verity assessment summary
=========================

Condition: {{ condition }}
Likelihood: {{ p }}% (cutpoint {{ cut }}%, {{ model.decision }} threshold)
Social communication (A): {{ p_a }}%
Restricted/repetitive behavior (B): {{ p_b }}%
Support estimate: {{ support }}
Minimum dataset: {% if dataset.passes %}met{% else %}not met{% endif %} ({{ dataset.counts.effectiveInstrumentCount }} of {{ dataset.counts.minInstruments }} instruments)

Recommendations
{% for r in recommendations %}- {{ r }}
{% endfor %}
Top contributing evidence
{% for t in top_terms %}- {{ t.key }}: {{ t.value }} x {{ t.weight }} = {{ t.product }}
{% endfor %}
Differential profile
{% for c in conditions %}- {{ c.label }}: {{ c.p }}%{% if c.flagged %} (flagged){% endif %}
{% endfor %}{% for section in selections %}
{{ section }}{% endfor %}"#;

#[derive(Serialize)]
struct TermRow {
    key: String,
    value: String,
    weight: String,
    product: String,
}

#[derive(Serialize)]
struct ConditionRow {
    label: &'static str,
    p: String,
    flagged: bool,
}

fn percent(p: f64) -> String {
    format!("{:.1}", p * 100.0)
}

fn build_context(evaluation: &Evaluation, form: &FormState) -> Result<Context, ExportError> {
    // Convert the evaluation to a Tera context via serde_json
    let value = serde_json::to_value(evaluation)?;
    let mut context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let model = &evaluation.model;
    context.insert("condition", evaluation.condition.label());
    context.insert("p", &percent(model.p));
    context.insert("cut", &percent(model.cut));
    context.insert("p_a", &percent(model.p_a));
    context.insert("p_b", &percent(model.p_b));
    context.insert("support", evaluation.support.as_str());

    let top_terms: Vec<TermRow> = model
        .ranked_terms()
        .into_iter()
        .filter(|t| t.product != 0.0)
        .take(TOP_TERMS)
        .map(|t| TermRow {
            key: t.key.to_string(),
            value: format!("{:.2}", t.value),
            weight: format!("{:.2}", t.weight),
            product: format!("{:+.2}", t.product),
        })
        .collect();
    context.insert("top_terms", &top_terms);

    let conditions: Vec<ConditionRow> = evaluation
        .differential
        .iter()
        .map(|c| ConditionRow {
            label: c.condition.label(),
            p: percent(c.p),
            flagged: c.flagged,
        })
        .collect();
    context.insert("conditions", &conditions);

    let selections: Vec<String> = form
        .panels
        .keys()
        .filter_map(|id| {
            let instrument = get_instrument(id)?;
            let selected: BTreeMap<String, String> = form
                .selections(id)
                .map(|(domain, severity)| (domain.to_string(), severity.to_string()))
                .collect();
            (!selected.is_empty()).then(|| instrument.to_structured_input(&selected))
        })
        .collect();
    context.insert("selections", &selections);

    Ok(context)
}

/// Render a caller-supplied Tera template against an evaluation.
///
/// The `template_content` is the raw template string (Jinja2 syntax). The
/// evaluation's fields are available under their serialized names, plus the
/// preformatted `p`, `cut`, `p_a`, `p_b`, `top_terms`, `conditions` and
/// `selections` values the built-in summary uses.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    evaluation: &Evaluation,
    form: &FormState,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let context = build_context(evaluation, form)?;
    let rendered = tera.render(template_name, &context)?;
    debug!(template_name, bytes = rendered.len(), "report rendered");
    Ok(rendered)
}

/// Render the built-in plain-text summary.
pub fn render_summary(evaluation: &Evaluation, form: &FormState) -> Result<String, ExportError> {
    render_template("summary.txt", SUMMARY_TEMPLATE, evaluation, form)
}
