use verity_core::form::FormState;
use verity_engine::support::{support_estimate, SupportEstimate};
use verity_instruments::ids;

fn abas(selections: &[(&str, &str)]) -> FormState {
    let mut form = FormState::default();
    for (domain, severity) in selections {
        form.select(ids::ABAS3, domain, severity);
    }
    form
}

#[test]
fn lowest_bands_win_over_everything_else() {
    let form = abas(&[("conceptual", "Average"), ("social", "Low Average"), ("practical", "Extremely Low")]);
    assert_eq!(support_estimate(&form), SupportEstimate::High);

    let form = abas(&[("social", "Very Low")]);
    assert_eq!(support_estimate(&form), SupportEstimate::High);
}

#[test]
fn third_band_is_moderate() {
    let form = abas(&[("conceptual", "High Average"), ("social", "Low Average")]);
    assert_eq!(support_estimate(&form), SupportEstimate::Moderate);
}

#[test]
fn any_other_selection_is_lower() {
    let form = abas(&[("practical", "Average")]);
    assert_eq!(support_estimate(&form), SupportEstimate::Lower);
}

#[test]
fn no_selection_is_insufficient() {
    assert_eq!(support_estimate(&FormState::default()), SupportEstimate::InsufficientData);
    assert_eq!(support_estimate(&abas(&[("social", "")])), SupportEstimate::InsufficientData);
}

#[test]
fn estimates_serialize_as_display_text() {
    let json = serde_json::to_string(&SupportEstimate::Moderate).unwrap();
    assert_eq!(json, "\"Moderate support possible\"");
    assert_eq!(SupportEstimate::High.to_string(), "High support likely");
}
