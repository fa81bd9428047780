use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use verity_core::form::{Consistency, FormState};
use verity_core::keys::CriterionKey;
use verity_instruments::{find_by_name, ids};

use crate::config::{EngineConfig, MinDatasetRules};

/// Developmental-concerns text must exceed this many non-whitespace characters.
pub const MIN_HISTORY_CHARS: usize = 10;

/// Every intermediate the gate looked at. Callers display the breakdown, not
/// just the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DatasetCounts {
    /// Distinct free-form instruments with a numeric value.
    pub instruments_with_values: u32,
    pub srs2_selected: bool,
    pub abas_selected: bool,
    pub consistency_rated: bool,
    pub effective_instrument_count: u32,
    pub min_instruments: u32,
    pub has_adaptive: bool,
    #[serde(rename = "hasASDInstrument")]
    pub has_asd_instrument: bool,
    pub history_ok: bool,
    pub observation_ok: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DatasetStatus {
    pub passes: bool,
    pub counts: DatasetCounts,
}

/// Decide whether enough distinct evidence sources are present to permit a
/// decision.
pub fn check_sufficiency(config: &EngineConfig, form: &FormState) -> DatasetStatus {
    let counts = count_sources(config, form);
    let passes = rules_satisfied(&config.min_dataset, &counts);
    DatasetStatus { passes, counts }
}

fn count_sources(config: &EngineConfig, form: &FormState) -> DatasetCounts {
    let with_values: BTreeSet<&str> = form
        .instruments
        .iter()
        .filter(|e| e.numeric_value().is_some())
        .map(|e| e.name.as_str())
        .collect();
    let named = |names: &[String]| names.iter().any(|n| with_values.contains(n.as_str()));

    let srs2_selected = form.any_severity(ids::SRS2);
    let abas_selected = form.any_severity(ids::ABAS3);
    let consistency_rated = form.consistency != Consistency::Unclear;

    let effective_instrument_count = with_values.len() as u32
        + u32::from(srs2_selected)
        + u32::from(abas_selected)
        + u32::from(consistency_rated);

    let concerns = form
        .history
        .concerns
        .chars()
        .filter(|c| !c.is_whitespace())
        .count();

    DatasetCounts {
        instruments_with_values: with_values.len() as u32,
        srs2_selected,
        abas_selected,
        consistency_rated,
        effective_instrument_count,
        min_instruments: config.min_dataset.min_instruments,
        has_adaptive: abas_selected || named(&config.adaptive_instruments),
        has_asd_instrument: srs2_selected
            || consistency_rated
            || named(&config.asd_instruments),
        history_ok: concerns > MIN_HISTORY_CHARS && form.history.early_onset,
        observation_ok: CriterionKey::ALL
            .iter()
            .all(|k| form.observation.contains_key(k)),
    }
}

fn rules_satisfied(rules: &MinDatasetRules, counts: &DatasetCounts) -> bool {
    counts.effective_instrument_count >= rules.min_instruments
        && (!rules.require_asd_instrument || counts.has_asd_instrument)
        && (!rules.require_adaptive || counts.has_adaptive)
        && (!rules.require_history || counts.history_ok)
        && (!rules.require_observation || counts.observation_ok)
}

/// Configured default instruments with neither a numeric score nor a severity
/// selection, in configuration order.
pub fn missing_default_instruments<'a>(config: &'a EngineConfig, form: &FormState) -> Vec<&'a str> {
    config
        .default_instruments
        .iter()
        .map(String::as_str)
        .filter(|name| {
            let selected = find_by_name(name).is_some_and(|i| form.any_severity(i.id()));
            !selected && form.instrument_value(name).is_none()
        })
        .collect()
}
