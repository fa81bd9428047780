use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use verity_core::keys::EvidenceKey;
use verity_instruments::{get_instrument, ids, Instrument};

use crate::error::ConfigError;
use crate::tables::{self, Condition};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Severity label -> evidence key -> delta.
pub type SeverityMap = BTreeMap<String, BTreeMap<EvidenceKey, f64>>;

/// One scorable domain of a panel and how its severities feed the evidence set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DomainEntry {
    pub key: String,
    pub label: String,
    pub severities: Vec<String>,
    /// Severities absent from this map contribute nothing.
    #[serde(default)]
    pub map_by_severity: SeverityMap,
}

/// An instrument panel whose severity selections contribute evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PanelConfig {
    pub instrument_id: String,
    pub domains: Vec<DomainEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MinDatasetRules {
    pub min_instruments: u32,
    #[serde(rename = "requireASDInstrument")]
    pub require_asd_instrument: bool,
    pub require_adaptive: bool,
    pub require_history: bool,
    pub require_observation: bool,
}

impl Default for MinDatasetRules {
    fn default() -> Self {
        Self {
            min_instruments: 2,
            require_asd_instrument: true,
            require_adaptive: true,
            require_history: true,
            require_observation: true,
        }
    }
}

/// Replaces the base prior for children up to `max_age_months` old.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AgeBandPrior {
    pub max_age_months: i32,
    pub prior: f64,
}

/// The static, versioned ruleset the engine scores against.
///
/// Read-only for the whole session; every evaluation borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EngineConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub condition: Condition,
    /// Baseline log-odds.
    pub prior: f64,
    /// Strictly ascending by `max_age_months`; the first band covering the
    /// child's age wins.
    #[serde(default)]
    pub age_band_priors: Vec<AgeBandPrior>,
    pub domain_weights: BTreeMap<EvidenceKey, f64>,
    pub panels: Vec<PanelConfig>,
    #[serde(default)]
    pub min_dataset: MinDatasetRules,
    #[serde(default)]
    pub default_instruments: Vec<String>,
    #[serde(default)]
    pub asd_instruments: Vec<String>,
    #[serde(default)]
    pub adaptive_instruments: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::for_condition(Condition::Asd)
    }
}

impl EngineConfig {
    /// The built-in ruleset for `condition`.
    pub fn for_condition(condition: Condition) -> Self {
        let weights = tables::domain_weights(condition);
        Self {
            config_version: CURRENT_VERSION,
            condition,
            prior: weights.prior,
            age_band_priors: weights.age_bands,
            domain_weights: weights.weights,
            panels: default_panels(),
            min_dataset: MinDatasetRules::default(),
            default_instruments: strings(&[
                "SRS-2",
                "ADOS-2",
                "MIGDAS-2",
                "ADI-R",
                "GARS",
                "ASRS",
                "Vineland-3",
                "ABAS-3",
                "WISC-V",
                "Sensory Profile 2",
            ]),
            asd_instruments: strings(&["SRS-2", "ADOS-2", "MIGDAS-2", "GARS"]),
            adaptive_instruments: strings(&["Vineland-3", "ABAS-3"]),
        }
    }

    /// Prior for a child of `age_months`, falling back to the base prior.
    pub fn prior_for_age(&self, age_months: Option<i32>) -> f64 {
        age_months
            .and_then(|age| self.age_band_priors.iter().find(|b| age <= b.max_age_months))
            .map_or(self.prior, |b| b.prior)
    }

    /// Check that every referenced instrument, domain and severity exists in
    /// the label taxonomy and that every number is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("prior", self.prior)?;
        for band in &self.age_band_priors {
            finite(&format!("age band prior ({} months)", band.max_age_months), band.prior)?;
        }
        if let Some(pair) = self
            .age_band_priors
            .windows(2)
            .find(|w| w[0].max_age_months >= w[1].max_age_months)
        {
            return Err(ConfigError::UnsortedAgeBands {
                previous: pair[0].max_age_months,
                next: pair[1].max_age_months,
            });
        }
        for (key, weight) in &self.domain_weights {
            finite(&format!("weight {key}"), *weight)?;
        }

        for panel in &self.panels {
            let instrument = get_instrument(&panel.instrument_id)
                .ok_or_else(|| ConfigError::UnknownInstrument(panel.instrument_id.clone()))?;
            for entry in &panel.domains {
                validate_domain(instrument.as_ref(), entry)?;
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn validate_domain(instrument: &dyn Instrument, entry: &DomainEntry) -> Result<(), ConfigError> {
    let catalog = instrument
        .domain(&entry.key)
        .ok_or_else(|| ConfigError::UnknownDomain {
            instrument_id: instrument.id().to_string(),
            domain_key: entry.key.clone(),
        })?;

    let unknown = |severity: &str| ConfigError::UnknownSeverity {
        instrument_id: instrument.id().to_string(),
        domain_key: entry.key.clone(),
        severity: severity.to_string(),
    };

    if let Some(bad) = entry.severities.iter().find(|s| !catalog.has_severity(s)) {
        return Err(unknown(bad));
    }
    for (severity, deltas) in &entry.map_by_severity {
        if !entry.severities.contains(severity) {
            return Err(unknown(severity));
        }
        for (key, delta) in deltas {
            finite(&format!("{}/{}/{severity}/{key}", instrument.id(), entry.key), *delta)?;
        }
    }
    Ok(())
}

fn finite(what: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite(what.to_string()))
    }
}

/// Parse, migrate and validate a configuration document.
pub fn load_config(contents: &str) -> Result<EngineConfig, ConfigError> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = config_version(&json)?;

    let migrated = migrate(json, on_disk_version)?;
    let config: EngineConfig = serde_json::from_value(migrated)?;
    config.validate()?;

    tracing::info!(
        condition = ?config.condition,
        panels = config.panels.len(),
        weights = config.domain_weights.len(),
        "config loaded"
    );
    Ok(config)
}

/// The document's `configVersion`, 0 when absent.
fn config_version(json: &serde_json::Value) -> Result<u32, ConfigError> {
    let raw = match json.get("configVersion") {
        None | Some(serde_json::Value::Null) => return Ok(0),
        Some(raw) => raw,
    };
    let version = raw
        .as_u64()
        .ok_or_else(|| ConfigError::InvalidVersion(raw.to_string()))?;
    u32::try_from(version).map_err(|_| ConfigError::UnsupportedVersion {
        found: version,
        supported: CURRENT_VERSION,
    })
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, ConfigError> {
    if from_version > CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: u64::from(from_version),
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: `priorLogOdds` renamed to `prior`; minimum dataset rules made explicit
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(ConfigError::NotAnObject)?;
        if let Some(prior) = obj.remove("priorLogOdds") {
            obj.entry("prior").or_insert(prior);
        }
        if !obj.contains_key("minDataset") {
            obj.insert(
                "minDataset".to_string(),
                serde_json::to_value(MinDatasetRules::default())?,
            );
        }
        obj.insert("configVersion".to_string(), serde_json::Value::Number(1.into()));
        tracing::info!("migrated config v0 → v1 (prior renamed, minDataset added)");
    }

    Ok(json)
}

/// SRS-2 and ABAS-3 panels with their severity-to-evidence maps.
fn default_panels() -> Vec<PanelConfig> {
    use EvidenceKey::*;

    let srs2 = vec![
        (
            "awareness",
            vec![
                ("Mild", vec![(A1, 0.3)]),
                ("Moderate", vec![(A1, 0.6)]),
                ("Severe", vec![(A1, 1.0)]),
            ],
        ),
        (
            "cognition",
            vec![
                ("Mild", vec![(A2, 0.3)]),
                ("Moderate", vec![(A2, 0.6)]),
                ("Severe", vec![(A2, 1.0)]),
            ],
        ),
        (
            "communication",
            vec![
                ("Mild", vec![(A1, 0.2), (A2, 0.2)]),
                ("Moderate", vec![(A1, 0.4), (A2, 0.4)]),
                ("Severe", vec![(A1, 0.7), (A2, 0.7)]),
            ],
        ),
        (
            "motivation",
            vec![
                ("Mild", vec![(A3, 0.3)]),
                ("Moderate", vec![(A3, 0.6)]),
                ("Severe", vec![(A3, 1.0)]),
            ],
        ),
        (
            "rrb",
            vec![
                ("Mild", vec![(B1, 0.2), (B2, 0.2), (B3, 0.1), (B4, 0.1)]),
                ("Moderate", vec![(B1, 0.4), (B2, 0.4), (B3, 0.3), (B4, 0.3)]),
                ("Severe", vec![(B1, 0.7), (B2, 0.7), (B3, 0.5), (B4, 0.5)]),
            ],
        ),
    ];

    let abas3 = vec![
        (
            "conceptual",
            vec![
                ("Extremely Low", vec![(IntellectualDisability, 0.8), (Impairment, 0.5)]),
                ("Very Low", vec![(IntellectualDisability, 0.4), (Impairment, 0.4)]),
                ("Low Average", vec![(Impairment, 0.2)]),
            ],
        ),
        (
            "social",
            vec![
                ("Extremely Low", vec![(A3, 0.5), (Impairment, 0.5)]),
                ("Very Low", vec![(A3, 0.4), (Impairment, 0.4)]),
                ("Low Average", vec![(A3, 0.2), (Impairment, 0.2)]),
            ],
        ),
        (
            "practical",
            vec![
                ("Extremely Low", vec![(Impairment, 0.5)]),
                ("Very Low", vec![(Impairment, 0.4)]),
                ("Low Average", vec![(Impairment, 0.2)]),
            ],
        ),
    ];

    vec![panel(ids::SRS2, srs2), panel(ids::ABAS3, abas3)]
}

type DomainRows = Vec<(&'static str, Vec<(&'static str, Vec<(EvidenceKey, f64)>)>)>;

/// Build a panel from the taxonomy catalog plus literal delta rows. Domains
/// without rows still appear so the panel mirrors the instrument.
fn panel(instrument_id: &str, rows: DomainRows) -> PanelConfig {
    let catalog = get_instrument(instrument_id)
        .map(|i| i.domains().to_vec())
        .unwrap_or_default();

    let domains = catalog
        .into_iter()
        .map(|domain| {
            let map_by_severity = rows
                .iter()
                .find(|(key, _)| *key == domain.key)
                .map(|(_, bands)| {
                    bands
                        .iter()
                        .map(|(severity, deltas)| {
                            (severity.to_string(), deltas.iter().copied().collect())
                        })
                        .collect()
                })
                .unwrap_or_default();
            DomainEntry {
                key: domain.key,
                label: domain.label,
                severities: domain.severities,
                map_by_severity,
            }
        })
        .collect();

    PanelConfig {
        instrument_id: instrument_id.to_string(),
        domains,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
