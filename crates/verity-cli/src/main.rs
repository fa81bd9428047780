//! Score a form-state document from the command line.
//!
//! Usage:
//!   verity form.json
//!
//! Environment:
//!   VERITY_CONFIG     path to a configuration document (default: built-in ruleset)
//!   VERITY_CONDITION  asd | adhd | id | fasd, when no configuration document is given
//!   VERITY_FORMAT     text | json (default: text)
//!   RUST_LOG          tracing filter (default: info)

use std::env;
use std::path::Path;

use eyre::Result;
use verity_core::form::FormState;
use verity_engine::config::{load_config, EngineConfig};
use verity_engine::evaluate_form;
use verity_engine::gate::missing_default_instruments;
use verity_engine::tables::Condition;
use verity_export::render::render_summary;
use verity_instruments::find_by_name;
use verity_instruments::scoring::ScoreEntry;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let form_path = env::args()
        .nth(1)
        .ok_or_else(|| eyre::eyre!("usage: verity <form.json>"))?;

    let config = read_config()?;
    let form = read_form(Path::new(&form_path))?;
    warn_out_of_range(&form);
    for name in missing_default_instruments(&config, &form) {
        tracing::info!(instrument = name, "default instrument not yet scored");
    }

    let evaluation = evaluate_form(&config, &form);
    let format = env::var("VERITY_FORMAT").unwrap_or_else(|_| "text".to_string());
    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&evaluation)?),
        "text" => println!("{}", render_summary(&evaluation, &form)?),
        other => return Err(eyre::eyre!("unknown VERITY_FORMAT '{other}' (expected text or json)")),
    }

    Ok(())
}

fn read_config() -> Result<EngineConfig> {
    if let Ok(path) = env::var("VERITY_CONFIG") {
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| eyre::eyre!("failed to read config at {path}: {e}"))?;
        return Ok(load_config(&contents)?);
    }

    let condition = match env::var("VERITY_CONDITION") {
        Ok(name) => name.parse::<Condition>()?,
        Err(_) => Condition::Asd,
    };
    tracing::info!(?condition, "using built-in ruleset");
    Ok(EngineConfig::for_condition(condition))
}

fn read_form(path: &Path) -> Result<FormState> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read form at {}: {e}", path.display()))?;
    Ok(FormState::from_json(&contents)?)
}

/// Free-form scores outside an instrument's range are reported but never
/// block scoring.
fn warn_out_of_range(form: &FormState) {
    for entry in &form.instruments {
        let (Some(instrument), Some(value)) = (find_by_name(&entry.name), entry.numeric_value())
        else {
            continue;
        };
        let Some(headline) = instrument.headline() else {
            continue;
        };
        let scores = [ScoreEntry {
            domain_key: headline.key.clone(),
            value,
        }];
        for error in instrument.validate_scores(&scores) {
            tracing::warn!(instrument = instrument.id(), "{error}");
        }
    }
}
