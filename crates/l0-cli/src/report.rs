use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fitness_adapter::{AdaptedFeatures, AdapterConfig, FeatureAdapter};
use l0_core::Model;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// One adapter run as printed by `l0-fitness adapt`.
#[derive(Debug, Clone, Serialize)]
pub struct AdaptReport {
    pub generated_at: DateTime<Utc>,
    pub run_id: String,
    pub generation: u64,
    pub features: AdaptedFeatures,
}

pub fn load_model(path: &Path) -> Result<Model> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    Model::from_json(&raw).with_context(|| format!("parsing snapshot {}", path.display()))
}

pub fn load_config(path: Option<&Path>) -> Result<AdapterConfig> {
    let Some(path) = path else {
        return Ok(AdapterConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    AdapterConfig::from_json(&raw).with_context(|| format!("parsing config {}", path.display()))
}

pub fn build_report(
    adapter: &FeatureAdapter,
    run_id: String,
    current: &Model,
    previous: Option<&Model>,
) -> AdaptReport {
    AdaptReport {
        generated_at: Utc::now(),
        run_id,
        generation: current.generation,
        features: adapter.adapt(current, previous, None),
    }
}
