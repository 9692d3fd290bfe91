use crate::error::ModelError;
use crate::model::{Model, DEFAULT_SAMPLES};
use crate::params::ParamTriple;
use serde::{Deserialize, Serialize};

/// Plain-data form of a model: `{ params, generation, error }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub params: ParamTriple,
    pub generation: u64,
    pub error: f64,
}

/// Inbound record accepted by [`Model::from_snapshot`].
///
/// Only `params` is required. `error` is read so that exported snapshots
/// parse back, but it never seeds the cache.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotRecord {
    #[serde(default)]
    pub params: Option<ParamTriple>,
    #[serde(default)]
    pub generation: Option<u64>,
    #[serde(default)]
    pub error: Option<f64>,
}

impl From<ModelSnapshot> for SnapshotRecord {
    fn from(s: ModelSnapshot) -> Self {
        Self {
            params: Some(s.params),
            generation: Some(s.generation),
            error: Some(s.error),
        }
    }
}

impl Model {
    /// Exports parameters and generation with a freshly computed error; any
    /// cached value is ignored.
    pub fn to_snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            params: self.params,
            generation: self.generation,
            error: self.evaluate_error(DEFAULT_SAMPLES),
        }
    }

    pub fn from_snapshot(record: impl Into<SnapshotRecord>) -> Result<Model, ModelError> {
        let record = record.into();
        let params = record.params.ok_or(ModelError::MissingField("params"))?;
        Ok(Model::from_params(params).with_generation(record.generation.unwrap_or(0)))
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(&self.to_snapshot())?)
    }

    pub fn from_json(raw: &str) -> Result<Model, ModelError> {
        let record: SnapshotRecord = serde_json::from_str(raw)?;
        Model::from_snapshot(record)
    }
}
