use l0_core::DEFAULT_SAMPLES;
use serde::{Deserialize, Serialize};

/// Configuration for the feature adapter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Sample count for the uncached error evaluation behind `capability_raw`.
    pub error_samples: usize,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            error_samples: DEFAULT_SAMPLES,
        }
    }
}

impl AdapterConfig {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
