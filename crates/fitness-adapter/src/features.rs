use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Output of one adapter call.
///
/// The first four fields are the bounded fitness channels; the last three are
/// the unbounded raw values behind them, kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptedFeatures {
    pub capability_raw: f64,
    pub alignment_score: f64,
    pub risk_events: f64,
    pub risk_score: f64,
    pub param_variance: f64,
    pub param_change_rate: f64,
    pub error: f64,
}

impl AdaptedFeatures {
    pub fn as_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("capability_raw", self.capability_raw),
            ("alignment_score", self.alignment_score),
            ("risk_events", self.risk_events),
            ("risk_score", self.risk_score),
            ("param_variance", self.param_variance),
            ("param_change_rate", self.param_change_rate),
            ("error", self.error),
        ])
    }

    /// The four channel values in fixed order: capability, alignment,
    /// risk events, risk score.
    pub fn channels(&self) -> [f64; 4] {
        [
            self.capability_raw,
            self.alignment_score,
            self.risk_events,
            self.risk_score,
        ]
    }
}
