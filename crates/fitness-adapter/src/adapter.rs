use crate::channels::{
    alignment_from_variance, capability_from_error, param_change_rate, param_magnitude,
    param_variance, risk_events_from_change_rate, risk_score_from_magnitude,
};
use crate::{AdaptedFeatures, AdapterConfig};
use l0_core::{Model, ModelSnapshot};

/// Converts model state into four decoupled fitness channels.
///
/// Each channel is driven by its own raw signal:
/// - `capability_raw` by the approximation error,
/// - `alignment_score` by the variance of the current weights,
/// - `risk_events` by the distance from the previous generation's weights,
/// - `risk_score` by the mean absolute weight.
///
/// Variance and magnitude both read all three weights, so moving a single
/// weight can shift both `alignment_score` and `risk_score`.
#[derive(Clone, Debug, Default)]
pub struct FeatureAdapter {
    cfg: AdapterConfig,
}

impl FeatureAdapter {
    pub fn new(cfg: AdapterConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.cfg
    }

    /// Builds the feature bundle for `model`.
    ///
    /// `history` is a reserved extension point for stability signals over
    /// past generations; it is accepted and currently has no effect on the
    /// output. Neither model is mutated and the error cache is bypassed.
    pub fn adapt(
        &self,
        model: &Model,
        previous: Option<&Model>,
        history: Option<&[ModelSnapshot]>,
    ) -> AdaptedFeatures {
        if let Some(h) = history {
            tracing::trace!(entries = h.len(), "history is reserved and ignored");
        }

        let error = model.evaluate_error(self.cfg.error_samples);
        let variance = param_variance(&model.params);
        let change_rate = param_change_rate(&model.params, previous.map(|p| &p.params));
        let magnitude = param_magnitude(&model.params);

        let features = AdaptedFeatures {
            capability_raw: capability_from_error(error),
            alignment_score: alignment_from_variance(variance),
            risk_events: risk_events_from_change_rate(change_rate),
            risk_score: risk_score_from_magnitude(magnitude),
            param_variance: variance,
            param_change_rate: change_rate,
            error,
        };
        tracing::debug!(
            generation = model.generation,
            capability = features.capability_raw,
            alignment = features.alignment_score,
            risk_events = features.risk_events,
            risk_score = features.risk_score,
            "adapted l0 model"
        );
        features
    }
}

/// [`FeatureAdapter::adapt`] with the default configuration.
pub fn adapt(
    model: &Model,
    previous: Option<&Model>,
    history: Option<&[ModelSnapshot]>,
) -> AdaptedFeatures {
    FeatureAdapter::default().adapt(model, previous, history)
}
