use fitness_adapter::AdaptedFeatures;
use prometheus::{Encoder, GaugeVec, IntGaugeVec, Opts, Registry, TextEncoder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus: {0}")]
    Prometheus(#[from] prometheus::Error),
    #[error("generation {0} does not fit an i64 gauge")]
    GenerationOverflow(u64),
    #[error("exposition is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

const RUN_LABEL: &[&str] = &["run_id"];

/// Gauges mirroring every field of an [`AdaptedFeatures`] bundle, labelled by
/// evolutionary run.
pub struct FeatureMetrics {
    pub capability_raw: GaugeVec,
    pub alignment_score: GaugeVec,
    pub risk_events: GaugeVec,
    pub risk_score: GaugeVec,
    pub param_variance: GaugeVec,
    pub param_change_rate: GaugeVec,
    pub approximation_error: GaugeVec,
    pub generation: IntGaugeVec,
}

fn gauge(registry: &Registry, name: &str, help: &str) -> Result<GaugeVec, MetricsError> {
    let g = GaugeVec::new(Opts::new(name, help), RUN_LABEL)?;
    registry.register(Box::new(g.clone()))?;
    Ok(g)
}

impl FeatureMetrics {
    pub fn new(registry: &Registry) -> Result<Self, MetricsError> {
        let generation = IntGaugeVec::new(
            Opts::new("l0_generation", "Generation of the last adapted model"),
            RUN_LABEL,
        )?;
        registry.register(Box::new(generation.clone()))?;

        Ok(Self {
            capability_raw: gauge(
                registry,
                "l0_capability_raw",
                "Capability channel, 1/(1+error)",
            )?,
            alignment_score: gauge(
                registry,
                "l0_alignment_score",
                "Alignment channel, exp(-2*param_variance)",
            )?,
            risk_events: gauge(
                registry,
                "l0_risk_events",
                "Risk-events channel, tanh(5*param_change_rate)",
            )?,
            risk_score: gauge(
                registry,
                "l0_risk_score",
                "Risk-score channel, rescaled logistic of mean |w|",
            )?,
            param_variance: gauge(registry, "l0_param_variance", "Variance of w1, w2, w3")?,
            param_change_rate: gauge(
                registry,
                "l0_param_change_rate",
                "Distance from the previous generation's weights",
            )?,
            approximation_error: gauge(
                registry,
                "l0_approximation_error",
                "Mean absolute error against sin(2*pi*x)",
            )?,
            generation,
        })
    }

    /// Sets every gauge for `run_id`. Nothing is recorded when `generation`
    /// exceeds `i64::MAX`.
    pub fn observe(
        &self,
        run_id: &str,
        generation: u64,
        features: &AdaptedFeatures,
    ) -> Result<(), MetricsError> {
        let generation_value =
            i64::try_from(generation).map_err(|_| MetricsError::GenerationOverflow(generation))?;
        let labels = &[run_id];
        self.capability_raw
            .with_label_values(labels)
            .set(features.capability_raw);
        self.alignment_score
            .with_label_values(labels)
            .set(features.alignment_score);
        self.risk_events
            .with_label_values(labels)
            .set(features.risk_events);
        self.risk_score.with_label_values(labels).set(features.risk_score);
        self.param_variance
            .with_label_values(labels)
            .set(features.param_variance);
        self.param_change_rate
            .with_label_values(labels)
            .set(features.param_change_rate);
        self.approximation_error
            .with_label_values(labels)
            .set(features.error);
        self.generation
            .with_label_values(labels)
            .set(generation_value);
        tracing::trace!(run_id, generation, "recorded feature gauges");
        Ok(())
    }
}

/// Text exposition of everything in `registry`.
pub fn render(registry: &Registry) -> Result<String, MetricsError> {
    let mut buf = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
