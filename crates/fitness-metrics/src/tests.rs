use crate::{render, FeatureMetrics, MetricsError};
use fitness_adapter::adapt;
use l0_core::Model;
use prometheus::Registry;

#[test]
fn gauges_track_last_observation() {
    let registry = Registry::new();
    let metrics = FeatureMetrics::new(&registry).unwrap();

    let first = Model::new(0.5, 0.5, 0.5);
    let second = Model::new(0.7, 0.4, 0.5).with_generation(1);
    metrics.observe("run-a", first.generation, &adapt(&first, None, None)).unwrap();
    let latest = adapt(&second, Some(&first), None);
    metrics.observe("run-a", second.generation, &latest).unwrap();

    let labels = &["run-a"];
    assert_eq!(metrics.capability_raw.with_label_values(labels).get(), latest.capability_raw);
    assert_eq!(metrics.alignment_score.with_label_values(labels).get(), latest.alignment_score);
    assert_eq!(metrics.risk_events.with_label_values(labels).get(), latest.risk_events);
    assert_eq!(metrics.risk_score.with_label_values(labels).get(), latest.risk_score);
    assert_eq!(metrics.approximation_error.with_label_values(labels).get(), latest.error);
    assert_eq!(metrics.generation.with_label_values(labels).get(), 1);
    assert!(metrics.risk_events.with_label_values(labels).get() > 0.0);
}

#[test]
fn runs_are_labelled_separately() {
    let registry = Registry::new();
    let metrics = FeatureMetrics::new(&registry).unwrap();
    let model = Model::default();
    let f = adapt(&model, None, None);

    metrics.observe("run-a", 3, &f).unwrap();
    metrics.observe("run-b", 8, &f).unwrap();
    assert_eq!(metrics.generation.with_label_values(&["run-a"]).get(), 3);
    assert_eq!(metrics.generation.with_label_values(&["run-b"]).get(), 8);
}

#[test]
fn exposition_lists_every_channel() {
    let registry = Registry::new();
    let metrics = FeatureMetrics::new(&registry).unwrap();
    let model = Model::default();
    metrics.observe("demo", 0, &adapt(&model, None, None)).unwrap();

    let text = render(&registry).unwrap();
    for name in [
        "l0_capability_raw",
        "l0_alignment_score",
        "l0_risk_events",
        "l0_risk_score",
        "l0_param_variance",
        "l0_param_change_rate",
        "l0_approximation_error",
        "l0_generation",
    ] {
        assert!(text.contains(name), "missing {name}");
    }
    assert!(text.contains("run_id=\"demo\""));
}

#[test]
fn double_registration_fails() {
    let registry = Registry::new();
    FeatureMetrics::new(&registry).unwrap();
    let err = FeatureMetrics::new(&registry).err().unwrap();
    assert!(matches!(err, MetricsError::Prometheus(_)));
}

#[test]
fn oversized_generation_is_rejected() {
    let registry = Registry::new();
    let metrics = FeatureMetrics::new(&registry).unwrap();
    let f = adapt(&Model::default(), None, None);

    let err = metrics.observe("run-a", u64::MAX, &f).unwrap_err();
    assert!(matches!(err, MetricsError::GenerationOverflow(u64::MAX)));
    assert_eq!(metrics.capability_raw.with_label_values(&["run-a"]).get(), 0.0);

    metrics.observe("run-a", i64::MAX as u64, &f).unwrap();
    assert_eq!(metrics.generation.with_label_values(&["run-a"]).get(), i64::MAX);
}
