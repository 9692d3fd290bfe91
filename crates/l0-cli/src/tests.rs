use crate::report::{build_report, load_config, load_model};
use crate::{Cli, Command};
use clap::{CommandFactory, Parser};
use fitness_adapter::{adapt, AdapterConfig, FeatureAdapter};
use l0_core::Model;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

fn scratch_file(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("l0-fitness-{}.json", Uuid::new_v4()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_exported_snapshot() {
    let model = Model::new(0.1, -0.2, 0.3).with_generation(6);
    let path = scratch_file(&model.to_json().unwrap());

    let loaded = load_model(&path).unwrap();
    assert_eq!(loaded.params, model.params);
    assert_eq!(loaded.generation, 6);
    fs::remove_file(path).unwrap();
}

#[test]
fn snapshot_without_params_fails_with_context() {
    let path = scratch_file(r#"{"generation": 1}"#);
    let err = load_model(&path).unwrap_err();
    assert!(format!("{err:#}").contains("params"));
    fs::remove_file(path).unwrap();
}

#[test]
fn missing_config_path_means_defaults() {
    assert_eq!(load_config(None).unwrap(), AdapterConfig::default());

    let path = scratch_file(r#"{"error_samples": 7}"#);
    assert_eq!(load_config(Some(path.as_path())).unwrap().error_samples, 7);
    fs::remove_file(path).unwrap();
}

#[test]
fn report_wraps_adapter_output() {
    let previous = Model::default();
    let current = Model::new(0.6, 0.5, 0.5).with_generation(1);
    let report = build_report(
        &FeatureAdapter::default(),
        "run-x".into(),
        &current,
        Some(&previous),
    );

    assert_eq!(report.run_id, "run-x");
    assert_eq!(report.generation, 1);
    assert_eq!(report.features, adapt(&current, Some(&previous), None));

    let value = serde_json::to_value(&report).unwrap();
    assert!(value["generated_at"].is_string());
    assert!(value["features"]["risk_events"].as_f64().unwrap() > 0.0);
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn global_log_flag_and_negative_weights_parse() {
    let cli = Cli::try_parse_from([
        "l0-fitness", "snapshot", "--w1", "-0.5", "--w2", "NaN", "--w3", "1", "--log-json",
    ])
    .unwrap();
    assert!(cli.log_json);
    match cli.command {
        Command::Snapshot { w1, w2, w3, generation } => {
            assert_eq!(w1, -0.5);
            assert!(w2.is_nan());
            assert_eq!(w3, 1.0);
            assert_eq!(generation, 0);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn nan_snapshot_feeds_adapt() {
    let exported = Model::new(f64::NAN, 0.5, 0.5).to_json().unwrap();
    let path = scratch_file(&exported);

    let current = load_model(&path).unwrap();
    let report = build_report(&FeatureAdapter::default(), "nan-run".into(), &current, None);
    assert!(report.features.capability_raw.is_nan());
    assert_eq!(report.features.risk_events, 0.0);
    fs::remove_file(path).unwrap();
}
