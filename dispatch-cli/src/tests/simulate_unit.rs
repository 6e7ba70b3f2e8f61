//! Focused unit tests covering simulate configuration and execution.
#![expect(
    clippy::float_arithmetic,
    reason = "assertions compare floats within a tolerance"
)]

use super::helpers::{CLOSE_ORDERS_MANIFEST, utf8_tempdir, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use crate::simulate::{SimulateConfig, config_from_layers_for_test, execute_simulation};
use dispatch_core::DeliveryPlan;
use rstest::rstest;

fn config_for(manifest: Utf8PathBuf) -> SimulateConfig {
    SimulateConfig {
        manifest,
        addresses: None,
        max_deliveries: None,
        format: ReportFormat::Json,
    }
}

#[rstest]
fn converting_simulate_without_manifest_errors() {
    let err = SimulateConfig::try_from(SimulateArgs::default())
        .expect_err("missing manifest should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_MANIFEST);
            assert_eq!(env, ENV_MANIFEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn simulate_config_defaults_to_json_and_bundled_table() {
    let args = SimulateArgs {
        manifest: Some(Utf8PathBuf::from("orders.json")),
        ..SimulateArgs::default()
    };
    let config = SimulateConfig::try_from(args).expect("config should build");
    assert_eq!(config, config_for(Utf8PathBuf::from("orders.json")));
}

#[rstest]
#[case::manifest(ARG_MANIFEST)]
#[case::addresses(ARG_ADDRESSES)]
fn validate_sources_reports_missing_inputs(#[case] missing: &'static str) {
    let (_tmp, root) = utf8_tempdir();
    let manifest = root.join("orders.json");
    let addresses = root.join("addresses.json");
    if missing != ARG_MANIFEST {
        write_utf8(&manifest, CLOSE_ORDERS_MANIFEST);
    }
    if missing != ARG_ADDRESSES {
        write_utf8(&addresses, b"{}");
    }
    let config = SimulateConfig {
        addresses: Some(addresses),
        ..config_for(manifest)
    };

    match config.validate_sources().expect_err("expected failure") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, missing),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_directories() {
    let (_tmp, root) = utf8_tempdir();
    let manifest = root.join("orders.json");
    std::fs::create_dir(&manifest).expect("manifest directory");

    match config_for(manifest.clone()).validate_sources() {
        Err(CliError::SourcePathNotFile { field, path }) => {
            assert_eq!(field, ARG_MANIFEST);
            assert_eq!(path, manifest);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn manifest_cap_applies_when_no_override_is_given() {
    let (_tmp, root) = utf8_tempdir();
    let manifest = root.join("orders.json");
    write_utf8(&manifest, CLOSE_ORDERS_MANIFEST);

    let plan = execute_simulation(&config_for(manifest)).expect("simulation runs");
    let batches: Vec<Vec<u64>> = plan.batches.iter().map(|b| b.order_ids.clone()).collect();
    assert_eq!(batches, vec![vec![3, 2, 1], vec![4]]);
    assert!((plan.total_minutes - 76.051).abs() < 0.01, "{}", plan.total_minutes);
}

#[rstest]
fn command_line_cap_overrides_the_manifest() {
    let (_tmp, root) = utf8_tempdir();
    let manifest = root.join("orders.json");
    write_utf8(&manifest, CLOSE_ORDERS_MANIFEST);
    let config = SimulateConfig {
        max_deliveries: Some(1),
        ..config_for(manifest)
    };

    let plan: DeliveryPlan = execute_simulation(&config).expect("simulation runs");
    assert_eq!(plan.batches.len(), 4);
    assert!(plan.batches.iter().all(|batch| batch.len() == 1));
}

#[rstest]
fn custom_address_tables_replace_the_bundled_one() {
    let (_tmp, root) = utf8_tempdir();
    let manifest = root.join("orders.json");
    let addresses = root.join("addresses.json");
    write_utf8(
        &manifest,
        br#"{ "pickup_point": "depot", "orders": [ { "address_key": "next door", "duration": 10 } ] }"#,
    );
    write_utf8(
        &addresses,
        br#"{
            "depot": { "latitude": 55.0, "longitude": 37.0, "line1": "Depot" },
            "next door": { "latitude": 55.0, "longitude": 37.0, "line1": "Next door" }
        }"#,
    );
    let config = SimulateConfig {
        addresses: Some(addresses),
        ..config_for(manifest)
    };

    let plan = execute_simulation(&config).expect("simulation runs");
    // 5 pickup + 20 cooking + 1 minimum leg + 5 drop-off.
    assert!((plan.total_minutes - 31.0).abs() < 1e-9, "{}", plan.total_minutes);
    let leg = plan
        .batches
        .first()
        .and_then(|batch| batch.route.first())
        .expect("one leg");
    assert_eq!((leg.from.as_str(), leg.to.as_str()), ("Depot", "Next door"));
}

#[rstest]
fn unknown_manifest_addresses_surface_as_manifest_errors() {
    let (_tmp, root) = utf8_tempdir();
    let manifest = root.join("orders.json");
    write_utf8(
        &manifest,
        r#"{ "orders": [ { "address_key": "Арбат 1", "duration": 10 } ] }"#,
    );

    match execute_simulation(&config_for(manifest)) {
        Err(CliError::Manifest(dispatch_data::ManifestError::UnknownAddress { position, .. })) => {
            assert_eq!(position, 1);
        }
        other => panic!("expected an unknown address, found {other:?}"),
    }
}

#[rstest]
fn zero_caps_are_rejected_by_the_calculator() {
    let (_tmp, root) = utf8_tempdir();
    let manifest = root.join("orders.json");
    write_utf8(&manifest, CLOSE_ORDERS_MANIFEST);
    let config = SimulateConfig {
        max_deliveries: Some(0),
        ..config_for(manifest)
    };

    match execute_simulation(&config) {
        Err(CliError::Calculation(dispatch_batcher::CalculationError::ZeroCapacity)) => {}
        other => panic!("expected ZeroCapacity, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "max_deliveries": "many" }));

    match config_from_layers_for_test(composer.layers()) {
        Err(CliError::Configuration(_)) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({ "manifest": "from-file.json", "max_deliveries": 2, "format": "text" }),
        None,
    );
    composer.push_environment(json!({ "manifest": "from-env.json" }));
    composer.push_cli(json!({ "max_deliveries": 4 }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.manifest, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.max_deliveries, Some(4));
    assert_eq!(config.format, ReportFormat::Text);
}
