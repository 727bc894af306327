//! addonctl end-to-end tests
//!
//! Parse real argument vectors, run against snapshot files on disk and
//! inspect what the command wrote.

use std::path::{Path, PathBuf};

use clap::Parser;
use serde_json::Value;

use addons_cli::{Cli, Error};

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn cluster_json(version: &str, properties: &str) -> String {
    serde_json::json!({
        "name": "edge-01",
        "platformVersion": version,
        "monitoredAddons": [{ "name": "metallb", "properties": properties }],
    })
    .to_string()
}

fn run(args: &[&str]) -> Result<String, Error> {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    cli.run(&mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_info_prints_identity() {
    let out = run(&["addonctl", "info"]).unwrap();
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["identity"]["namespace"], "metallb-system");
    assert_eq!(value["identity"]["subscriptionName"], "metallb-operator");
    assert_eq!(value["hostValidationId"], "metallb-requirements-satisfied");
}

/// Story: An operator checks an old cluster and sees why MetalLB is refused
#[test]
fn story_validate_cluster_reports_failure_reason() {
    let dir = tempfile::tempdir().unwrap();
    let cluster = write_file(dir.path(), "cluster.json", &cluster_json("4.10.3", ""));

    let out = run(&["addonctl", "validate-cluster", "-f", path_str(&cluster)]).unwrap();
    let outcomes: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(outcomes[0]["validationId"], "metallb-requirements-satisfied");
    assert_eq!(outcomes[0]["status"], "failure");
    assert_eq!(
        outcomes[0]["reasons"][0],
        "MetalLB is only supported for OpenShift versions 4.11.0 and above"
    );
}

#[test]
fn test_validate_cluster_with_malformed_version_errors() {
    let dir = tempfile::tempdir().unwrap();
    let cluster = write_file(dir.path(), "cluster.json", &cluster_json("nightly", ""));

    let err = run(&["addonctl", "validate-cluster", "-f", path_str(&cluster)]).unwrap_err();
    assert!(matches!(
        err,
        Error::Addon(addons_common::Error::InvalidVersion { .. })
    ));
}

#[test]
fn test_validate_host_pending_then_success() {
    let dir = tempfile::tempdir().unwrap();
    let cluster = write_file(dir.path(), "cluster.json", &cluster_json("4.12.0", ""));
    let bare = write_file(dir.path(), "bare.json", r#"{"id": "host-1", "role": "worker"}"#);
    let ready = write_file(
        dir.path(),
        "ready.json",
        r#"{"id": "host-1", "role": "worker", "inventory": "{\"cpu\":{}}"}"#,
    );

    let out = run(&[
        "addonctl",
        "validate-host",
        "-f",
        path_str(&cluster),
        "--host",
        path_str(&bare),
    ])
    .unwrap();
    let outcome: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(outcome["status"], "pending");
    assert_eq!(outcome["reasons"][0], "Missing Inventory in the host");

    let out = run(&[
        "addonctl",
        "validate-host",
        "-f",
        path_str(&cluster),
        "--host",
        path_str(&ready),
    ])
    .unwrap();
    let outcome: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(outcome["status"], "success");
}

#[test]
fn test_requirements_follow_flags() {
    let dir = tempfile::tempdir().unwrap();
    let cluster = write_file(dir.path(), "cluster.json", &cluster_json("4.12.0", ""));

    let out = run(&[
        "addonctl",
        "--cpu-per-host",
        "2",
        "--memory-per-host-mib",
        "256",
        "requirements",
        "-f",
        path_str(&cluster),
    ])
    .unwrap();
    let preflight: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(preflight["addonName"], "metallb");
    for role in ["master", "worker"] {
        let quantitative = &preflight["requirements"][role]["quantitative"];
        assert_eq!(quantitative["cpuCores"], 2);
        assert_eq!(quantitative["ramMib"], 256);
    }
}

/// Story: Manifests land in the output directory ready for the installer
#[test]
fn story_manifests_written_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let cluster = write_file(
        dir.path(),
        "cluster.json",
        &cluster_json("4.12.0", r#"{"api_ip": "192.168.111.5"}"#),
    );
    let output = dir.path().join("manifests");

    run(&[
        "addonctl",
        "manifests",
        "-f",
        path_str(&cluster),
        "-o",
        path_str(&output),
    ])
    .unwrap();

    for name in [
        "50_metallb_ns.yaml",
        "50_metallb_operator_group.yaml",
        "50_metallb_subscription.yaml",
        "metallb_operand.yaml",
    ] {
        assert!(output.join(name).is_file(), "missing {name}");
    }

    let namespace: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(output.join("50_metallb_ns.yaml")).unwrap())
            .unwrap();
    assert_eq!(namespace["kind"], "Namespace");
    assert_eq!(namespace["metadata"]["name"], "metallb-system");

    let operand = std::fs::read_to_string(output.join("metallb_operand.yaml")).unwrap();
    assert!(operand.contains("192.168.111.5/32"));
    assert!(operand.contains("kind: MetalLB"));
}

#[test]
fn test_manifests_stream_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let cluster = write_file(dir.path(), "cluster.json", &cluster_json("4.12.0", ""));

    let out = run(&["addonctl", "manifests", "-f", path_str(&cluster)]).unwrap();
    let kinds: Vec<String> = addons_common::manifest::split_documents(&out)
        .iter()
        .map(|doc| {
            let value: serde_yaml::Value = serde_yaml::from_str(doc).unwrap();
            value["kind"].as_str().unwrap().to_string()
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            "Namespace",
            "OperatorGroup",
            "Subscription",
            "MetalLB",
            "L2Advertisement",
            "Service",
            "Service"
        ]
    );
}

#[test]
fn test_missing_snapshot_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let err = run(&["addonctl", "requirements", "-f", path_str(&missing)]).unwrap_err();
    assert!(matches!(err, Error::ReadInput { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_malformed_snapshot_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let cluster = write_file(dir.path(), "cluster.json", "{ not json");

    let err = run(&["addonctl", "validate-cluster", "-f", path_str(&cluster)]).unwrap_err();
    assert!(matches!(err, Error::ParseInput { .. }));
}
