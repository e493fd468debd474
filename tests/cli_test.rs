//! CLI integration tests for the hc-options binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("hc-options"))
}

// Helper to create a temp model file
fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const SMALL_MODEL: &str = r#"[
    {"name": "type", "returnType": "String", "fullname": "chart.type",
     "products": ["highcharts"], "since": "1.0"},
    {"name": "useUTC", "returnType": "Boolean", "fullname": "global.useUTC",
     "products": ["highcharts"]},
    {"name": "enabled", "returnType": "Boolean", "fullname": "rangeSelector.enabled",
     "products": ["highstock"]},
    {"name": "outside", "returnType": "Boolean", "fullname": "tooltip.outside",
     "products": ["highcharts"], "since": "6.1.1"}
]"#;

mod batch_run {
    use super::*;

    #[test]
    fn prunes_a_model_file() {
        let dir = TempDir::new().unwrap();
        let model = write_temp_file(&dir, "dump.json", SMALL_MODEL);
        let output = dir.path().join("pruned.json");

        cmd()
            .args([
                "--source",
                model.to_str().unwrap(),
                "--max-version",
                "6.1.1",
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("return type: Boolean"))
            .stderr(predicate::str::contains("return type: String"));

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("chart.type"));
        assert!(written.contains("tooltip.outside"));
        assert!(!written.contains("global.useUTC"));
        assert!(!written.contains("rangeSelector"));
    }

    #[test]
    fn version_ceiling_drops_newer_options() {
        let dir = TempDir::new().unwrap();
        let model = write_temp_file(&dir, "dump.json", SMALL_MODEL);
        let output = dir.path().join("pruned.json");

        cmd()
            .args([
                "--source",
                model.to_str().unwrap(),
                "--max-version",
                "5.0",
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("chart.type"));
        assert!(!written.contains("tooltip.outside"));
    }

    #[test]
    fn bundled_snapshot_is_the_default_source() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("pruned.json");

        cmd()
            .args([
                "--max-version",
                "6.1.1",
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("attribute names"));

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("chart.type"));
        assert!(!written.contains("global.useUTC"));
    }

    #[test]
    fn pretty_prints_when_asked() {
        let dir = TempDir::new().unwrap();
        let model = write_temp_file(&dir, "dump.json", SMALL_MODEL);
        let output = dir.path().join("pruned.json");

        cmd()
            .args([
                "--source",
                model.to_str().unwrap(),
                "--max-version",
                "6.1.1",
                "--output",
                output.to_str().unwrap(),
                "--pretty",
            ])
            .assert()
            .success();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("[\n"));
    }
}

mod degraded_runs {
    use super::*;

    #[test]
    fn missing_source_degrades_to_empty_output() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("pruned.json");

        cmd()
            .args([
                "--source",
                "/nonexistent/dump.json",
                "--max-version",
                "6.1.1",
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("could not load options model"));

        assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
    }

    #[test]
    fn malformed_source_degrades_to_empty_output() {
        let dir = TempDir::new().unwrap();
        let model = write_temp_file(&dir, "dump.json", "this is not json");
        let output = dir.path().join("pruned.json");

        cmd()
            .args([
                "--source",
                model.to_str().unwrap(),
                "--max-version",
                "6.1.1",
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("could not load options model"));

        assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
    }

    #[test]
    fn empty_model_warns_about_missing_attributes() {
        let dir = TempDir::new().unwrap();
        let model = write_temp_file(&dir, "dump.json", "[]");
        let output = dir.path().join("pruned.json");

        cmd()
            .args([
                "--source",
                model.to_str().unwrap(),
                "--max-version",
                "6.1.1",
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("no attributes found"));
    }
}

#[cfg(feature = "remote")]
mod remote_source {
    use super::*;

    #[test]
    fn fetches_model_with_browser_user_agent() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/highcharts/option/dump.json")
            .match_header(
                "user-agent",
                mockito::Matcher::Regex("^Mozilla/5\\.0".into()),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SMALL_MODEL)
            .create();

        let dir = TempDir::new().unwrap();
        let output = dir.path().join("pruned.json");
        let url = format!("{}/highcharts/option/dump.json", server.url());

        cmd()
            .args([
                "--source",
                &url,
                "--max-version",
                "6.1.1",
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        mock.assert();
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("chart.type"));
    }

    #[test]
    fn server_error_degrades_to_empty_output() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/dump.json")
            .with_status(500)
            .create();

        let dir = TempDir::new().unwrap();
        let output = dir.path().join("pruned.json");
        let url = format!("{}/dump.json", server.url());

        cmd()
            .args([
                "--source",
                &url,
                "--max-version",
                "6.1.1",
                "--output",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stderr(predicate::str::contains("could not load options model"));

        assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
    }
}
