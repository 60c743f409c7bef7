use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Helper struct to manage test environment
struct TestEnv {
    _temp_dir: TempDir,
    work_dir: PathBuf,
    binary_path: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let work_dir = temp_dir.path().to_path_buf();
        let binary_path = PathBuf::from(env!("CARGO_BIN_EXE_demo-ci"));

        Self {
            _temp_dir: temp_dir,
            work_dir,
            binary_path,
        }
    }

    /// Run demo-ci with the failure toggle set to `fail`, or removed when `None`.
    fn run(&self, args: &[&str], fail: Option<&str>) -> Result<String, String> {
        let mut command = Command::new(&self.binary_path);
        command.args(args).current_dir(&self.work_dir);
        match fail {
            Some(value) => command.env("FAIL_BUILD", value),
            None => command.env_remove("FAIL_BUILD"),
        };

        let output = command.output().expect("Failed to execute demo-ci");

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            Err(String::from_utf8_lossy(&output.stderr).to_string())
        }
    }

    fn dashboard_path(&self) -> PathBuf {
        self.work_dir.join("dist").join("index.html")
    }

    fn dashboard(&self) -> String {
        fs::read_to_string(self.dashboard_path()).expect("Dashboard should exist")
    }
}

fn metric(report: &Value, kind: &str) -> Option<u64> {
    report["metrics"]
        .as_array()
        .expect("metrics should be an array")
        .iter()
        .find(|m| m["kind"] == kind)
        .and_then(|m| m["value"].as_u64())
}

#[test]
fn test_default_command_builds_success_dashboard() {
    let env = TestEnv::new();
    assert!(!env.dashboard_path().exists());

    let output = env.run(&[], None).expect("Build failed");
    assert!(output.contains("SUCCESS mode"));

    let html = env.dashboard();
    assert!(html.contains("BUILD SUCCESSFUL"));
    assert!(!html.contains("BUILD FAILED"));
    assert!(html.contains(r#"<div class="metric-value">100%</div>"#));
}

#[test]
fn test_mixed_case_toggle_builds_failure_dashboard() {
    let env = TestEnv::new();

    let output = env
        .run(&["build", "--json"], Some("TRUE"))
        .expect("Build failed");
    let parsed: Value = serde_json::from_str(&output).expect("Should be valid JSON");

    assert_eq!(parsed["outcome"], "failure");
    let errors = metric(&parsed, "errors").expect("errors metric");
    assert!((2..10).contains(&errors), "errors {errors}");
    assert_eq!(metric(&parsed, "success_rate"), Some(0));
    assert_eq!(metric(&parsed, "tests_passed"), None);

    let html = env.dashboard();
    assert!(html.contains("BUILD FAILED"));
    assert!(!html.contains("BUILD SUCCESSFUL"));
    assert!(html.contains(r#"<div class="metric-value">0%</div>"#));
}

#[test]
fn test_other_toggle_values_are_success() {
    let env = TestEnv::new();

    for value in ["", "false", "1", "ture", " yes "] {
        let output = env
            .run(&["outcome"], Some(value))
            .expect("Outcome failed");
        assert_eq!(output.trim(), "success", "value {value:?}");
    }

    let output = env.run(&["outcome"], Some(" true ")).expect("Outcome failed");
    assert_eq!(output.trim(), "failure");
}

#[test]
fn test_build_json_report_for_success() {
    let env = TestEnv::new();

    let output = env
        .run(&["build", "--json", "--seed", "42"], None)
        .expect("Build failed");
    let parsed: Value = serde_json::from_str(&output).expect("Should be valid JSON");

    assert_eq!(parsed["outcome"], "success");
    assert_eq!(metric(&parsed, "success_rate"), Some(100));
    assert_eq!(metric(&parsed, "errors"), Some(0));
    let passed = metric(&parsed, "tests_passed").expect("tests passed metric");
    assert!((20..70).contains(&passed));
    assert_eq!(
        parsed["bytes"].as_u64().unwrap() as usize,
        env.dashboard().len()
    );
}

#[test]
fn test_fixed_seed_reproduces_metrics() {
    let env = TestEnv::new();

    let first: Value = serde_json::from_str(
        &env.run(&["build", "--json", "--seed", "7"], Some("true"))
            .expect("Build failed"),
    )
    .unwrap();
    let second: Value = serde_json::from_str(
        &env.run(&["build", "--json", "--seed", "7"], Some("true"))
            .expect("Build failed"),
    )
    .unwrap();

    assert_eq!(first["metrics"], second["metrics"]);
}

#[test]
fn test_unseeded_run_reports_replayable_seed() {
    let env = TestEnv::new();

    let first: Value = serde_json::from_str(
        &env.run(&["build", "--json"], None).expect("Build failed"),
    )
    .unwrap();
    let seed = first["seed"].as_u64().expect("seed in report").to_string();

    let replay: Value = serde_json::from_str(
        &env.run(&["build", "--json", "--seed", &seed], None)
            .expect("Build failed"),
    )
    .unwrap();

    assert_eq!(first["metrics"], replay["metrics"]);
}

#[test]
fn test_rerun_overwrites_previous_dashboard() {
    let env = TestEnv::new();

    env.run(&["build"], Some("true")).expect("First build failed");
    assert!(env.dashboard().contains("BUILD FAILED"));

    env.run(&["build"], None).expect("Second build failed");
    let html = env.dashboard();
    assert!(html.contains("BUILD SUCCESSFUL"));
    assert!(!html.contains("BUILD FAILED"));
}

#[test]
fn test_out_dir_flag_creates_nested_directory() {
    let env = TestEnv::new();

    env.run(&["build", "--out-dir", "site/public"], None)
        .expect("Build failed");

    let path = env.work_dir.join("site").join("public").join("index.html");
    assert!(path.is_file());
    assert!(!fs::read_to_string(path).unwrap().is_empty());
}

#[test]
fn test_config_file_is_honored() {
    let env = TestEnv::new();
    fs::write(
        env.work_dir.join("demo-ci.toml"),
        "out_dir = \"public\"\nfile_name = \"status.html\"\nfail_env = \"RED_BUILD\"\n",
    )
    .unwrap();

    let output = Command::new(&env.binary_path)
        .args(["build"])
        .current_dir(&env.work_dir)
        .env("RED_BUILD", "true")
        .env_remove("FAIL_BUILD")
        .output()
        .expect("Failed to execute demo-ci");
    assert!(output.status.success());

    let html = fs::read_to_string(env.work_dir.join("public").join("status.html")).unwrap();
    assert!(html.contains("BUILD FAILED"));
}

#[test]
fn test_invalid_config_fails() {
    let env = TestEnv::new();
    fs::write(env.work_dir.join("demo-ci.toml"), "unknown_key = 1\n").unwrap();

    let result = env.run(&["build"], None);
    assert!(result.is_err(), "Unknown config keys should be rejected");
    assert!(!env.dashboard_path().exists());
}

#[test]
fn test_missing_explicit_config_fails() {
    let env = TestEnv::new();

    let err = env
        .run(&["--config", "missing.toml", "build"], None)
        .unwrap_err();
    assert!(err.contains("Config file not found"));
}

#[test]
fn test_unwritable_destination_fails() {
    let env = TestEnv::new();
    fs::write(env.work_dir.join("dist"), "a file, not a directory").unwrap();

    let err = env.run(&["build"], None).unwrap_err();
    assert!(err.contains("Failed to create output directory"));
}

#[test]
fn test_outcome_json() {
    let env = TestEnv::new();

    let output = env
        .run(&["outcome", "--json"], Some("True"))
        .expect("Outcome failed");
    let parsed: Value = serde_json::from_str(&output).expect("Should be valid JSON");
    assert_eq!(parsed["outcome"], "failure");
    assert_eq!(parsed["fail_env"], "FAIL_BUILD");
    assert!(!env.dashboard_path().exists());
}
