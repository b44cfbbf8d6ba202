use std::path::PathBuf;
use std::process::Command;

fn temp_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "skuform-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn sample_script() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scripts/create-own.json")
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_skuform-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("duplicate-variant"));
}

#[test]
fn cli_runs_all_scenarios_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_skuform-tester");
    let output_path = temp_path("all");
    let output = Command::new(exe)
        .args(["--scenarios", "all", "--report", "json", "--output"])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let content = std::fs::read_to_string(output_path).expect("read output");
    let results: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let results = results.as_array().expect("array of results");
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r["passed"] == serde_json::Value::Bool(true)));
}

#[test]
fn cli_replays_script_file() {
    let exe = env!("CARGO_BIN_EXE_skuform-tester");
    let output = Command::new(exe)
        .args(["--report", "markdown", "--script"])
        .arg(sample_script())
        .output()
        .expect("run cli");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "report: {stdout}");
    assert!(stdout.contains("Create your own option"));
    assert!(stdout.contains("- **Passed**: 1"));
}

#[test]
fn cli_exits_nonzero_for_failing_script() {
    let exe = env!("CARGO_BIN_EXE_skuform-tester");
    let script_path = temp_path("failing.json");
    std::fs::write(
        &script_path,
        r#"{ "steps": [ { "group": "regular", "action": "remove_option", "id": 4 } ] }"#,
    )
    .expect("write script");
    let output = Command::new(exe)
        .args(["--report", "json", "--script"])
        .arg(&script_path)
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("step 1 was refused"), "report: {stdout}");
}

#[test]
fn cli_uses_config_file_presets() {
    let exe = env!("CARGO_BIN_EXE_skuform-tester");
    let config_path = temp_path("config.json");
    std::fs::write(&config_path, r#"{ "preset_types": [], "duplicate_suffix": " Copy" }"#)
        .expect("write config");
    let output = Command::new(exe)
        .args(["--scenarios", "duplicate-option", "--report", "json", "--config"])
        .arg(&config_path)
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("preset types"), "report: {stdout}");
}

#[test]
fn cli_reports_missing_config() {
    let exe = env!("CARGO_BIN_EXE_skuform-tester");
    let output = Command::new(exe)
        .args(["--config", "/no/such/editor.json"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load config"), "stderr: {stderr}");
}
