use std::fs::write;
use std::process::Command;

use tempfile::tempdir;

fn write_fixture(base: &std::path::Path) {
    write(base.join("filter_out.txt"), "foo-0.1.0/src/gen.rs\n").expect("write filter_out.txt");

    write(
        base.join("input.json"),
        r#"{
  "data": [
    {
      "pkg": "demo",
      "raw_reports": [
        {"file": "registry/foo-0.2.7/src/gen.rs"},
        {"file": "demo/src/main.rs"},
        {"file": "demo/Cargo.lock"}
      ]
    }
  ]
}"#,
    )
    .expect("write input.json");
}

#[test]
fn filters_input_with_default_file_names() {
    let td = tempdir().expect("tempdir");
    let base = td.path();
    write_fixture(base);

    let exe = env!("CARGO_BIN_EXE_chaff");
    let output = Command::new(exe)
        .current_dir(base)
        .arg("input.json")
        .output()
        .expect("run chaff");

    assert!(output.status.success(), "chaff failed: {output:?}");

    // loaded patterns go to stdout before processing
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Loaded regex filters:"), "stdout: {stdout}");
    assert!(stdout.contains("foo-[^/]+/src/gen\\.rs"), "stdout: {stdout}");
    assert!(stdout.contains("rustlib/src/rust/library"), "stdout: {stdout}");

    let text = std::fs::read_to_string(base.join("filtered_output.json"))
        .expect("read filtered_output.json");
    let v: serde_json::Value = serde_json::from_str(&text).expect("parse output");
    let data = v["data"].as_array().expect("data array");

    assert_eq!(data.len(), 2, "survivor package plus lockfile entry: {v:#}");
    assert_eq!(data[0]["pkg"], "demo");
    assert_eq!(data[0]["count"], 1);
    assert_eq!(data[0]["raw_reports"][0]["file"], "demo/src/main.rs");
    assert_eq!(data[1]["file"], "demo/Cargo.lock");
}

#[test]
fn explicit_rules_and_output_paths() {
    let td = tempdir().expect("tempdir");
    let base = td.path();
    write_fixture(base);
    std::fs::rename(base.join("filter_out.txt"), base.join("rules.txt")).expect("rename rules");

    let exe = env!("CARGO_BIN_EXE_chaff");
    let output = Command::new(exe)
        .current_dir(base)
        .args(["input.json", "-r", "rules.txt", "-o", "result.json"])
        .output()
        .expect("run chaff");

    assert!(output.status.success(), "chaff failed: {output:?}");
    assert!(base.join("result.json").exists(), "result.json missing");
    assert!(
        !base.join("filtered_output.json").exists(),
        "default output should not be written"
    );
}

#[test]
fn missing_rule_file_exits_nonzero() {
    let td = tempdir().expect("tempdir");
    let base = td.path();
    write(base.join("input.json"), r#"{"data": []}"#).expect("write input.json");

    let exe = env!("CARGO_BIN_EXE_chaff");
    let output = Command::new(exe)
        .current_dir(base)
        .arg("input.json")
        .output()
        .expect("run chaff");

    assert!(!output.status.success(), "expected failure: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rule file"), "stderr: {stderr}");
    assert!(!base.join("filtered_output.json").exists());
}

#[test]
fn list_rules_skips_processing() {
    let td = tempdir().expect("tempdir");
    let base = td.path();
    write(base.join("filter_out.txt"), "special.rs\n").expect("write filter_out.txt");

    let exe = env!("CARGO_BIN_EXE_chaff");
    let output = Command::new(exe)
        .current_dir(base)
        // input does not exist; --list-rules must not try to read it
        .args(["no-such-input.json", "--list-rules"])
        .output()
        .expect("run chaff");

    assert!(output.status.success(), "chaff failed: {output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("special\\.rs"), "stdout: {stdout}");
    assert!(!base.join("filtered_output.json").exists());
}
