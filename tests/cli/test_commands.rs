use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs the binary from an empty directory so no stray amender.toml is picked up.
fn amender(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("amender").unwrap();
    cmd.current_dir(workdir.path())
        .env_remove("RUST_LOG")
        .env_remove("AMENDER_OUTPUT_DIR")
        .env_remove("AMENDER_OUTPUT_BASE_NAME")
        .env_remove("AMENDER_LOG_LEVEL");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("presets"));
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_list_groups_by_category() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Tabular\n"))
        .stdout(predicate::str::contains("Word Equations"))
        .stdout(predicate::str::contains("csv-to-json"));
}

#[test]
fn test_list_single_category_as_json() {
    let dir = TempDir::new().unwrap();
    let output = amender(&dir)
        .args(["list", "--category", "paths", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let keys: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|summary| summary["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec!["unix-path", "windows-path", "git-bash-2", "wsl-path-2", "this-pc-full-path"]
    );
}

#[test]
fn test_show_describes_transform() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .args(["show", "json-ext"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".json (json-ext)"))
        .stdout(predicate::str::contains("Category: Force Extension"))
        .stdout(predicate::str::contains("Saves as: .json"));
}

#[test]
fn test_show_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .args(["show", "shout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AMD-LOOKUP-001"))
        .stderr(predicate::str::contains("shout"));
}

#[test]
fn test_run_with_inline_text() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .args(["run", "csv-to-tsv", "--text", "a,b\n1,2"])
        .assert()
        .success()
        .stdout("a\tb\n1\t2");
}

#[test]
fn test_run_reads_stdin() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .args(["run", "git-bash-2"])
        .write_stdin("C:\\Users\\a")
        .assert()
        .success()
        .stdout("/c/Users/a");
}

#[test]
fn test_empty_pipeline_passes_stdin_through_byte_for_byte() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .arg("run")
        .write_stdin("abc")
        .assert()
        .success()
        .stdout("abc");
}

#[test]
fn test_round_trip_keeps_trailing_newline_count() {
    let dir = TempDir::new().unwrap();
    let output = amender(&dir)
        .args(["run", "url-encode", "url-decode"])
        .write_stdin("a b\n")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"a b\n".to_vec());
}

#[test]
fn test_run_reads_input_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("pairs.csv");
    fs::write(&input, "x,1\ny,true\nz,").unwrap();

    amender(&dir)
        .args(["run", "csv-to-json", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout("{\"x\":1,\"y\":true,\"z\":null}");
}

#[test]
fn test_run_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .args(["run", "strip", "--input", "absent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AMD-INPUT-001"));
}

#[test]
fn test_run_remove_step() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .args(["run", "upper", "strip", "--remove", "0", "--text", "  keep case  "])
        .assert()
        .success()
        .stdout("keep case");
}

#[test]
fn test_run_remove_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .args(["run", "strip", "--remove", "-1", "--text", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AMD-PIPELINE-001"));
}

#[test]
fn test_run_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .args(["run", "strip", "nope", "--text", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AMD-LOOKUP-001"));
}

#[test]
fn test_run_save_uses_forced_extension() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .args([
            "run",
            "csv-to-json",
            "json-ext",
            "--text",
            "k,v",
            "--save",
            "--output-dir",
            "out",
            "--name",
            "pairs",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let saved = dir.path().join("out").join("pairs.json");
    assert_eq!(fs::read_to_string(saved).unwrap(), "{\"k\":\"v\"}");
}

#[test]
fn test_run_save_defaults_to_txt() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .args(["run", "upper", "--text", "abc", "--save"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(dir.path().join("output.txt")).unwrap(), "ABC");
}

#[test]
fn test_output_dir_requires_save() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .args(["run", "upper", "--text", "abc", "--output-dir", "out"])
        .assert()
        .failure();
}

#[test]
fn test_presets_from_default_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("amender.toml"),
        "[presets]\ntidy = [\"strip-leading-spaces\", \"collapse-spaces\"]\n",
    )
    .unwrap();

    amender(&dir)
        .arg("presets")
        .assert()
        .success()
        .stdout("tidy: strip-leading-spaces -> collapse-spaces\n");

    amender(&dir)
        .args(["run", "--preset", "tidy", "upper", "--text", "  a   b  "])
        .assert()
        .success()
        .stdout("A B");
}

#[test]
fn test_presets_without_config() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .arg("presets")
        .assert()
        .success()
        .stdout("No presets configured\n");
}

#[test]
fn test_explicit_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .args(["--config", "nowhere.toml", "presets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere.toml"));
}

#[test]
fn test_verbose_logs_pipeline_steps_to_stderr() {
    let dir = TempDir::new().unwrap();
    amender(&dir)
        .args(["-v", "run", "upper", "--text", "abc"])
        .assert()
        .success()
        .stdout("ABC")
        .stderr(predicate::str::contains("applying step"));
}
