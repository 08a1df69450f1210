use amender::core::config::{ConfigLoader, ConfigValidator};
use amender::core::{write_output, ErrorCategory, Registry};
use amender::logging::{ConsoleOutput, LoggingConfig};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn clear_amender_env() {
    for v in &[
        "AMENDER_OUTPUT_DIR",
        "AMENDER_OUTPUT_BASE_NAME",
        "AMENDER_LOG_LEVEL",
    ] {
        env::remove_var(v);
    }
}

const FULL_CONFIG: &str = r#"
[output]
directory = "exports"
base_name = "report"

[presets]
tidy = ["strip-leading-spaces", "collapse-spaces"]
table = ["csv-to-tsv", "tsv-to-csv", "md-tbl", "md-ext"]

[logging]
default_level = "amender=info"
console_output = "none"
"#;

/// One file feeds both the command config and the logging config
#[test]
#[serial]
fn test_config_loading_integration() {
    clear_amender_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("amender.toml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    let config = ConfigLoader::load(Some(config_path.as_path())).unwrap();
    assert_eq!(config.output.directory, PathBuf::from("exports"));
    assert_eq!(config.output.base_name, "report");
    let names: Vec<&String> = config.presets.keys().collect();
    assert_eq!(names, vec!["tidy", "table"]);

    let registry = Registry::builtin().unwrap();
    ConfigValidator::validate(&config, &registry).unwrap();

    let logging = LoggingConfig::load(Some(config_path.as_path())).unwrap();
    assert_eq!(logging.default_level, "amender=info");
    assert_eq!(logging.console_output, ConsoleOutput::None);
    assert!(logging.log_file.is_none());
}

#[test]
#[serial]
fn test_environment_overrides_file_values() {
    clear_amender_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("amender.toml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    env::set_var("AMENDER_OUTPUT_DIR", "/tmp/elsewhere");
    env::set_var("AMENDER_OUTPUT_BASE_NAME", "from-env");
    env::set_var("AMENDER_LOG_LEVEL", "debug");

    let config = ConfigLoader::load(Some(config_path.as_path())).unwrap();
    let logging = LoggingConfig::load(Some(config_path.as_path())).unwrap();
    clear_amender_env();

    assert_eq!(config.output.directory, PathBuf::from("/tmp/elsewhere"));
    assert_eq!(config.output.base_name, "from-env");
    assert_eq!(logging.default_level, "debug");
    assert_eq!(config.presets.len(), 2);
}

#[test]
#[serial]
fn test_preset_with_unknown_key_fails_validation() {
    clear_amender_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("amender.toml");
    fs::write(&config_path, "[presets]\nbroken = [\"strip\", \"uppercase\"]\n").unwrap();

    let config = ConfigLoader::load(Some(config_path.as_path())).unwrap();
    let err = ConfigValidator::validate(&config, &Registry::builtin().unwrap()).unwrap_err();
    assert_eq!(err.category, ErrorCategory::ValidationError);
    assert_eq!(err.code, "AMD-CONFIG-005");
    assert_eq!(err.context.get("preset"), Some(&"broken".to_string()));
    assert_eq!(err.context.get("key"), Some(&"uppercase".to_string()));
}

#[test]
#[serial]
fn test_malformed_file_reports_parse_error() {
    clear_amender_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("amender.toml");
    fs::write(&config_path, "[output\nbase_name = 3").unwrap();

    let err = ConfigLoader::load(Some(config_path.as_path())).unwrap_err();
    assert_eq!(err.code, "AMD-CONFIG-002");
    assert!(err.message.contains("Failed to parse config file"));
}

#[test]
#[serial]
fn test_preset_pipeline_saves_with_forced_extension() {
    clear_amender_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("amender.toml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    let config = ConfigLoader::load(Some(config_path.as_path())).unwrap();
    let registry = Registry::builtin().unwrap();
    let pipeline = registry.pipeline(config.preset("table").unwrap()).unwrap();
    let output = pipeline.run("h1,h2\n1,2");

    let out_dir = temp_dir.path().join(&config.output.directory);
    let path = write_output(&out_dir, &config.output.base_name, &pipeline, &output).unwrap();

    assert_eq!(path, out_dir.join("report.md"));
    assert_eq!(fs::read_to_string(&path).unwrap(), output);
    assert!(output.starts_with("| h1 | h2 |"));
}
