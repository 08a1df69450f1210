use crate::core::config::loader::CONFIG_FILE_NAME;
use crate::logging::layers::console::ConsoleOutput;
use crate::Result;
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

const DEFAULT_LEVEL: &str = "warn";

/// Environment variable overriding `logging.default_level`.
pub const LEVEL_ENV_VAR: &str = "AMENDER_LOG_LEVEL";

/// Resolved logging configuration after reading the config file and env overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub default_level: String,
    pub console_output: ConsoleOutput,
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL.to_string(),
            console_output: ConsoleOutput::default(),
            log_file: None,
        }
    }
}

impl LoggingConfig {
    /// Load configuration with deterministic precedence: defaults, config file, env overrides.
    ///
    /// Reads the `[logging]` table of `config_path`, or of amender.toml in the
    /// working directory when no path is given. A missing file keeps defaults.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = LoggingConfig::default();
        let path = config_path.unwrap_or_else(|| Path::new(CONFIG_FILE_NAME));
        if let Some(file_config) = Self::load_from_file(path)? {
            config.apply(file_config)?;
        }
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Option<TomlLogging>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read logging config {}", path.display()))?;
        let parsed: TomlLogging = toml::from_str(&content)
            .with_context(|| format!("failed to parse logging config {}", path.display()))?;
        Ok(Some(parsed))
    }

    fn apply(&mut self, toml: TomlLogging) -> Result<()> {
        if let Some(logging) = toml.logging {
            if let Some(default_level) = logging.default_level {
                self.default_level = default_level;
            }
            if let Some(console_output) = logging.console_output {
                self.console_output = ConsoleOutput::from_str(&console_output)
                    .map_err(|message| anyhow!(message))?;
            }
            if let Some(log_file) = logging.log_file {
                self.log_file = Some(PathBuf::from(log_file));
            }
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var(LEVEL_ENV_VAR) {
            if !level.trim().is_empty() {
                self.default_level = level;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        for directive in self.default_level.split(',') {
            Directive::from_str(directive.trim())
                .map_err(|_| anyhow!("logging.default_level must be a valid tracing directive"))?;
        }

        if let Some(log_file) = &self.log_file {
            if log_file.as_os_str().is_empty() {
                return Err(anyhow!("logging.log_file cannot be empty"));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct TomlLogging {
    pub logging: Option<TomlLoggingSection>,
}

#[derive(Debug, Deserialize)]
struct TomlLoggingSection {
    pub default_level: Option<String>,
    pub console_output: Option<String>,
    pub log_file: Option<String>,
}
