use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main amender configuration loaded from amender.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AmenderConfig {
    /// Where saved output goes
    #[serde(default)]
    pub output: OutputConfig,

    /// Named pipelines, each an ordered list of transform keys
    #[serde(default)]
    pub presets: IndexMap<String, Vec<String>>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory saved output is written to
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,

    /// File name without extension
    #[serde(default = "default_base_name")]
    pub base_name: String,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_base_name() -> String {
    "output".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: default_output_directory(),
            base_name: default_base_name(),
        }
    }
}

impl AmenderConfig {
    /// Keys of the named preset, in pipeline order.
    pub fn preset(&self, name: &str) -> Option<&[String]> {
        self.presets.get(name).map(Vec::as_slice)
    }
}


pub mod loader;
pub mod validation;

pub use loader::ConfigLoader;
pub use validation::ConfigValidator;
