use crate::core::types::Category;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list one category (slug or label, e.g. `paths` or "Word Equations")
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<Category>,

    /// Emit either terminal-friendly text or machine-readable JSON
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: ListFormat,
}

#[derive(Clone, Copy, clap::ValueEnum, Debug, PartialEq, Eq)]
pub enum ListFormat {
    /// Grouped, aligned listing
    Text,
    /// JSON array of transform summaries
    Json,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Key of the transform to describe
    #[arg(value_name = "KEY")]
    pub key: String,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Transform keys applied left to right, after any preset steps
    #[arg(value_name = "KEY")]
    pub keys: Vec<String>,

    /// Start the pipeline with the steps of a configured preset
    #[arg(long, value_name = "NAME", help_heading = "Pipeline")]
    pub preset: Option<String>,

    /// Remove the step at this zero-based index; repeat to remove several, in order
    #[arg(
        long,
        value_name = "INDEX",
        allow_negative_numbers = true,
        help_heading = "Pipeline"
    )]
    pub remove: Vec<isize>,

    /// Read input text from a file instead of stdin
    #[arg(long, value_name = "FILE", conflicts_with = "text", help_heading = "Input")]
    pub input: Option<PathBuf>,

    /// Use this string as input instead of stdin
    #[arg(long, value_name = "STRING", help_heading = "Input")]
    pub text: Option<String>,

    /// Write the result to <dir>/<name>.<ext> instead of printing it
    #[arg(long, help_heading = "Output")]
    pub save: bool,

    /// Directory for --save (default: [output] directory, or .)
    #[arg(long, value_name = "DIR", requires = "save", help_heading = "Output")]
    pub output_dir: Option<PathBuf>,

    /// File name without extension for --save (default: [output] base_name, or output)
    #[arg(long, value_name = "BASE", requires = "save", help_heading = "Output")]
    pub name: Option<String>,
}
