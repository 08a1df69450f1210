pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod registry;
pub mod transform;
pub mod types;

pub use config::{AmenderConfig, ConfigLoader, ConfigValidator};
pub use error::AppError;
pub use export::{output_file_name, write_output};
pub use pipeline::{Pipeline, PipelineError, DEFAULT_EXTENSION};
pub use registry::{Registry, RegistryBuilder, RegistryError};
pub use transform::{ApplyFn, Transform};
pub use types::*;
