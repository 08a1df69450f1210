#![allow(clippy::result_large_err)]

use crate::core::error::AppError;
use crate::core::pipeline::Pipeline;
use crate::core::types::ErrorCategory;
use std::fs;
use std::path::{Path, PathBuf};

const FALLBACK_BASE_NAME: &str = "output";

/// `base.extension`, with trailing dots dropped from the base and leading
/// dots dropped from the extension so neither side doubles the separator.
pub fn output_file_name(base: &str, extension: &str) -> String {
    let base = base.trim_end_matches('.');
    let base = if base.is_empty() {
        FALLBACK_BASE_NAME
    } else {
        base
    };
    format!("{}.{}", base, extension.trim_start_matches('.'))
}

/// Write `content` into `dir` under the name the pipeline's extension
/// dictates, creating `dir` when needed. Returns the written path.
pub fn write_output(
    dir: &Path,
    base: &str,
    pipeline: &Pipeline,
    content: &str,
) -> Result<PathBuf, AppError> {
    fs::create_dir_all(dir).map_err(|e| {
        let mut error = AppError::new(
            ErrorCategory::IoError,
            format!("Failed to create output directory {}: {}", dir.display(), e),
        )
        .with_code("AMD-EXPORT-001");
        error.add_context("directory", &dir.display().to_string());
        error
    })?;

    let path = dir.join(output_file_name(base, pipeline.resolve_extension()));
    fs::write(&path, content).map_err(|e| {
        AppError::new(
            ErrorCategory::IoError,
            format!("Failed to write output file {}: {}", path.display(), e),
        )
        .with_code("AMD-EXPORT-002")
    })?;

    tracing::info!(path = %path.display(), bytes = content.len(), "saved output");
    Ok(path)
}
